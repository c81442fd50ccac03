use newsdesk::panels::Work;

use super::state::{BackendEvent, SharedState};

/// Run a panel's work on the tokio runtime, tied to the mounting that asked for it.
pub fn dispatch_work(state: &SharedState, mount_id: u64, work: Work) {
    let mut s = state.borrow_mut();
    let processor = s.processor.clone();
    let sender = s.backend_sender.clone();

    let Some(mounted) = s.mounted.as_mut().filter(|m| m.id == mount_id) else {
        log::debug!("Ignoring work from unmounted panel #{mount_id}");
        return;
    };
    log::info!(
        "Processing started on {} via {}",
        mounted.tab.id(),
        processor.name()
    );

    mounted.task.spawn(
        async move {
            let outcome = work.run(processor).await;
            BackendEvent::WorkFinished { mount_id, outcome }
        },
        sender,
    );
}
