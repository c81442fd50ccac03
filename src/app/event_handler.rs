use super::state::{BackendEvent, SharedState};

/// Handle a backend event on the GTK main thread.
pub fn handle_backend_event(state: &SharedState, event: BackendEvent) {
    match event {
        BackendEvent::WorkFinished { mount_id, outcome } => {
            let view = {
                let s = state.borrow();
                match &s.mounted {
                    Some(mounted) if mounted.id == mount_id => {
                        log::info!("Processing finished on {}", mounted.tab.id());
                        mounted.view.clone()
                    }
                    _ => {
                        log::debug!("Discarding late result for panel #{mount_id}");
                        return;
                    }
                }
            };

            // The view may touch its widgets, which re-enter state; no borrow is held here.
            if let Some(activity) = view.finish(outcome) {
                log::info!("{}: {}", activity.kind.label(), activity.title);
                state.borrow_mut().activity.record(activity);
            }
        }
    }
}
