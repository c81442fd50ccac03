use std::future::Future;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Background work owned by one mounted panel.
///
/// The spawned future's output is delivered over `sender`. Dropping the slot
/// (the panel unmounting) aborts whatever is still running, so no result is
/// committed after teardown.
pub struct TaskSlot {
    runtime: Handle,
    current: Option<JoinHandle<()>>,
}

impl TaskSlot {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            current: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.current.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn spawn<T, F>(&mut self, work: F, sender: async_channel::Sender<T>)
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
    {
        if self.cancel() {
            log::warn!("Replacing a task that was still running");
        }
        self.current = Some(self.runtime.spawn(async move {
            let output = work.await;
            if sender.send(output).await.is_err() {
                log::debug!("Result receiver gone, dropping output");
            }
        }));
    }

    /// Abort the running task. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        match self.current.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        if self.cancel() {
            log::info!("Cancelled pending work on teardown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn delivers_output() {
        let (tx, rx) = async_channel::unbounded();
        let mut slot = TaskSlot::new(Handle::current());
        slot.spawn(async { 7 }, tx);
        assert_eq!(rx.recv().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn dropping_the_slot_discards_late_results() {
        let (tx, rx) = async_channel::unbounded::<u32>();
        let mut slot = TaskSlot::new(Handle::current());
        slot.spawn(
            async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                1
            },
            tx,
        );
        assert!(slot.is_running());
        drop(slot);

        let outcome = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("channel should close once the task is aborted");
        assert!(outcome.is_err());
    }

    #[tokio::test]
    async fn cancel_reports_whether_work_was_pending() {
        let (tx, _rx) = async_channel::unbounded::<()>();
        let mut slot = TaskSlot::new(Handle::current());
        assert!(!slot.cancel());
        slot.spawn(
            async {
                tokio::time::sleep(Duration::from_secs(60)).await;
            },
            tx,
        );
        assert!(slot.cancel());
        assert!(!slot.is_running());
    }
}
