//! Slot for the one pending advance task

use tokio::task::AbortHandle;

/// Holds at most one scheduled advance. Arming a new one aborts the old.
#[derive(Debug, Default)]
pub struct AdvanceTimer {
    pending: Option<AbortHandle>,
}

impl AdvanceTimer {
    pub fn arm(&mut self, handle: AbortHandle) {
        self.cancel();
        self.pending = Some(handle);
    }

    /// Abort the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Forget the pending task without aborting it. Used by the task itself
    /// once it has fired.
    pub fn disarm(&mut self) {
        self.pending = None;
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for AdvanceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_arm_replaces_previous_task() {
        let mut timer = AdvanceTimer::default();
        let first = tokio::spawn(tokio::time::sleep(Duration::from_secs(60)));
        timer.arm(first.abort_handle());
        let second = tokio::spawn(tokio::time::sleep(Duration::from_secs(60)));
        timer.arm(second.abort_handle());

        assert!(first.await.unwrap_err().is_cancelled());
        assert!(timer.is_armed());
        timer.cancel();
        assert!(second.await.unwrap_err().is_cancelled());
        assert!(!timer.is_armed());
    }

    #[tokio::test]
    async fn test_disarm_does_not_abort() {
        let mut timer = AdvanceTimer::default();
        let task = tokio::spawn(async { 7 });
        timer.arm(task.abort_handle());
        timer.disarm();
        assert_eq!(task.await.unwrap(), 7);
    }
}
