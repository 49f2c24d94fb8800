//! Word-advance timer
//!
//! Exactly one advance task exists while reading. Model commands cancel it
//! under the lock; [`AppController::arm_timer`] then starts a fresh one for
//! the current word if the reader is still running.

use crate::model::AppModel;

use super::AppController;

impl AppController {
    /// Replace the pending advance with one for the current word.
    ///
    /// Must be called with the model lock held, after any playback command.
    pub(crate) fn arm_timer(&self, model: &mut AppModel) {
        model.cancel_advance();

        let Some(delay) = model.reader().next_delay() else {
            return;
        };

        let controller = self.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            controller.on_timer_fired().await;
        });
        tracing::trace!(
            index = model.reader().current_index(),
            delay_ms = delay.as_millis() as u64,
            "Advance armed"
        );
        model.arm_advance(task.abort_handle());
    }

    async fn on_timer_fired(&self) {
        let mut model = self.model.lock().await;
        // This task is the armed one; drop the handle so advancing does not abort it
        model.disarm_advance();
        model.advance();
        self.arm_timer(&mut model);
    }
}
