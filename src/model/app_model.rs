//! Main application model with state management

use std::time::Instant;
use tokio::sync::watch;
use tokio::task::AbortHandle;

use super::anchor::AnchorSplit;
use super::document::Document;
use super::pacing::WPM_STEP;
use super::playback::{AdvanceOutcome, PlaybackSnapshot, Reader};
use super::summary::summarize;
use super::timer::AdvanceTimer;
use super::types::{InputMode, Overlay, ReaderView, UiState};

const ERROR_DISPLAY_SECS: u64 = 5;

/// The single authoritative store: reader, UI state and the pending timer.
///
/// Playback commands that move the position or change the running flag
/// cancel the pending advance before returning, so a timer armed for an
/// earlier state can never fire into a later one.
pub struct AppModel {
    reader: Reader,
    ui_state: UiState,
    source_label: String,
    summary_bullets: usize,
    should_quit: bool,
    advance_timer: AdvanceTimer,
    changes: watch::Sender<PlaybackSnapshot>,
}

impl AppModel {
    pub fn new(document: Document, source_label: impl Into<String>, wpm: u32, summary_bullets: usize) -> Self {
        let reader = Reader::new(document, wpm);
        let (changes, _) = watch::channel(reader.snapshot());
        Self {
            reader,
            ui_state: UiState::default(),
            source_label: source_label.into(),
            summary_bullets,
            should_quit: false,
            advance_timer: AdvanceTimer::default(),
            changes,
        }
    }

    /// Receive a snapshot every time playback state changes.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackSnapshot> {
        self.changes.subscribe()
    }

    fn publish(&self) {
        let snapshot = self.reader.snapshot();
        self.changes.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }

    pub fn reader(&self) -> &Reader {
        &self.reader
    }

    // ========================================================================
    // Playback commands
    // ========================================================================

    pub fn load_text(&mut self, text: impl Into<String>, source_label: impl Into<String>) {
        self.advance_timer.cancel();
        self.reader.load_text(text);
        self.source_label = source_label.into();
        tracing::info!(
            source = %self.source_label,
            words = self.reader.total_words(),
            "Document loaded"
        );
        self.publish();
    }

    pub fn play(&mut self) {
        self.advance_timer.cancel();
        self.reader.play();
        self.publish();
    }

    pub fn pause(&mut self) {
        self.advance_timer.cancel();
        self.reader.pause();
        self.publish();
    }

    pub fn toggle(&mut self) {
        self.advance_timer.cancel();
        self.reader.toggle();
        self.publish();
    }

    pub fn restart(&mut self) {
        self.advance_timer.cancel();
        self.reader.restart();
        self.publish();
    }

    pub fn advance(&mut self) -> AdvanceOutcome {
        self.advance_timer.cancel();
        let outcome = self.reader.advance();
        if outcome == AdvanceOutcome::Finished {
            tracing::info!(words = self.reader.total_words(), "Reached end of document");
        }
        self.publish();
        outcome
    }

    /// Takes effect on the next delay computation; the pending timer stays.
    pub fn set_speed(&mut self, wpm: u32) {
        self.reader.set_speed(wpm);
        self.publish();
    }

    pub fn speed_up(&mut self) {
        self.set_speed(self.reader.speed().saturating_add(WPM_STEP));
    }

    pub fn slow_down(&mut self) {
        self.set_speed(self.reader.speed().saturating_sub(WPM_STEP));
    }

    // ========================================================================
    // Advance timer
    // ========================================================================

    pub fn arm_advance(&mut self, handle: AbortHandle) {
        self.advance_timer.arm(handle);
    }

    pub fn disarm_advance(&mut self) {
        self.advance_timer.disarm();
    }

    pub fn cancel_advance(&mut self) {
        self.advance_timer.cancel();
    }

    #[cfg(test)]
    pub fn is_advance_armed(&self) -> bool {
        self.advance_timer.is_armed()
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub fn get_ui_state(&self) -> UiState {
        self.ui_state.clone()
    }

    pub fn overlay(&self) -> Overlay {
        self.ui_state.overlay
    }

    pub fn show_summary(&mut self) {
        self.ui_state.summary = summarize(self.reader.document().raw_text(), self.summary_bullets);
        self.ui_state.overlay = Overlay::Summary;
    }

    pub fn show_help(&mut self) {
        self.ui_state.overlay = Overlay::Help;
    }

    /// Open the text or path prompt. Reading pauses while it is up.
    ///
    /// The text prompt starts from the current document so it can be edited.
    pub fn open_input(&mut self, mode: InputMode) {
        if self.reader.is_running() {
            self.pause();
        }
        self.ui_state.input_buffer = match mode {
            InputMode::Text => self.reader.document().raw_text().to_string(),
            InputMode::FilePath => String::new(),
        };
        self.ui_state.overlay = Overlay::Input(mode);
    }

    pub fn close_overlay(&mut self) {
        if let Overlay::Input(_) = self.ui_state.overlay {
            self.ui_state.input_buffer.clear();
        }
        self.ui_state.overlay = Overlay::None;
    }

    pub fn append_input(&mut self, text: &str) {
        self.ui_state.input_buffer.push_str(text);
    }

    pub fn backspace_input(&mut self) {
        self.ui_state.input_buffer.pop();
    }

    pub fn clear_input(&mut self) {
        self.ui_state.input_buffer.clear();
    }

    /// Close the prompt and hand back what was typed.
    pub fn take_input(&mut self) -> String {
        let text = std::mem::take(&mut self.ui_state.input_buffer);
        self.ui_state.overlay = Overlay::None;
        text
    }

    pub fn set_error(&mut self, message: String) {
        self.ui_state.error_message = Some(message);
        self.ui_state.error_timestamp = Some(Instant::now());
    }

    pub fn clear_error(&mut self) {
        self.ui_state.error_message = None;
        self.ui_state.error_timestamp = None;
    }

    pub fn has_error(&self) -> bool {
        self.ui_state.error_message.is_some()
    }

    pub fn auto_clear_old_errors(&mut self) {
        if let Some(timestamp) = self.ui_state.error_timestamp {
            if timestamp.elapsed().as_secs() > ERROR_DISPLAY_SECS {
                self.clear_error();
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }

    pub fn reader_view(&self) -> ReaderView {
        ReaderView {
            word: AnchorSplit::new(self.reader.current_word().unwrap_or_default()),
            playback: self.reader.snapshot(),
            remaining_ms: self.reader.remaining_ms(),
            source_label: self.source_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::summary::NO_SUMMARY_TEXT;
    use std::time::Duration;

    fn model(text: &str) -> AppModel {
        AppModel::new(Document::new(text), "test", 300, 6)
    }

    fn parked_task() -> tokio::task::JoinHandle<()> {
        tokio::spawn(tokio::time::sleep(Duration::from_secs(3600)))
    }

    #[tokio::test]
    async fn test_commands_publish_snapshots() {
        let mut m = model("a b c");
        let mut rx = m.subscribe();
        m.play();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_running);

        m.advance();
        assert_eq!(rx.borrow_and_update().current_index, 1);

        m.set_speed(600);
        assert_eq!(rx.borrow_and_update().speed, 600);
    }

    #[tokio::test]
    async fn test_no_op_commands_do_not_notify() {
        let mut m = model("a b c");
        let mut rx = m.subscribe();
        m.pause();
        m.restart();
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_pause_cancels_pending_advance() {
        let mut m = model("a b c");
        m.play();
        let task = parked_task();
        m.arm_advance(task.abort_handle());
        assert!(m.is_advance_armed());

        m.pause();
        assert!(task.await.unwrap_err().is_cancelled());
        assert!(!m.is_advance_armed());
    }

    #[tokio::test]
    async fn test_load_text_cancels_pending_advance() {
        let mut m = model("a b c");
        m.play();
        let task = parked_task();
        m.arm_advance(task.abort_handle());

        m.load_text("new text", "pasted");
        assert!(task.await.unwrap_err().is_cancelled());
        assert!(!m.reader().is_running());
        assert_eq!(m.reader().total_words(), 2);
        assert_eq!(m.reader_view().source_label, "pasted");
    }

    #[tokio::test]
    async fn test_set_speed_keeps_pending_advance() {
        let mut m = model("a b c");
        m.play();
        let task = parked_task();
        m.arm_advance(task.abort_handle());

        m.speed_up();
        assert_eq!(m.reader().speed(), 350);
        assert!(m.is_advance_armed());
        m.cancel_advance();
    }

    #[test]
    fn test_speed_steps_clamp() {
        let mut m = AppModel::new(Document::new("a"), "test", 60, 6);
        m.slow_down();
        assert_eq!(m.reader().speed(), 50);
        m.slow_down();
        assert_eq!(m.reader().speed(), 50);
        m.set_speed(1490);
        m.speed_up();
        assert_eq!(m.reader().speed(), 1500);
    }

    #[test]
    fn test_open_input_pauses_reading() {
        let mut m = model("a b c");
        m.play();
        m.append_input("stale");
        m.open_input(InputMode::Text);
        assert!(!m.reader().is_running());
        assert_eq!(m.overlay(), Overlay::Input(InputMode::Text));
        assert_eq!(m.get_ui_state().input_buffer, "a b c");

        m.clear_input();
        m.append_input("hello ");
        m.append_input("there!");
        m.backspace_input();
        assert_eq!(m.take_input(), "hello there");
        assert_eq!(m.overlay(), Overlay::None);
    }

    #[test]
    fn test_path_prompt_starts_empty() {
        let mut m = model("a b c");
        m.open_input(InputMode::Text);
        m.close_overlay();
        m.open_input(InputMode::FilePath);
        assert!(m.get_ui_state().input_buffer.is_empty());
    }

    #[test]
    fn test_show_summary_uses_loaded_text() {
        let mut m = model("short");
        m.show_summary();
        assert_eq!(m.get_ui_state().summary, vec![NO_SUMMARY_TEXT]);
        assert_eq!(m.overlay(), Overlay::Summary);
        m.close_overlay();
        assert_eq!(m.overlay(), Overlay::None);
    }

    #[test]
    fn test_error_lifecycle() {
        let mut m = model("a");
        m.set_error("boom".to_string());
        assert!(m.has_error());
        m.auto_clear_old_errors();
        assert!(m.has_error());
        m.clear_error();
        assert!(!m.has_error());
    }

    #[test]
    fn test_reader_view_for_empty_document() {
        let m = model("");
        let view = m.reader_view();
        assert_eq!(view.word, AnchorSplit::default());
        assert_eq!(view.playback.total_words, 0);
        assert_eq!(view.playback.progress, 0.0);
    }
}
