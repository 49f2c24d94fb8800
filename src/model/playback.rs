//! Playback state machine driving the word stream

use std::time::Duration;

use super::document::Document;
use super::pacing::{self, DEFAULT_WPM};

/// Position, running flag and speed of the reader.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub current_index: usize,
    pub is_running: bool,
    pub speed: u32,
    /// Percent in [0, 100]. Stored rather than derived: natural completion
    /// parks on the last word with progress at 100.
    pub progress: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_index: 0,
            is_running: false,
            speed: DEFAULT_WPM,
            progress: 0.0,
        }
    }
}

/// Consistent copy of the playback state handed to observers.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackSnapshot {
    pub current_index: usize,
    pub total_words: usize,
    pub progress: f64,
    pub is_running: bool,
    pub speed: u32,
    pub finished: bool,
}

/// What a call to [`Reader::advance`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the next word.
    Advanced,
    /// Reached the last word and stopped.
    Finished,
    /// Not running or nothing loaded; state untouched.
    Ignored,
}

/// The loaded document together with its playback state.
///
/// Every operation is total: speeds are clamped, an empty document is
/// inert, and commands that do not apply are no-ops.
#[derive(Clone, Debug, Default)]
pub struct Reader {
    document: Document,
    state: PlaybackState,
}

impl Reader {
    pub fn new(document: Document, speed: u32) -> Self {
        Self {
            document,
            state: PlaybackState {
                speed: pacing::clamp_wpm(speed),
                ..PlaybackState::default()
            },
        }
    }

    /// Replace the document and rewind, whatever the previous state.
    pub fn load_text(&mut self, text: impl Into<String>) {
        self.document = Document::new(text);
        self.state.current_index = 0;
        self.state.progress = 0.0;
        self.state.is_running = false;
    }

    /// Start reading. Rewinds first when the document was read to the end.
    ///
    /// Idempotent while running; an empty document never starts.
    pub fn play(&mut self) {
        if self.state.is_running || self.document.is_empty() {
            return;
        }
        if self.is_finished() || self.state.current_index >= self.document.len() {
            self.state.current_index = 0;
            self.state.progress = 0.0;
        }
        self.state.is_running = true;
    }

    pub fn pause(&mut self) {
        self.state.is_running = false;
    }

    pub fn toggle(&mut self) {
        if self.state.is_running {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Back to the first word, stopped.
    pub fn restart(&mut self) {
        self.state.current_index = 0;
        self.state.progress = 0.0;
        self.state.is_running = false;
    }

    /// Step to the next word. Only acts while running.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let total = self.document.len();
        if !self.state.is_running || total == 0 {
            return AdvanceOutcome::Ignored;
        }

        let next = self.state.current_index + 1;
        if next >= total {
            self.state.current_index = total - 1;
            self.state.progress = 100.0;
            self.state.is_running = false;
            return AdvanceOutcome::Finished;
        }

        self.state.current_index = next;
        self.state.progress = next as f64 / total as f64 * 100.0;
        AdvanceOutcome::Advanced
    }

    /// Change speed without touching position or running state.
    pub fn set_speed(&mut self, wpm: u32) {
        self.state.speed = pacing::clamp_wpm(wpm);
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    #[cfg(test)]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current_word(&self) -> Option<&str> {
        self.document.word(self.state.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn total_words(&self) -> usize {
        self.document.len()
    }

    pub fn progress_percent(&self) -> f64 {
        if self.document.is_empty() {
            0.0
        } else {
            self.state.progress
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn speed(&self) -> u32 {
        self.state.speed
    }

    /// Read through to the last word by natural completion.
    pub fn is_finished(&self) -> bool {
        !self.document.is_empty()
            && self.state.current_index + 1 >= self.document.len()
            && self.state.progress >= 100.0
    }

    /// How long the current word should stay up, if a timer is needed.
    pub fn next_delay(&self) -> Option<Duration> {
        if !self.state.is_running {
            return None;
        }
        self.current_word()
            .map(|word| pacing::word_delay(word, self.state.speed))
    }

    /// Estimated time left at the current speed, current word included.
    pub fn remaining_ms(&self) -> f64 {
        if self.is_finished() {
            return 0.0;
        }
        self.document
            .words()
            .iter()
            .skip(self.state.current_index)
            .map(|word| pacing::word_delay_ms(word, self.state.speed))
            .sum()
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_index: self.state.current_index,
            total_words: self.document.len(),
            progress: self.progress_percent(),
            is_running: self.state.is_running,
            speed: self.state.speed,
            finished: self.is_finished(),
        }
    }
}
