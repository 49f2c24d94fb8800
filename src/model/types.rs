//! UI-facing state and render snapshots

use std::time::Instant;

use super::anchor::AnchorSplit;
use super::playback::PlaybackSnapshot;

/// What the free-text prompt is collecting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Text,
    FilePath,
}

/// The overlay currently covering the reading area, if any
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Summary,
    Help,
    Input(InputMode),
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub overlay: Overlay,
    pub input_buffer: String,
    pub summary: Vec<String>,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            overlay: Overlay::None,
            input_buffer: String::new(),
            summary: Vec::new(),
            error_message: None,
            error_timestamp: None,
        }
    }
}

/// Everything the view needs for one frame
#[derive(Clone, Debug)]
pub struct ReaderView {
    pub word: AnchorSplit,
    pub playback: PlaybackSnapshot,
    pub remaining_ms: f64,
    pub source_label: String,
}
