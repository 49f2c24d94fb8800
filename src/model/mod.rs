//! Model module - Reading state and the algorithms behind it
//!
//! This module contains the reading core and the application state built on it.
//! It is organized into submodules by responsibility:
//!
//! - `document`: Tokenizer and the loaded document
//! - `anchor`: Optimal Recognition Point placement
//! - `pacing`: Per-word display timing and speed limits
//! - `playback`: Playback state machine
//! - `summary`: Extractive gist of a document
//! - `timer`: Slot for the single pending advance task
//! - `types`: UI state and render snapshots
//! - `app_model`: Main application model with state management methods

mod document;
mod anchor;
mod pacing;
mod playback;
mod summary;
mod timer;
mod types;
mod app_model;

pub use document::Document;
pub use anchor::AnchorSplit;
pub use pacing::{DEFAULT_WPM, MAX_WPM, MIN_WPM, SPEED_PRESETS};
pub use summary::DEFAULT_MAX_SENTENCES;
pub use types::{InputMode, Overlay, ReaderView, UiState};

pub use app_model::AppModel;
