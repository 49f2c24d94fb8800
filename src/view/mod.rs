//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, popup placement)
//! - `word`: The RSVP word with its anchor letter on the centre column
//! - `progress`: Top status bar and bottom progress gauge
//! - `overlays`: Modal overlays (error, gist, help, input prompt)

mod utils;
mod word;
mod progress;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{Overlay, ReaderView, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, view: &ReaderView, ui_state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title, state and speed
                Constraint::Min(0),    // Word
                Constraint::Length(3), // Progress gauge
            ])
            .split(frame.area());

        progress::render_status_bar(frame, chunks[0], view);
        word::render_word(frame, chunks[1], view);
        progress::render_progress_bar(frame, chunks[2], view);

        match ui_state.overlay {
            Overlay::Summary => overlays::render_summary(frame, &ui_state.summary),
            Overlay::Help => overlays::render_help_popup(frame),
            Overlay::Input(mode) => overlays::render_input_prompt(frame, mode, &ui_state.input_buffer),
            Overlay::None => {}
        }

        // Error notification overlay (if there's an error)
        if ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, ui_state);
        }
    }
}
