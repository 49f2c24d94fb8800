//! Key and paste event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::PathBuf;

use crate::model::{InputMode, Overlay, SPEED_PRESETS};
use super::AppController;

const PASTED_LABEL: &str = "pasted text";

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let mut model = self.model.lock().await;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            model.set_should_quit(true);
            return Ok(());
        }

        // Handle error message first (blocks all other interactions)
        if model.has_error() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                model.clear_error();
            }
            return Ok(());
        }

        match model.overlay() {
            Overlay::Input(mode) => {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                // Text takes newlines on Enter; Ctrl+Enter or Ctrl+S submits
                let submit = match mode {
                    InputMode::Text => {
                        (key.code == KeyCode::Enter && ctrl) || (key.code == KeyCode::Char('s') && ctrl)
                    }
                    InputMode::FilePath => key.code == KeyCode::Enter,
                };
                if submit {
                    let input = model.take_input();
                    drop(model);
                    self.submit_input(mode, input).await;
                    return Ok(());
                }

                match key.code {
                    KeyCode::Esc => model.close_overlay(),
                    KeyCode::Enter if mode == InputMode::Text => model.append_input("\n"),
                    KeyCode::Backspace => model.backspace_input(),
                    KeyCode::Char('u') if ctrl => model.clear_input(),
                    KeyCode::Char(c) if !is_chord(&key) => {
                        let mut buf = [0u8; 4];
                        model.append_input(c.encode_utf8(&mut buf));
                    }
                    KeyCode::Tab if mode == InputMode::Text => model.append_input("\t"),
                    _ => {}
                }
                return Ok(());
            }
            Overlay::Help => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('h' | 'H' | 'i' | 'I' | 'q' | 'Q')) {
                    model.close_overlay();
                }
                return Ok(());
            }
            Overlay::Summary => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('s' | 'S' | 'q' | 'Q')) {
                    model.close_overlay();
                }
                return Ok(());
            }
            Overlay::None => {}
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true);
            }
            // Play/Pause toggle
            KeyCode::Char(' ') => {
                drop(model);
                self.toggle_playback().await;
            }
            KeyCode::Enter => {
                drop(model);
                self.play().await;
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                drop(model);
                self.pause().await;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                drop(model);
                self.restart().await;
            }
            KeyCode::Char(c @ '1'..='6') => {
                let preset = SPEED_PRESETS[c as usize - '1' as usize];
                drop(model);
                self.set_speed(preset).await;
            }
            KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
                drop(model);
                self.faster().await;
            }
            KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => {
                drop(model);
                self.slower().await;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                model.show_summary();
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                model.open_input(InputMode::Text);
            }
            KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Char('o') | KeyCode::Char('O') => {
                model.open_input(InputMode::FilePath);
            }
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('i') | KeyCode::Char('I') => {
                model.show_help();
            }
            _ => {}
        }
        Ok(())
    }

    /// Bracketed paste. Only meaningful while a prompt is open.
    pub async fn handle_paste(&self, text: String) {
        let mut model = self.model.lock().await;
        match model.overlay() {
            Overlay::Input(InputMode::Text) => model.append_input(&text),
            // a path never spans lines
            Overlay::Input(InputMode::FilePath) => model.append_input(text.trim()),
            _ => tracing::debug!(chars = text.len(), "Paste ignored outside input prompt"),
        }
    }

    async fn submit_input(&self, mode: InputMode, input: String) {
        match mode {
            InputMode::Text => self.load_text(input.trim().to_string(), PASTED_LABEL).await,
            InputMode::FilePath => {
                let path = input.trim();
                if path.is_empty() {
                    return;
                }
                self.open_file(&expand_home(path)).await;
            }
        }
    }
}

/// Control and Alt combinations are commands, never typed characters.
fn is_chord(key: &KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}
