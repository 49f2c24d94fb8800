//! Playback control methods

use std::path::Path;

use crate::source;

use super::AppController;

impl AppController {
    pub async fn toggle_playback(&self) {
        let mut model = self.model.lock().await;
        model.toggle();
        tracing::debug!(
            is_running = model.reader().is_running(),
            index = model.reader().current_index(),
            "Toggled playback"
        );
        self.arm_timer(&mut model);
    }

    pub async fn play(&self) {
        let mut model = self.model.lock().await;
        model.play();
        tracing::debug!(index = model.reader().current_index(), "Play");
        self.arm_timer(&mut model);
    }

    pub async fn pause(&self) {
        let mut model = self.model.lock().await;
        model.pause();
        tracing::debug!(index = model.reader().current_index(), "Pause");
        self.arm_timer(&mut model);
    }

    pub async fn restart(&self) {
        let mut model = self.model.lock().await;
        model.restart();
        tracing::debug!("Restart");
        self.arm_timer(&mut model);
    }

    pub async fn set_speed(&self, wpm: u32) {
        let mut model = self.model.lock().await;
        model.set_speed(wpm);
        tracing::debug!(wpm = model.reader().speed(), "Speed set");
    }

    pub async fn faster(&self) {
        let mut model = self.model.lock().await;
        model.speed_up();
        tracing::debug!(wpm = model.reader().speed(), "Speed up");
    }

    pub async fn slower(&self) {
        let mut model = self.model.lock().await;
        model.slow_down();
        tracing::debug!(wpm = model.reader().speed(), "Slow down");
    }

    /// Replace the document. Empty input is refused and leaves the reader alone.
    pub async fn load_text(&self, text: String, label: &str) {
        let mut model = self.model.lock().await;
        if text.trim().is_empty() {
            tracing::warn!(source = label, "Ignoring empty text");
            model.set_error("No text to read.".to_string());
            return;
        }
        model.load_text(text, label);
        self.arm_timer(&mut model);
    }

    pub async fn open_file(&self, path: &Path) {
        // read outside the model lock
        let result = {
            let path = path.to_path_buf();
            tokio::task::spawn_blocking(move || source::load_text_file(&path))
                .await
                .map_err(anyhow::Error::from)
                .and_then(|r| r)
        };

        match result {
            Ok(text) => {
                let label = source::source_label(path);
                self.load_text(text, &label).await;
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to open file");
                let mut model = self.model.lock().await;
                model.set_error(Self::format_error(&e));
            }
        }
    }
}
