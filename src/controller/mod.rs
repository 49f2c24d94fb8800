//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! funnels every change through the model and keeps the advance timer armed.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key and paste event handling
//! - `playback`: Playback and document commands
//! - `scheduler`: The single pending word-advance timer

mod input;
mod playback;
mod scheduler;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::AppModel;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>) -> Self {
        Self { model }
    }

    pub(crate) fn format_error(error: &anyhow::Error) -> String {
        let error_str = error.to_string();

        if error_str.contains("Unsupported file type") || error_str.contains("No text could be extracted") {
            error_str
        } else if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
            match io_error.kind() {
                std::io::ErrorKind::NotFound => format!("File not found. {}", error_str),
                std::io::ErrorKind::PermissionDenied => format!("Permission denied. {}", error_str),
                std::io::ErrorKind::InvalidData => "File is not valid UTF-8 text.".to_string(),
                _ => format!("Error: {}", error_str),
            }
        } else {
            format!("Error: {}", error_str)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_format_error_passes_through_source_messages() {
        let err = anyhow::anyhow!("Unsupported file type. Use TXT or MD.");
        assert_eq!(AppController::format_error(&err), "Unsupported file type. Use TXT or MD.");
    }

    #[test]
    fn test_format_error_not_found() {
        let err = Err::<(), _>(std::io::Error::from(std::io::ErrorKind::NotFound))
            .context("Failed to read book.txt")
            .unwrap_err();
        assert!(AppController::format_error(&err).starts_with("File not found."));
    }

    #[test]
    fn test_format_error_generic() {
        let err = anyhow::anyhow!("something odd");
        assert_eq!(AppController::format_error(&err), "Error: something odd");
    }
}
