//! Document acquisition from the filesystem
//!
//! Only plain text is read here. Anything that fails stays on this side of
//! the boundary; the reader only ever sees a string that is worth loading.

use anyhow::{bail, Context, Result};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    PlainText,
    Pdf,
    Docx,
    Unknown,
}

pub fn detect_source_kind(path: &Path) -> SourceKind {
    let Some(ext) = path.extension() else {
        return SourceKind::PlainText;
    };
    match ext.to_string_lossy().to_lowercase().as_str() {
        "txt" | "text" | "md" | "markdown" => SourceKind::PlainText,
        "pdf" => SourceKind::Pdf,
        "docx" => SourceKind::Docx,
        _ => SourceKind::Unknown,
    }
}

/// Read a text file for the reader.
pub fn load_text_file(path: &Path) -> Result<String> {
    match detect_source_kind(path) {
        SourceKind::PlainText => {}
        SourceKind::Pdf | SourceKind::Docx => {
            bail!("Unsupported file type: PDF and DOCX extraction is not available. Use TXT or MD.")
        }
        SourceKind::Unknown => bail!("Unsupported file type. Use TXT or MD."),
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if text.trim().is_empty() {
        bail!("No text could be extracted from {}", path.display());
    }

    tracing::debug!(path = %path.display(), bytes = text.len(), "Text file read");
    Ok(text)
}

/// Short name for the status bar.
pub fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_detect_source_kind() {
        assert_eq!(detect_source_kind(Path::new("notes.txt")), SourceKind::PlainText);
        assert_eq!(detect_source_kind(Path::new("README.MD")), SourceKind::PlainText);
        assert_eq!(detect_source_kind(Path::new("no_extension")), SourceKind::PlainText);
        assert_eq!(detect_source_kind(Path::new("paper.pdf")), SourceKind::Pdf);
        assert_eq!(detect_source_kind(Path::new("essay.DOCX")), SourceKind::Docx);
        assert_eq!(detect_source_kind(Path::new("image.png")), SourceKind::Unknown);
    }

    #[test]
    fn test_load_text_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.txt");
        std::fs::write(&path, "Call me Ishmael.").unwrap();

        assert_eq!(load_text_file(&path).unwrap(), "Call me Ishmael.");
    }

    #[test]
    fn test_rejects_blank_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.md");
        std::fs::write(&path, " \n\t ").unwrap();

        let err = load_text_file(&path).unwrap_err();
        assert!(err.to_string().contains("No text could be extracted"));
    }

    #[test]
    fn test_rejects_unsupported_formats() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("paper.pdf");
        std::fs::write(&path, "%PDF-1.7").unwrap();

        let err = load_text_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported file type"));
        assert!(load_text_file(Path::new("photo.jpeg")).is_err());
    }

    #[test]
    fn test_missing_file_has_context() {
        let dir = TempDir::new().unwrap();
        let err = load_text_file(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[test]
    fn test_source_label() {
        assert_eq!(source_label(Path::new("/tmp/books/moby.txt")), "moby.txt");
    }
}
