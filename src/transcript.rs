//! Transcript file loading.
//!
//! Reads a selected file fully into memory and decodes it as UTF-8 text.
//! The extension list is a hint only: other files are read anyway.

use crate::error::{NavigatorError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Extensions offered by the file picker.
pub const TRANSCRIPT_EXTENSIONS: &[&str] = &["txt", "srt"];

/// A transcript file decoded into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTranscript {
    pub file_name: String,
    pub text: String,
}

/// Check if path has one of the suggested transcript extensions.
pub fn has_transcript_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TRANSCRIPT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Expand a leading `~` in a user-entered path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

/// Read and decode a transcript file.
///
/// Any IO or decoding problem becomes [`NavigatorError::FileRead`] carrying
/// the cause.
#[instrument]
pub async fn read_transcript(path: &Path) -> Result<LoadedTranscript> {
    if !has_transcript_extension(path) {
        warn!("{} is not a .txt or .srt file, reading it anyway", path.display());
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| NavigatorError::FileRead(format!("{}: {}", path.display(), e)))?;

    let text = String::from_utf8(bytes)
        .map_err(|e| NavigatorError::FileRead(format!("{}: {}", path.display(), e)))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    debug!("Read {} bytes from {}", text.len(), file_name);

    Ok(LoadedTranscript { file_name, text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_extension_hint() {
        assert!(has_transcript_extension(Path::new("talk.txt")));
        assert!(has_transcript_extension(Path::new("talk.SRT")));
        assert!(!has_transcript_extension(Path::new("talk.pdf")));
        assert!(!has_transcript_extension(Path::new("talk")));
    }

    #[test]
    fn test_expand_path_only_touches_tilde() {
        assert_eq!(expand_path("talks/keynote.srt"), PathBuf::from("talks/keynote.srt"));
        assert_eq!(expand_path("$HOME/keynote.srt"), PathBuf::from("$HOME/keynote.srt"));
    }

    #[tokio::test]
    async fn test_read_text_file() {
        let mut file = NamedTempFile::with_suffix(".txt").unwrap();
        write!(file, "Hello world").unwrap();

        let loaded = read_transcript(file.path()).await.unwrap();
        assert_eq!(loaded.text, "Hello world");
        assert!(loaded.file_name.ends_with(".txt"));
    }

    #[tokio::test]
    async fn test_other_extensions_are_read() {
        let mut file = NamedTempFile::with_suffix(".md").unwrap();
        write!(file, "[00:00:01] notes").unwrap();

        let loaded = read_transcript(file.path()).await.unwrap();
        assert_eq!(loaded.text, "[00:00:01] notes");
    }

    #[tokio::test]
    async fn test_binary_file_fails() {
        let mut file = NamedTempFile::with_suffix(".txt").unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let err = read_transcript(file.path()).await.unwrap_err();
        assert!(matches!(err, NavigatorError::FileRead(_)));
    }

    #[tokio::test]
    async fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_transcript(&dir.path().join("absent.txt")).await.unwrap_err();
        assert!(matches!(err, NavigatorError::FileRead(_)));
    }
}
