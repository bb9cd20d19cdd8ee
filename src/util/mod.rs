//! Shared utilities: atomic file writes and display helpers.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ChatViewError, Result};

/// Write content to a file atomically.
///
/// The content goes to a temporary file in the target's directory first and
/// is then renamed into place, so readers never observe a partial write.
/// Parent directories are created as needed.
pub fn atomic_write(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let parent = path.parent().ok_or_else(|| ChatViewError::IoError {
        context: format!("Cannot determine parent directory for: {}", path.display()),
        source: io::Error::new(io::ErrorKind::InvalidInput, "No parent directory"),
    })?;

    if !parent.exists() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ChatViewError::io(format!("Failed to create directory: {}", parent.display()), e)
        })?;
    }

    // Same directory ensures same filesystem for the atomic rename.
    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| {
        ChatViewError::io(
            format!("Failed to create temporary file in: {}", parent.display()),
            e,
        )
    })?;

    temp_file.write_all(content).map_err(|e| {
        ChatViewError::io(
            format!("Failed to write temporary file for: {}", path.display()),
            e,
        )
    })?;

    temp_file.flush().map_err(|e| {
        ChatViewError::io(
            format!("Failed to flush temporary file for: {}", path.display()),
            e,
        )
    })?;

    temp_file.persist(path).map_err(|e| {
        ChatViewError::io(format!("Failed to persist file: {}", path.display()), e.error)
    })?;

    Ok(())
}

/// Truncate a string for preview display.
///
/// Character-boundary aware, so multi-byte UTF-8 content never panics.
#[must_use]
pub fn truncate_preview(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_write_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");

        atomic_write(&path, b"hello").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        atomic_write(&path, b"first").unwrap();
        atomic_write(&path, b"second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_truncate_preview_short_string() {
        assert_eq!(truncate_preview("short", 10), "short");
    }

    #[test]
    fn test_truncate_preview_multibyte_boundary() {
        let s = "héllo wörld";
        let truncated = truncate_preview(s, 2);
        assert!(truncated.ends_with("..."));
    }
}
