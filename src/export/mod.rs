//! Export functionality for parsed transcripts.
//!
//! Two backends:
//! - **Text**: re-emits the recognized export grammar, so an exported
//!   transcript can be re-parsed into an equivalent message sequence
//!   (identifiers regenerate).
//! - **JSON**: structured serialization of the full [`Transcript`] value.
//!
//! All exporters write to any [`std::io::Write`]; file output goes through
//! an atomic write.

mod json;
mod text;

pub use json::JsonExporter;
pub use text::TextExporter;

use std::io::Write;
use std::path::Path;

use crate::error::{ChatViewError, Result};
use crate::model::Transcript;
use crate::util::atomic_write;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// The original export grammar (round-trippable).
    #[default]
    Text,
    /// Compact JSON.
    Json,
    /// Pretty-printed JSON.
    JsonPretty,
}

impl ExportFormat {
    /// Conventional file extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json | Self::JsonPretty => "json",
        }
    }
}

/// A transcript export backend.
pub trait Exporter {
    /// Write the transcript to the given writer.
    fn export_transcript<W: Write>(&self, transcript: &Transcript, writer: &mut W) -> Result<()>;
}

/// Export a transcript to an in-memory string.
pub fn export_to_string(transcript: &Transcript, format: ExportFormat) -> Result<String> {
    let mut buf = Vec::new();
    export_to_writer(transcript, format, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ChatViewError::export(format!("Invalid UTF-8 output: {e}")))
}

/// Export a transcript to a writer in the given format.
pub fn export_to_writer<W: Write>(
    transcript: &Transcript,
    format: ExportFormat,
    writer: &mut W,
) -> Result<()> {
    match format {
        ExportFormat::Text => TextExporter::new().export_transcript(transcript, writer),
        ExportFormat::Json => JsonExporter::new().export_transcript(transcript, writer),
        ExportFormat::JsonPretty => {
            JsonExporter::new().with_pretty(true).export_transcript(transcript, writer)
        }
    }
}

/// Export a transcript to a file, atomically.
pub fn export_to_file(
    transcript: &Transcript,
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> Result<()> {
    let content = export_to_string(transcript, format)?;
    atomic_write(path, content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_extensions() {
        assert_eq!(ExportFormat::Text.extension(), "txt");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::JsonPretty.extension(), "json");
    }

    #[test]
    fn test_export_to_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let transcript = Transcript::new("sample.txt");

        export_to_file(&transcript, ExportFormat::Json, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"messages\""));
    }
}
