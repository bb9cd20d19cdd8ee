//! JSON export: structured serialization of the full transcript value.

use std::io::Write;

use crate::error::{ChatViewError, Result};
use crate::model::Transcript;

use super::Exporter;

/// JSON exporter for transcripts.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter {
    /// Pretty-print output.
    pretty: bool,
}

impl JsonExporter {
    /// Create a new JSON exporter (compact output).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable pretty printing.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Exporter for JsonExporter {
    fn export_transcript<W: Write>(&self, transcript: &Transcript, writer: &mut W) -> Result<()> {
        let result = if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, transcript)
        } else {
            serde_json::to_writer(&mut *writer, transcript)
        };
        result.map_err(|e| ChatViewError::SerializationError {
            context: "Failed to serialize transcript".to_string(),
            source: e,
        })?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Message;

    #[test]
    fn test_json_export_field_names() {
        let mut transcript = Transcript::new("WhatsApp Chat with Alice.txt");
        transcript
            .messages
            .push(Message::chat("1/2/2023", "10:00", "Alice", "hi"));

        let mut buf = Vec::new();
        JsonExporter::new().export_transcript(&transcript, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["name"], "Alice");
        assert_eq!(value["isGroup"], false);
        assert_eq!(value["messages"][0]["type"], "chat");
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let transcript = Transcript::new("t.txt");
        let mut buf = Vec::new();
        JsonExporter::new()
            .with_pretty(true)
            .export_transcript(&transcript, &mut buf)
            .unwrap();
        assert!(buf.iter().filter(|b| **b == b'\n').count() > 1);
    }
}
