//! Text export in the original header grammar.
//!
//! Each message is written as `date, time - sender: content` (system entries
//! without the `sender: ` segment); continuation lines are emitted bare so
//! the entry matcher folds them back on re-parse. Re-parsing an export
//! therefore yields an equivalent message sequence, modulo regenerated
//! identifiers.

use std::io::Write;

use crate::error::Result;
use crate::model::{Message, Transcript};

use super::Exporter;

/// Text exporter emitting the recognized export grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExporter;

impl TextExporter {
    /// Create a new text exporter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn write_message<W: Write>(&self, writer: &mut W, message: &Message) -> Result<()> {
        let mut lines = message.content.lines();
        let first = lines.next().unwrap_or("");

        match &message.sender {
            Some(sender) => writeln!(
                writer,
                "{}, {} - {}: {}",
                message.date, message.time, sender, first
            )?,
            None => writeln!(writer, "{}, {} - {}", message.date, message.time, first)?,
        }

        for continuation in lines {
            writeln!(writer, "{continuation}")?;
        }
        Ok(())
    }
}

impl Exporter for TextExporter {
    fn export_transcript<W: Write>(&self, transcript: &Transcript, writer: &mut W) -> Result<()> {
        for message in &transcript.messages {
            self.write_message(writer, message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Message;

    fn export(transcript: &Transcript) -> String {
        let mut buf = Vec::new();
        TextExporter::new()
            .export_transcript(transcript, &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_chat_message_line() {
        let mut transcript = Transcript::new("t.txt");
        transcript
            .messages
            .push(Message::chat("1/2/2023", "10:00", "Alice", "hi"));

        assert_eq!(export(&transcript), "1/2/2023, 10:00 - Alice: hi\n");
    }

    #[test]
    fn test_system_message_has_no_sender_segment() {
        let mut transcript = Transcript::new("t.txt");
        transcript
            .messages
            .push(Message::system("1/2/2023", "10:00", "Carol left"));

        assert_eq!(export(&transcript), "1/2/2023, 10:00 - Carol left\n");
    }

    #[test]
    fn test_multiline_content_emits_bare_continuations() {
        let mut transcript = Transcript::new("t.txt");
        let mut msg = Message::chat("1/2/2023", "10:00", "Alice", "");
        msg.content = "first\nsecond line".to_string();
        transcript.messages.push(msg);

        assert_eq!(
            export(&transcript),
            "1/2/2023, 10:00 - Alice: first\nsecond line\n"
        );
    }
}
