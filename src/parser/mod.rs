//! Transcript parsing for WhatsApp chat exports.
//!
//! A single-pass, line-oriented recognizer that turns a loosely formatted
//! text export into a typed message stream:
//!
//! 1. each physical line is normalized (directional marks stripped, trimmed);
//! 2. the entry matcher decides whether it opens a new entry or continues
//!    the previous one;
//! 3. a newly opened entry's remainder is classified as chat or system
//!    content;
//! 4. the assembler folds the stream into ordered [`Message`] records,
//!    dropping attachment placeholders;
//! 5. a post-pass infers whether the conversation is a group.
//!
//! The parser is tolerant by construction: unattributable lines are dropped,
//! and an input with zero recognized entries yields a valid empty transcript.
//! It holds no shared state and may run concurrently on independent inputs.
//!
//! # Example
//!
//! ```rust
//! use chatview::parser::TranscriptParser;
//!
//! let text = "1/2/23, 10:00 - Alice: hi\n1/2/23, 10:01 - Bob: hello";
//! let mut parser = TranscriptParser::new();
//! let transcript = parser.parse_str(text, "WhatsApp Chat with Alice.txt");
//!
//! assert_eq!(transcript.messages.len(), 2);
//! assert_eq!(transcript.name, "Alice");
//! ```

mod classify;
mod header;
mod normalize;

pub use classify::{classify, Classified, SystemEventKind, SYSTEM_PHRASES};
pub use header::{match_header, normalize_date, normalize_time, EntryHeader};
pub use normalize::normalize_line;

use std::path::Path;

use tracing::{debug, instrument, trace};

use crate::error::{ChatViewError, Result};
use crate::model::{new_message_id, Message, MessageKind, Transcript};

/// Default placeholder name exports use for the exporting user.
pub const DEFAULT_SELF_NAME: &str = "you";

/// Statistics about one parse invocation.
#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    /// Physical lines processed.
    pub lines_processed: usize,
    /// Lines that were empty after normalization.
    pub empty_lines: usize,
    /// Lines that opened a new entry.
    pub entries_matched: usize,
    /// Lines folded into an open entry as continuations.
    pub continuation_lines: usize,
    /// Lines dropped because no entry was open to attribute them to.
    pub dropped_lines: usize,
    /// Finalized entries dropped by the placeholder content filter.
    pub filtered_entries: usize,
}

impl ParseStats {
    /// Fraction of non-empty lines attributed to some entry, as a percentage.
    #[must_use]
    pub fn attribution_rate(&self) -> f64 {
        let relevant = self.lines_processed - self.empty_lines;
        if relevant == 0 {
            return 100.0;
        }
        let attributed = self.entries_matched + self.continuation_lines;
        (attributed as f64 / relevant as f64) * 100.0
    }
}

/// One entry being accumulated: a recognized header plus any continuation
/// lines folded in so far.
#[derive(Debug)]
struct OpenEntry {
    date: String,
    time: String,
    kind: MessageKind,
    sender: Option<String>,
    content: String,
}

impl OpenEntry {
    fn finalize(self) -> Message {
        Message {
            id: new_message_id(),
            date: self.date,
            time: self.time,
            sender: self.sender,
            content: self.content,
            kind: self.kind,
            status: None,
        }
    }
}

/// Parser for WhatsApp chat exports.
#[derive(Debug)]
pub struct TranscriptParser {
    /// Placeholder name the export uses for the exporting user.
    self_name: String,
    /// Statistics from the most recent parse.
    stats: ParseStats,
}

impl TranscriptParser {
    /// Create a parser with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            self_name: DEFAULT_SELF_NAME.to_string(),
            stats: ParseStats::default(),
        }
    }

    /// Override the exporting-user placeholder name.
    ///
    /// A sender matching this name (ASCII case-insensitive) is resolved into
    /// [`Transcript::self_participant`] instead of the participant set.
    #[must_use]
    pub fn with_self_name(mut self, name: impl Into<String>) -> Self {
        self.self_name = name.into();
        self
    }

    /// Get statistics from the most recent parse.
    #[must_use]
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Parse an export file from disk.
    ///
    /// The filename serves as the display-name fallback. This is the only
    /// failing surface of the parser: missing files, permission problems,
    /// and non-UTF-8 content are reported; the parse itself cannot fail.
    #[instrument(skip(self), fields(path = %path.as_ref().display()))]
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<Transcript> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ChatViewError::FileNotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => ChatViewError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => ChatViewError::io(format!("Failed to read {}", path.display()), e),
        })?;

        let text = String::from_utf8(bytes).map_err(|_| ChatViewError::InvalidEncoding {
            path: path.to_path_buf(),
        })?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(self.parse_str(&text, &filename))
    }

    /// Parse a full export from a string.
    ///
    /// `filename` is only used to derive the transcript's display name when
    /// no group-creation event supplies one.
    pub fn parse_str(&mut self, text: &str, filename: &str) -> Transcript {
        self.stats = ParseStats::default();
        let mut transcript = Transcript::new(filename);
        let mut open: Option<OpenEntry> = None;

        for raw_line in text.lines() {
            self.stats.lines_processed += 1;

            let line = normalize_line(raw_line);
            if line.is_empty() {
                self.stats.empty_lines += 1;
                continue;
            }

            match match_header(&line) {
                Some(entry_header) => {
                    self.stats.entries_matched += 1;
                    if let Some(finished) = open.take() {
                        self.push_entry(&mut transcript, finished);
                    }
                    open = Some(self.open_entry(&mut transcript, entry_header));
                }
                None => {
                    if let Some(entry) = open.as_mut() {
                        self.stats.continuation_lines += 1;
                        entry.content.push('\n');
                        entry.content.push_str(&line);
                    } else {
                        // Stray boilerplate before the first header.
                        self.stats.dropped_lines += 1;
                        trace!(line = %line, "Dropping unattributable line");
                    }
                }
            }
        }

        if let Some(finished) = open.take() {
            self.push_entry(&mut transcript, finished);
        }

        transcript.is_group = infer_is_group(transcript.participants.len(), transcript.is_group);

        debug!(
            messages = transcript.messages.len(),
            participants = transcript.participants.len(),
            is_group = transcript.is_group,
            lines = self.stats.lines_processed,
            filtered = self.stats.filtered_entries,
            "Parse complete"
        );

        transcript
    }

    /// Classify a newly matched header and start accumulating its entry.
    ///
    /// Sender registration and group-name capture happen here, at entry-open
    /// time, independent of whether the content filter later drops the entry.
    fn open_entry(&mut self, transcript: &mut Transcript, header: EntryHeader) -> OpenEntry {
        let classified = classify(&header.remainder);

        if let Some(name) = &classified.group_name {
            transcript.set_group_name(name.clone());
        }

        if let Some(sender) = &classified.sender {
            if sender.eq_ignore_ascii_case(&self.self_name) {
                if transcript.self_participant.is_none() {
                    transcript.self_participant = Some(sender.clone());
                }
            } else {
                transcript.participants.insert(sender.clone());
            }
        }

        OpenEntry {
            date: header.date,
            time: header.time,
            kind: classified.kind,
            sender: classified.sender,
            content: classified.content,
        }
    }

    /// Finalize an entry, applying the placeholder content filter.
    fn push_entry(&mut self, transcript: &mut Transcript, entry: OpenEntry) {
        if is_placeholder_content(&entry.content) {
            self.stats.filtered_entries += 1;
            trace!(content = %entry.content, "Filtering placeholder entry");
            return;
        }
        transcript.messages.push(entry.finalize());
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Group inference: a conversation is a group when more than two distinct
/// participants appear or an explicit group-creation event was observed.
#[must_use]
pub fn infer_is_group(participant_count: usize, group_event_seen: bool) -> bool {
    participant_count > 2 || group_event_seen
}

/// Check whether finalized content is an unrenderable export placeholder.
///
/// Matches content that equals `media omitted` or `null` after trimming and
/// lowercasing, or that contains `<media omitted>` anywhere.
#[must_use]
pub fn is_placeholder_content(content: &str) -> bool {
    let c = content.trim().to_lowercase();
    c == "media omitted" || c == "null" || c.contains("<media omitted>")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(text: &str) -> Transcript {
        TranscriptParser::new().parse_str(text, "test.txt")
    }

    #[test]
    fn test_parse_empty_input() {
        let transcript = parse("");
        assert!(transcript.messages.is_empty());
        assert!(transcript.participants.is_empty());
        assert!(!transcript.is_group);
    }

    #[test]
    fn test_parse_basic_conversation() {
        let transcript = parse("1/2/23, 10:00 - Alice: hi\n1/2/23, 10:01 - Bob: hello");
        assert_eq!(transcript.messages.len(), 2);
        assert_eq!(transcript.messages[0].date, "1/2/2023");
        assert_eq!(transcript.messages[0].sender.as_deref(), Some("Alice"));
        assert_eq!(
            transcript.participants.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["Alice", "Bob"]
        );
        assert!(!transcript.is_group);
    }

    #[test]
    fn test_continuation_lines_folded() {
        let transcript = parse("1/2/23, 10:00 - Alice: first\nsecond\nthird");
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.messages[0].content, "first\nsecond\nthird");
    }

    #[test]
    fn test_stray_lines_before_first_header_dropped() {
        let mut parser = TranscriptParser::new();
        let transcript = parser.parse_str("loose boilerplate\n1/2/23, 10:00 - Alice: hi", "t.txt");
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(parser.stats().dropped_lines, 1);
    }

    #[test]
    fn test_media_omitted_filtered() {
        let transcript = parse("1/2/23, 10:00 - Alice: <Media omitted>\n1/2/23, 10:01 - Bob: hi");
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.messages[0].sender.as_deref(), Some("Bob"));
        // The sender still registers even though the entry was dropped.
        assert!(transcript.participants.contains("Alice"));
    }

    #[test]
    fn test_null_content_filtered() {
        let transcript = parse("1/2/23, 10:00 - Alice: null");
        assert!(transcript.messages.is_empty());
    }

    #[test]
    fn test_media_omitted_inside_longer_text_survives() {
        let transcript = parse("1/2/23, 10:00 - Alice: the media omitted thing was odd");
        assert_eq!(transcript.messages.len(), 1);
    }

    #[test]
    fn test_group_threshold() {
        let transcript = parse(
            "1/2/23, 10:00 - Alice: a\n1/2/23, 10:01 - Bob: b\n1/2/23, 10:02 - Carol: c",
        );
        assert!(transcript.is_group);
    }

    #[test]
    fn test_group_created_event() {
        let transcript = parse(
            "1/2/23, 9:59 - Dana created group \"Weekend Trip\"\n1/2/23, 10:00 - Alice: hi",
        );
        assert!(transcript.is_group);
        assert_eq!(transcript.group_name.as_deref(), Some("Weekend Trip"));
        assert_eq!(transcript.name, "Weekend Trip");
    }

    #[test]
    fn test_self_participant_resolved() {
        let transcript = parse("1/2/23, 10:00 - You: mine\n1/2/23, 10:01 - Alice: hers");
        assert_eq!(transcript.self_participant.as_deref(), Some("You"));
        assert_eq!(
            transcript.participants.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["Alice"]
        );
    }

    #[test]
    fn test_custom_self_name() {
        let mut parser = TranscriptParser::new().with_self_name("Dana");
        let transcript =
            parser.parse_str("1/2/23, 10:00 - Dana: mine\n1/2/23, 10:01 - Alice: hers", "t.txt");
        assert_eq!(transcript.self_participant.as_deref(), Some("Dana"));
        assert!(!transcript.participants.contains("Dana"));
    }

    #[test]
    fn test_stats_accounting() {
        let mut parser = TranscriptParser::new();
        parser.parse_str(
            "stray\n\n1/2/23, 10:00 - Alice: hi\ncontinued\n1/2/23, 10:01 - Bob: <Media omitted>",
            "t.txt",
        );
        let stats = parser.stats();
        assert_eq!(stats.lines_processed, 5);
        assert_eq!(stats.empty_lines, 1);
        assert_eq!(stats.entries_matched, 2);
        assert_eq!(stats.continuation_lines, 1);
        assert_eq!(stats.dropped_lines, 1);
        assert_eq!(stats.filtered_entries, 1);
    }

    #[test]
    fn test_infer_is_group() {
        assert!(!infer_is_group(2, false));
        assert!(infer_is_group(3, false));
        assert!(infer_is_group(0, true));
    }

    #[test]
    fn test_ids_unique_within_parse() {
        let transcript = parse("1/2/23, 10:00 - Alice: a\n1/2/23, 10:01 - Bob: b");
        let mut ids: Vec<&str> = transcript.messages.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), transcript.messages.len());
        assert!(ids.iter().all(|id| !id.is_empty()));
    }
}
