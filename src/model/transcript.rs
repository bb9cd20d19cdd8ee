//! The parse result: messages plus derived conversation metadata.

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::message::Message;

/// Boilerplate prefix WhatsApp puts on one-to-one export filenames.
pub const EXPORT_FILENAME_PREFIX: &str = "WhatsApp Chat with ";

/// A fully parsed conversation.
///
/// Constructed once per parse invocation; the editing/rendering layer may
/// later mutate `messages` and display metadata, but the parser's contract
/// ends at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Process-unique transcript identifier.
    pub id: String,

    /// Display name: the captured group name when present, otherwise derived
    /// from the source filename.
    pub name: String,

    /// True if more than two distinct participants appear or an explicit
    /// "created group" event was recognized.
    #[serde(rename = "isGroup")]
    pub is_group: bool,

    /// Group name captured from a `created group "X"` system event.
    #[serde(rename = "groupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    /// Distinct sender names in first-seen order, excluding the synthetic
    /// exporting-user placeholder.
    pub participants: IndexSet<String>,

    /// The exporting user's placeholder name, resolved once during assembly
    /// instead of being compared case-insensitively throughout.
    #[serde(rename = "selfParticipant", skip_serializing_if = "Option::is_none")]
    pub self_participant: Option<String>,

    /// Ordered message sequence, preserving transcript appearance order.
    pub messages: Vec<Message>,

    /// When this transcript value was constructed.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Transcript {
    /// Create an empty transcript named after the given source filename.
    #[must_use]
    pub fn new(filename: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: display_name_from_filename(filename),
            is_group: false,
            group_name: None,
            participants: IndexSet::new(),
            self_participant: None,
            messages: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Number of authored chat messages.
    #[must_use]
    pub fn chat_message_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_chat()).count()
    }

    /// Number of system messages.
    #[must_use]
    pub fn system_message_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_system()).count()
    }

    /// Record a group name captured from a group-creation event.
    ///
    /// Overrides the filename-derived display name and marks the transcript
    /// as a group.
    pub fn set_group_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.name = name.clone();
        self.group_name = Some(name);
        self.is_group = true;
    }
}

/// Derive a display name from an export filename.
///
/// Strips the `WhatsApp Chat with ` boilerplate prefix and the `.txt` suffix,
/// then replaces underscores with spaces.
#[must_use]
pub fn display_name_from_filename(filename: &str) -> String {
    let name = filename.strip_suffix(".txt").unwrap_or(filename);
    let name = name.strip_prefix(EXPORT_FILENAME_PREFIX).unwrap_or(name);
    name.replace('_', " ")
}
