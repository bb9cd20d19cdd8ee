//! The atomic parsed unit of a chat export.
//!
//! A [`Message`] is either authored chat content (`sender` present) or a
//! system/meta event (encryption notice, membership change, subject change)
//! rendered without a sender. Both carry the normalized date and time taken
//! from the entry header they were parsed from.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a message is authored chat content or a system event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Authored content attributed to a participant.
    Chat,
    /// Non-authored notification (membership change, encryption notice, ...).
    System,
}

/// Delivery-state annotation for chat messages attributed to the viewing user.
///
/// This is viewer metadata, never parsed from the export text; it exists so
/// the rendering layer has somewhere typed to hang a tick state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// Single tick.
    Sent,
    /// Double tick.
    Delivered,
    /// Blue double tick.
    Read,
}

/// One parsed transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Process-unique identifier, assigned at parse time. Stable within a
    /// parse; regenerated on re-parse.
    pub id: String,

    /// Date in `D/M/YYYY`-shaped textual form (2-digit years expanded under a
    /// "20xx" assumption).
    pub date: String,

    /// Time as `H:MM` or `H:MM AM/PM`, seconds stripped.
    pub time: String,

    /// Owning participant, absent for system entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    /// Message text; continuation lines are joined with embedded newlines.
    pub content: String,

    /// Chat or system classification.
    #[serde(rename = "type")]
    pub kind: MessageKind,

    /// Optional delivery-state tag (see [`DeliveryStatus`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeliveryStatus>,
}

impl Message {
    /// Create a chat message with a fresh identifier.
    #[must_use]
    pub fn chat(
        date: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: new_message_id(),
            date: date.into(),
            time: time.into(),
            sender: Some(sender.into()),
            content: content.into(),
            kind: MessageKind::Chat,
            status: None,
        }
    }

    /// Create a system message with a fresh identifier.
    #[must_use]
    pub fn system(
        date: impl Into<String>,
        time: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: new_message_id(),
            date: date.into(),
            time: time.into(),
            sender: None,
            content: content.into(),
            kind: MessageKind::System,
            status: None,
        }
    }

    /// Check if this is a system message.
    #[must_use]
    pub fn is_system(&self) -> bool {
        self.kind == MessageKind::System
    }

    /// Check if this is an authored chat message.
    #[must_use]
    pub fn is_chat(&self) -> bool {
        self.kind == MessageKind::Chat
    }

    /// First line of the content, for list previews.
    #[must_use]
    pub fn preview_line(&self) -> &str {
        self.content.lines().next().unwrap_or("")
    }
}

/// Generate a fresh message identifier.
#[must_use]
pub fn new_message_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_fields() {
        let msg = Message::chat("1/2/2023", "10:00", "Alice", "hi");
        assert_eq!(msg.kind, MessageKind::Chat);
        assert_eq!(msg.sender.as_deref(), Some("Alice"));
        assert!(!msg.id.is_empty());
        assert!(msg.status.is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Message::system("1/1/2024", "9:00", "x");
        let b = Message::system("1/1/2024", "9:00", "x");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let msg = Message::chat("1/2/2023", "10:00", "Alice", "hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "chat");
        assert!(json.get("status").is_none());
    }

    #[test]
    fn test_preview_line_takes_first_line() {
        let mut msg = Message::chat("1/2/2023", "10:00", "Alice", "hi");
        msg.content = "first\nsecond".to_string();
        assert_eq!(msg.preview_line(), "first");
    }
}
