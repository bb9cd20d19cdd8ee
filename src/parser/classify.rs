//! Content classification: deciding whether an entry's raw remainder is a
//! system event or an authored chat message.
//!
//! Export formats phrase system notices in free text, so classification is a
//! substring heuristic over a central, ordered rule table. New phrasings get
//! added to [`SYSTEM_PHRASES`] without touching control flow.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::MessageKind;

/// Maximum byte offset at which a colon still starts a sender candidate.
const SENDER_COLON_WINDOW: usize = 50;

/// Maximum length of a valid sender name.
const MAX_SENDER_LEN: usize = 50;

/// System-event categories recognized in export text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEventKind {
    /// End-to-end encryption notice.
    Encryption,
    /// Group creation.
    GroupCreated,
    /// A member was added.
    MemberAdded,
    /// A member left.
    MemberLeft,
    /// A member was removed.
    MemberRemoved,
    /// Subject or group description/icon change.
    SubjectChanged,
    /// Group attribute change (icon, description, ...).
    GroupChanged,
    /// A member joined via invite link.
    MemberJoined,
    /// Security code change notice.
    SecurityCodeChanged,
    /// Disappearing-messages notice.
    DisappearingMessages,
    /// Admin promotion notice.
    AdminPromotion,
    /// Group settings change.
    SettingsChanged,
}

/// Ordered (phrase, outcome) rules for system-event detection.
///
/// Matched as lowercase substrings against the lowercased remainder; the
/// first hit wins. Phrases are heuristic, not exact: a chat message quoting
/// one of them verbatim will be misclassified, which matches the source
/// export format's own ambiguity.
pub const SYSTEM_PHRASES: &[(&str, SystemEventKind)] = &[
    (
        "messages and calls are end-to-end encrypted",
        SystemEventKind::Encryption,
    ),
    ("created group", SystemEventKind::GroupCreated),
    ("added you", SystemEventKind::MemberAdded),
    (" left", SystemEventKind::MemberLeft),
    ("removed", SystemEventKind::MemberRemoved),
    ("changed the subject", SystemEventKind::SubjectChanged),
    ("changed this group", SystemEventKind::GroupChanged),
    ("changed the group", SystemEventKind::GroupChanged),
    ("joined using this group", SystemEventKind::MemberJoined),
    ("security code changed", SystemEventKind::SecurityCodeChanged),
    ("disappeared", SystemEventKind::DisappearingMessages),
    ("you're now an admin", SystemEventKind::AdminPromotion),
    ("settings changed", SystemEventKind::SettingsChanged),
];

/// Capture for `created group "X"` (ASCII double/single or curly quotes).
static GROUP_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)created group ["'\u{201c}\u{201d}]([^"'\u{201c}\u{201d}]+)["'\u{201c}\u{201d}]"#)
        .expect("group name regex is valid")
});

/// Result of classifying an entry's raw remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    /// Chat or system.
    pub kind: MessageKind,
    /// Extracted sender name (chat entries only).
    pub sender: Option<String>,
    /// Message content (post-colon for chat entries, whole remainder for
    /// system entries).
    pub content: String,
    /// Matched system-event category, if any phrase rule fired.
    pub system_event: Option<SystemEventKind>,
    /// Group name captured from a group-creation event.
    pub group_name: Option<String>,
}

/// Classify the raw remainder of a newly opened entry.
pub fn classify(remainder: &str) -> Classified {
    let lower = remainder.to_lowercase();

    if let Some((_, event)) = SYSTEM_PHRASES
        .iter()
        .find(|(phrase, _)| lower.contains(phrase))
    {
        let group_name = GROUP_NAME_RE
            .captures(remainder)
            .map(|caps| caps[1].to_string());
        return Classified {
            kind: MessageKind::System,
            sender: None,
            content: remainder.to_string(),
            system_event: Some(*event),
            group_name,
        };
    }

    if let Some((sender, content)) = split_sender(remainder) {
        return Classified {
            kind: MessageKind::Chat,
            sender: Some(sender),
            content,
            system_event: None,
            group_name: None,
        };
    }

    Classified {
        kind: MessageKind::System,
        sender: None,
        content: remainder.to_string(),
        system_event: None,
        group_name: None,
    }
}

/// Try to split `sender: content` out of a remainder.
///
/// Best-effort heuristic: the first colon within [`SENDER_COLON_WINDOW`]
/// bytes opens a candidate, which must be shorter than [`MAX_SENDER_LEN`]
/// and contain neither `Messages to this chat` nor `http`. The guards apply
/// to the candidate segment only, so a URL in the *content* does not force
/// system classification.
fn split_sender(remainder: &str) -> Option<(String, String)> {
    let colon = remainder.find(':')?;
    if colon >= SENDER_COLON_WINDOW {
        return None;
    }

    let candidate = remainder[..colon].trim();
    if candidate.len() >= MAX_SENDER_LEN
        || candidate.contains("Messages to this chat")
        || candidate.contains("http")
    {
        return None;
    }

    let content = remainder[colon + 1..].trim().to_string();
    Some((candidate.to_string(), content))
}
