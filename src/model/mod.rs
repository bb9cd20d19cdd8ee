//! Core data structures for parsed chat transcripts.
//!
//! - [`Message`]: one parsed entry (chat content or system event)
//! - [`Transcript`]: the full parse result plus derived metadata
//!
//! Both serialize with the field names the rendering layer expects
//! (`type`, `isGroup`, `groupName`, `createdAt`).

mod message;
mod transcript;

pub use message::{new_message_id, DeliveryStatus, Message, MessageKind};
pub use transcript::{display_name_from_filename, Transcript, EXPORT_FILENAME_PREFIX};
