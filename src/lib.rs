//! chatview: parser and viewing core for exported WhatsApp chat transcripts.
//!
//! This crate ingests a plain-text chat export, reconstructs structured
//! conversation data, and exposes it for inspection, export, and persistence.
//! The core is the transcript parser: a single-pass, line-oriented recognizer
//! that turns a loosely formatted export into a typed message stream (dates,
//! senders, content, system events, multi-line continuations).
//!
//! # Quick Start
//!
//! ```rust
//! use chatview::parser::TranscriptParser;
//!
//! let export = "\
//! 1/2/23, 10:00 - Messages and calls are end-to-end encrypted.
//! 1/2/23, 10:01 - Alice: hi!
//! 1/2/23, 10:02 - Bob: hello
//! still Bob, on a second line";
//!
//! let mut parser = TranscriptParser::new();
//! let transcript = parser.parse_str(export, "WhatsApp Chat with Alice.txt");
//!
//! assert_eq!(transcript.messages.len(), 3);
//! assert_eq!(transcript.name, "Alice");
//! assert!(!transcript.is_group);
//! ```
//!
//! # Architecture
//!
//! - [`model`]: `Message` and `Transcript` data structures
//! - [`parser`]: the transcript parser (normalizer, entry matcher, content
//!   classifier, assembler, group inference)
//! - [`export`]: text (round-trippable) and JSON output
//! - [`store`]: transcript persistence behind an injected port
//! - [`cli`]: command-line interface
//! - [`config`]: configuration management
//! - [`error`]: error types and exit codes
//!
//! The parser is synchronous and re-entrant: it holds no process-wide state
//! and may be invoked concurrently on independent inputs.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod store;
pub mod util;

// Re-export commonly used types at the crate root
pub use error::{ChatViewError, Result};
pub use model::{Message, MessageKind, Transcript};
pub use parser::TranscriptParser;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ChatViewError, Result};
    pub use crate::export::{ExportFormat, Exporter};
    pub use crate::model::{DeliveryStatus, Message, MessageKind, Transcript};
    pub use crate::parser::TranscriptParser;
    pub use crate::store::{JsonFileStore, TranscriptStore};
}
