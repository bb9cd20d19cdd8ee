//! Error types for chatview.
//!
//! The parser itself is tolerant by construction and never fails: lines it
//! cannot attribute are dropped and a transcript with zero recognized entries
//! is a valid (degenerate) result. The errors here live at the collaborator
//! boundaries instead: reading input files, decoding them as UTF-8, writing
//! exports, and the transcript store.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for chatview operations.
#[derive(Error, Debug)]
pub enum ChatViewError {
    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Permission denied when accessing a file or directory.
    #[error("Permission denied: {path}")]
    PermissionDenied {
        /// Path where access was denied.
        path: PathBuf,
    },

    /// Input could not be decoded as UTF-8 text.
    #[error("Failed to parse {path}: not valid UTF-8 text")]
    InvalidEncoding {
        /// Path to the undecodable file.
        path: PathBuf,
    },

    /// Transcript not found in the store.
    #[error("Transcript not found: {id}")]
    TranscriptNotFound {
        /// Transcript ID that was not found.
        id: String,
    },

    /// Export error.
    #[error("Export failed: {message}")]
    ExportError {
        /// Human-readable error message.
        message: String,
        /// Underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Store error.
    #[error("Store operation failed: {message}")]
    StoreError {
        /// Human-readable error message.
        message: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Human-readable error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {context}")]
    IoError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {context}")]
    SerializationError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },

    /// Unsupported operation or feature.
    #[error("Unsupported: {feature}")]
    Unsupported {
        /// Name of the unsupported feature.
        feature: String,
    },

    /// Invalid argument.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Name of the invalid argument.
        name: String,
        /// Reason why the argument is invalid.
        reason: String,
    },
}

impl ChatViewError {
    /// Create a new I/O error with context.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            context: context.into(),
            source,
        }
    }

    /// Create a new export error.
    #[must_use]
    pub fn export(message: impl Into<String>) -> Self {
        Self::ExportError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new store error.
    #[must_use]
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreError {
            message: message.into(),
        }
    }

    /// Create a new unsupported error.
    #[must_use]
    pub fn unsupported(feature: impl Into<String>) -> Self {
        Self::Unsupported {
            feature: feature.into(),
        }
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidEncoding { .. } => 2,
            Self::FileNotFound { .. } | Self::TranscriptNotFound { .. } => 3,
            Self::PermissionDenied { .. } => 4,
            Self::InvalidConfig { .. } => 5,
            Self::ExportError { .. } => 6,
            Self::StoreError { .. } => 7,
            Self::IoError { .. } => 74,
            _ => 1,
        }
    }
}

/// Result type alias for chatview operations.
pub type Result<T> = std::result::Result<T, ChatViewError>;

impl From<std::io::Error> for ChatViewError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            context: "I/O operation failed".to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ChatViewError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            context: "JSON operation failed".to_string(),
            source: err,
        }
    }
}

/// Exit codes for CLI operations.
pub mod exit_codes {
    /// Operation completed successfully.
    pub const EXIT_SUCCESS: i32 = 0;
    /// General/unspecified error.
    pub const EXIT_GENERAL_ERROR: i32 = 1;
    /// Input could not be decoded as text.
    pub const EXIT_ENCODING_ERROR: i32 = 2;
    /// Specified file or transcript not found.
    pub const EXIT_NOT_FOUND: i32 = 3;
    /// Insufficient permissions.
    pub const EXIT_PERMISSION_DENIED: i32 = 4;
    /// Invalid configuration.
    pub const EXIT_CONFIG_ERROR: i32 = 5;
    /// Export operation failed.
    pub const EXIT_EXPORT_ERROR: i32 = 6;
    /// Store operation failed.
    pub const EXIT_STORE_ERROR: i32 = 7;
    /// I/O error (BSD standard).
    pub const EXIT_IO_ERROR: i32 = 74;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let encoding = ChatViewError::InvalidEncoding {
            path: PathBuf::from("/test.txt"),
        };
        assert_eq!(encoding.exit_code(), 2);

        let not_found = ChatViewError::FileNotFound {
            path: PathBuf::from("/test.txt"),
        };
        assert_eq!(not_found.exit_code(), 3);

        let store = ChatViewError::store("disk full");
        assert_eq!(store.exit_code(), 7);
    }

    #[test]
    fn test_error_display() {
        let err = ChatViewError::TranscriptNotFound {
            id: "abc123".to_string(),
        };
        assert_eq!(err.to_string(), "Transcript not found: abc123");
    }
}
