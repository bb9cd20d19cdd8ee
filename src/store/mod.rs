//! Transcript persistence.
//!
//! The viewer keeps imported transcripts around between runs. Persistence is
//! an injected port ([`TranscriptStore`]) rather than ambient global state:
//! callers hand a store to the commands that need one, and tests substitute
//! a store rooted in a temp directory.
//!
//! [`JsonFileStore`] is the default implementation: one JSON document per
//! transcript under the platform data directory, written atomically.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChatViewError, Result};
use crate::model::Transcript;
use crate::util::atomic_write;

/// Lightweight listing entry for a stored transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSummary {
    /// Transcript identifier (also the filename stem).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Group conversation flag.
    pub is_group: bool,
    /// Number of messages.
    pub message_count: usize,
    /// Number of distinct participants.
    pub participant_count: usize,
    /// When the transcript value was constructed.
    pub created_at: DateTime<Utc>,
}

impl StoredSummary {
    fn from_transcript(transcript: &Transcript) -> Self {
        Self {
            id: transcript.id.clone(),
            name: transcript.name.clone(),
            is_group: transcript.is_group,
            message_count: transcript.messages.len(),
            participant_count: transcript.participants.len(),
            created_at: transcript.created_at,
        }
    }
}

/// Storage port for transcript collections.
pub trait TranscriptStore {
    /// Persist a transcript, replacing any existing one with the same id.
    fn save(&self, transcript: &Transcript) -> Result<()>;

    /// Load a transcript by id.
    fn load(&self, id: &str) -> Result<Transcript>;

    /// List summaries of all stored transcripts, newest first.
    fn list(&self) -> Result<Vec<StoredSummary>>;

    /// Remove a transcript by id.
    fn remove(&self, id: &str) -> Result<()>;
}

/// File-backed store: one JSON document per transcript.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store at the default platform data directory.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(default_store_dir()?))
    }

    /// Root directory of this store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

impl TranscriptStore for JsonFileStore {
    fn save(&self, transcript: &Transcript) -> Result<()> {
        let json = serde_json::to_vec_pretty(transcript).map_err(|e| {
            ChatViewError::SerializationError {
                context: format!("Failed to serialize transcript {}", transcript.id),
                source: e,
            }
        })?;
        let path = self.path_for(&transcript.id);
        atomic_write(&path, &json)?;
        debug!(id = %transcript.id, path = %path.display(), "Saved transcript");
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Transcript> {
        let path = self.path_for(id);
        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ChatViewError::TranscriptNotFound { id: id.to_string() }
            } else {
                ChatViewError::io(format!("Failed to read {}", path.display()), e)
            }
        })?;
        serde_json::from_str(&content).map_err(|e| ChatViewError::SerializationError {
            context: format!("Failed to deserialize transcript {id}"),
            source: e,
        })
    }

    fn list(&self) -> Result<Vec<StoredSummary>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            ChatViewError::io(format!("Failed to read store directory {}", self.dir.display()), e)
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ChatViewError::io("Failed to read store entry", e))?;
            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            match fs::read_to_string(&path)
                .ok()
                .and_then(|content| serde_json::from_str::<Transcript>(&content).ok())
            {
                Some(transcript) => summaries.push(StoredSummary::from_transcript(&transcript)),
                None => {
                    // Unreadable documents are skipped, not fatal.
                    debug!(path = %path.display(), "Skipping unreadable store document");
                }
            }
        }

        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    fn remove(&self, id: &str) -> Result<()> {
        let path = self.path_for(id);
        fs::remove_file(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ChatViewError::TranscriptNotFound { id: id.to_string() }
            } else {
                ChatViewError::io(format!("Failed to remove {}", path.display()), e)
            }
        })
    }
}

/// Default store directory: `<data_dir>/chatview/transcripts`.
pub fn default_store_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| ChatViewError::Unsupported {
        feature: "data directory discovery".to_string(),
    })?;
    Ok(data_dir.join("chatview").join("transcripts"))
}
