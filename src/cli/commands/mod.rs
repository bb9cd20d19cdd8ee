//! CLI command implementations.

pub mod export;
pub mod import;
pub mod info;
pub mod list;
pub mod remove;

use std::path::Path;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{ChatViewError, Result};
use crate::model::Transcript;
use crate::parser::{ParseStats, TranscriptParser};
use crate::store::{JsonFileStore, TranscriptStore};

/// Open the transcript store, honoring `--store-dir` then config.
pub(crate) fn open_store(cli: &Cli, config: &Config) -> Result<JsonFileStore> {
    if let Some(dir) = &cli.store_dir {
        return Ok(JsonFileStore::new(dir));
    }
    if let Some(dir) = &config.store.directory {
        return Ok(JsonFileStore::new(dir));
    }
    JsonFileStore::at_default_location()
}

/// Resolve a command target that may be an export file on disk or a stored
/// transcript id.
///
/// Files parse fresh (returning parse statistics); ids load from the store.
/// An id may be any unique prefix of a stored transcript's id.
pub(crate) fn resolve_target(
    target: &str,
    store: &JsonFileStore,
) -> Result<(Transcript, Option<ParseStats>)> {
    let path = Path::new(target);
    if path.is_file() {
        let mut parser = TranscriptParser::new();
        let transcript = parser.parse_file(path)?;
        return Ok((transcript, Some(parser.stats().clone())));
    }

    match store.load(target) {
        Ok(transcript) => Ok((transcript, None)),
        Err(ChatViewError::TranscriptNotFound { .. }) => {
            let transcript = load_by_prefix(target, store)?;
            Ok((transcript, None))
        }
        Err(e) => Err(e),
    }
}

/// Load a stored transcript by unique id prefix.
fn load_by_prefix(prefix: &str, store: &JsonFileStore) -> Result<Transcript> {
    let matches: Vec<String> = store
        .list()?
        .into_iter()
        .map(|s| s.id)
        .filter(|id| id.starts_with(prefix))
        .collect();

    match matches.as_slice() {
        [id] => store.load(id),
        [] => Err(ChatViewError::TranscriptNotFound {
            id: prefix.to_string(),
        }),
        _ => Err(ChatViewError::InvalidArgument {
            name: "target".to_string(),
            reason: format!("id prefix '{prefix}' matches {} transcripts", matches.len()),
        }),
    }
}
