//! Remove command implementation.

use tracing::info;

use crate::cli::{Cli, OutputFormat, RemoveArgs};
use crate::config::Config;
use crate::error::{ChatViewError, Result};
use crate::store::TranscriptStore;

use super::open_store;

/// Run the remove command.
pub fn run(cli: &Cli, config: &Config, args: &RemoveArgs) -> Result<()> {
    let store = open_store(cli, config)?;

    // Resolve a prefix to the full id so removal is exact.
    let matches: Vec<String> = store
        .list()?
        .into_iter()
        .map(|s| s.id)
        .filter(|id| id.starts_with(&args.id))
        .collect();
    let id = match matches.as_slice() {
        [id] => id.clone(),
        [] => args.id.clone(),
        _ => {
            return Err(ChatViewError::InvalidArgument {
                name: "id".to_string(),
                reason: format!("prefix '{}' matches {} transcripts", args.id, matches.len()),
            })
        }
    };

    store.remove(&id)?;
    info!(id = %id, "Removed transcript");

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::json!({ "removed": id })),
        OutputFormat::Text => {
            if !cli.quiet {
                println!("Removed {id}");
            }
        }
    }

    Ok(())
}
