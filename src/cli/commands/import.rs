//! Import command implementation.
//!
//! Parses an export file and persists the resulting transcript.

use tracing::info;

use crate::cli::{Cli, ImportArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::parser::TranscriptParser;
use crate::store::TranscriptStore;

use super::open_store;

/// Run the import command.
pub fn run(cli: &Cli, config: &Config, args: &ImportArgs) -> Result<()> {
    let mut parser = TranscriptParser::new();
    if let Some(self_name) = &args.self_name {
        parser = parser.with_self_name(self_name);
    }

    let mut transcript = parser.parse_file(&args.file)?;
    if let Some(name) = &args.name {
        transcript.name = name.clone();
    }

    let store = open_store(cli, config)?;
    store.save(&transcript)?;
    info!(id = %transcript.id, name = %transcript.name, "Imported transcript");

    match cli.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&transcript)?);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                println!("Imported '{}' ({})", transcript.name, transcript.id);
                println!(
                    "  {} messages, {} participants{}",
                    transcript.messages.len(),
                    transcript.participants.len(),
                    if transcript.is_group { ", group chat" } else { "" }
                );
                let stats = parser.stats();
                if stats.filtered_entries > 0 {
                    println!("  {} attachment placeholders filtered", stats.filtered_entries);
                }
            }
        }
    }

    Ok(())
}
