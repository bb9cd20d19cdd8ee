//! List command implementation.

use crate::cli::{Cli, ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::store::TranscriptStore;
use crate::util::truncate_preview;

use super::open_store;

/// Run the list command.
pub fn run(cli: &Cli, config: &Config, args: &ListArgs) -> Result<()> {
    let store = open_store(cli, config)?;
    let mut summaries = store.list()?;

    if args.groups {
        summaries.retain(|s| s.is_group);
    }
    if let Some(limit) = args.limit {
        summaries.truncate(limit);
    }

    match cli.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        OutputFormat::Text => {
            if summaries.is_empty() {
                if !cli.quiet {
                    println!("No stored transcripts. Use 'chatview import <file>' to add one.");
                }
                return Ok(());
            }
            for summary in &summaries {
                let kind = if summary.is_group { "group" } else { "chat" };
                println!(
                    "{}  {:<5} {:>5} msgs  {:>3} people  {}",
                    &summary.id[..8.min(summary.id.len())],
                    kind,
                    summary.message_count,
                    summary.participant_count,
                    truncate_preview(&summary.name, config.display.preview_length),
                );
            }
        }
    }

    Ok(())
}
