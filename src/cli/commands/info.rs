//! Info command implementation.
//!
//! Displays transcript metadata and, when parsing a file directly, the
//! parse statistics.

use serde::Serialize;

use crate::cli::{Cli, InfoArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::model::Transcript;
use crate::parser::ParseStats;

use super::{open_store, resolve_target};

/// Run the info command.
pub fn run(cli: &Cli, config: &Config, args: &InfoArgs) -> Result<()> {
    let store = open_store(cli, config)?;
    let (transcript, stats) = resolve_target(&args.target, &store)?;

    match cli.output {
        OutputFormat::Json => {
            let output = InfoOutput::build(&transcript, stats.as_ref());
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => print_text(&transcript, stats.as_ref(), args),
    }

    Ok(())
}

fn print_text(transcript: &Transcript, stats: Option<&ParseStats>, args: &InfoArgs) {
    println!("Name:         {}", transcript.name);
    println!("Id:           {}", transcript.id);
    println!(
        "Kind:         {}",
        if transcript.is_group { "group" } else { "one-to-one" }
    );
    if let Some(group_name) = &transcript.group_name {
        println!("Group name:   {group_name}");
    }
    if let Some(self_participant) = &transcript.self_participant {
        println!("Self:         {self_participant}");
    }
    println!(
        "Messages:     {} ({} chat, {} system)",
        transcript.messages.len(),
        transcript.chat_message_count(),
        transcript.system_message_count(),
    );
    println!("Participants: {}", transcript.participants.len());

    if args.participants {
        for participant in &transcript.participants {
            let count = transcript
                .messages
                .iter()
                .filter(|m| m.sender.as_deref() == Some(participant))
                .count();
            println!("  {participant}: {count} messages");
        }
    }

    if let Some(stats) = stats {
        println!();
        println!("Parse statistics:");
        println!("  Lines processed:     {}", stats.lines_processed);
        println!("  Entries matched:     {}", stats.entries_matched);
        println!("  Continuation lines:  {}", stats.continuation_lines);
        println!("  Dropped lines:       {}", stats.dropped_lines);
        println!("  Placeholder entries: {}", stats.filtered_entries);
        println!("  Attribution rate:    {:.1}%", stats.attribution_rate());
    }
}

/// JSON output shape for the info command.
#[derive(Debug, Serialize)]
struct InfoOutput {
    id: String,
    name: String,
    is_group: bool,
    group_name: Option<String>,
    self_participant: Option<String>,
    participants: Vec<String>,
    message_count: usize,
    chat_messages: usize,
    system_messages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_stats: Option<ParseStatsOutput>,
}

#[derive(Debug, Serialize)]
struct ParseStatsOutput {
    lines_processed: usize,
    entries_matched: usize,
    continuation_lines: usize,
    dropped_lines: usize,
    filtered_entries: usize,
}

impl InfoOutput {
    fn build(transcript: &Transcript, stats: Option<&ParseStats>) -> Self {
        Self {
            id: transcript.id.clone(),
            name: transcript.name.clone(),
            is_group: transcript.is_group,
            group_name: transcript.group_name.clone(),
            self_participant: transcript.self_participant.clone(),
            participants: transcript.participants.iter().cloned().collect(),
            message_count: transcript.messages.len(),
            chat_messages: transcript.chat_message_count(),
            system_messages: transcript.system_message_count(),
            parse_stats: stats.map(|s| ParseStatsOutput {
                lines_processed: s.lines_processed,
                entries_matched: s.entries_matched,
                continuation_lines: s.continuation_lines,
                dropped_lines: s.dropped_lines,
                filtered_entries: s.filtered_entries,
            }),
        }
    }
}
