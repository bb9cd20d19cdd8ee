//! Export command implementation.

use std::io::Write;

use crate::cli::{Cli, ExportArgs, ExportFormatArg};
use crate::config::Config;
use crate::error::{ChatViewError, Result};
use crate::export::{export_to_file, export_to_writer, ExportFormat};

use super::{open_store, resolve_target};

/// Run the export command.
pub fn run(cli: &Cli, config: &Config, args: &ExportArgs) -> Result<()> {
    let store = open_store(cli, config)?;
    let (transcript, _) = resolve_target(&args.target, &store)?;

    let format = match args.format {
        Some(arg) => arg.into(),
        None => format_from_config(&config.export.format)?,
    };

    match &args.output_file {
        Some(path) => {
            if path.exists() && !args.overwrite {
                return Err(ChatViewError::export(format!(
                    "Output file {} exists (use --overwrite)",
                    path.display()
                )));
            }
            export_to_file(&transcript, format, path)?;
            if !cli.quiet {
                eprintln!("Exported '{}' to {}", transcript.name, path.display());
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            export_to_writer(&transcript, format, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}

/// Map a configured format name to an [`ExportFormat`].
fn format_from_config(name: &str) -> Result<ExportFormat> {
    match name {
        "text" => Ok(ExportFormat::Text),
        "json" => Ok(ExportFormat::Json),
        "json-pretty" => Ok(ExportFormat::JsonPretty),
        other => Err(ChatViewError::InvalidConfig {
            message: format!("Unknown export format '{other}' (expected text, json, json-pretty)"),
        }),
    }
}
