use crate::context::ExecutionContext;
use crate::presentation::formatters::{format_effects, format_transcript};
use crate::types::OutputFormat;
use anyhow::Result;
use folio_engine::{Preset, Submission, Transcript, terminal};
use is_terminal::IsTerminal;
use serde::Serialize;

#[derive(Serialize)]
struct ExecReport<'a> {
    transcript: &'a Transcript,
    submissions: &'a [Submission],
}

pub fn handle(
    ctx: &ExecutionContext,
    commands: &[String],
    preset: Option<Preset>,
    format: OutputFormat,
) -> Result<()> {
    let table = ctx.command_table(preset)?;
    let (transcript, submissions) = terminal::replay(table, commands.iter().map(String::as_str));

    let unrecognized = submissions.iter().filter(|s| !s.is_recognized()).count();
    tracing::debug!(
        submitted = submissions.len(),
        unrecognized,
        "replayed terminal script"
    );

    match format {
        OutputFormat::Json => {
            let report = ExecReport {
                transcript: &transcript,
                submissions: &submissions,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Plain => {
            let enable_color = std::io::stdout().is_terminal();
            println!("{}", format_transcript(&transcript, enable_color));

            let effects = format_effects(&submissions);
            if !effects.is_empty() {
                println!();
                for line in effects {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}
