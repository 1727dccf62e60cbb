use crate::context::ExecutionContext;
use crate::presentation::formatters::format_command_table;
use crate::types::OutputFormat;
use anyhow::Result;
use folio_engine::{CommandAction, Preset};
use is_terminal::IsTerminal;
use serde::Serialize;

#[derive(Serialize)]
struct CommandEntry<'a> {
    name: &'a str,
    action: &'a CommandAction,
}

pub fn handle(ctx: &ExecutionContext, preset: Option<Preset>, format: OutputFormat) -> Result<()> {
    let table = ctx.command_table(preset)?;

    match format {
        OutputFormat::Json => {
            let entries: Vec<CommandEntry> = table
                .entries()
                .iter()
                .map(|(name, action)| CommandEntry { name, action })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Plain => {
            let enable_color = std::io::stdout().is_terminal();
            println!("{}", format_command_table(&table, enable_color));
        }
    }

    Ok(())
}
