use super::args::{Cli, Commands, TerminalCommand};
use super::context::ExecutionContext;
use super::handlers;
use super::logging;
use anyhow::Result;
use folio_runtime::resolve_workspace_path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.config);

    let command = cli.command.unwrap_or(Commands::View {
        page: crate::types::PageArg::Home,
        offline: false,
    });

    if matches!(command, Commands::View { .. }) {
        // The TUI owns the screen.
        logging::init_file(&ctx.log_path(), cli.log_level);
    } else {
        logging::init_stderr(cli.log_level);
    }

    match command {
        Commands::View { page, offline } => handlers::view::handle(&ctx, page.into(), offline),

        Commands::Terminal { command } => match command {
            TerminalCommand::Exec { commands, preset } => handlers::terminal_exec::handle(
                &ctx,
                &commands,
                preset.map(Into::into),
                cli.format,
            ),
            TerminalCommand::Commands { preset } => {
                handlers::terminal_commands::handle(&ctx, preset.map(Into::into), cli.format)
            }
        },

        Commands::Show { target, all } => handlers::show::handle(&ctx, target, all, cli.format),

        Commands::Init { force } => handlers::init::handle(&ctx, force),
    }
}
