use crate::types::{LogLevel, OutputFormat, PageArg, PresetArg, ShowTarget};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse the portfolio in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (default: $FOLIO_PATH or XDG data dir)")]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Config file (default: <data-dir>/config.toml)")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive portfolio (default)
    View {
        #[arg(long, default_value = "home")]
        page: PageArg,

        #[arg(long, help = "Skip the GitHub commit count lookup")]
        offline: bool,
    },

    /// Drive the terminal widget without the UI
    Terminal {
        #[command(subcommand)]
        command: TerminalCommand,
    },

    /// Print one section of the portfolio
    Show {
        target: ShowTarget,

        #[arg(long, help = "Include projects hidden from the home page")]
        all: bool,
    },

    /// Write the default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TerminalCommand {
    /// Replay commands through the terminal and print the transcript
    Exec {
        /// Lines to submit, in order. Options must come before them.
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        commands: Vec<String>,

        #[arg(long)]
        preset: Option<PresetArg>,
    },

    /// List the recognized commands and what they do
    Commands {
        #[arg(long)]
        preset: Option<PresetArg>,
    },
}
