use crate::export::ExportFormat;
use crate::models::Action;
use clap::{Parser, Subcommand};

/// Command-line interface definition for devicelog
#[derive(Parser, Debug)]
#[command(
    name = "devicelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record device check-out / check-in events and summarize them per owner",
    long_about = None
)]
pub struct Cli {
    /// Override the event CSV file (useful for tests or a second register)
    #[arg(global = true, long = "data", value_name = "PATH")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the configuration and the event file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Record a check-out or check-in
    Add {
        /// Owner id (student id or name)
        owner: String,

        /// out = check-out (반출), in = check-in (반입)
        #[arg(value_enum)]
        action: Action,
    },

    /// List recorded events, most recent first
    List {
        #[arg(long, help = "Show only the events of this owner")]
        owner: Option<String>,

        #[arg(long, short, help = "Show at most N events (overrides list_limit)")]
        limit: Option<usize>,
    },

    /// Cumulative check-out / check-in counts per owner
    Summary,

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal operation log")]
        print: bool,
    },

    /// Create a backup copy of the event file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export events or the per-owner summary
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 's', help = "Export per-owner counts instead of events")]
        summary: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
