use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hubdeck
/// CLI to aggregate hub attendance sheets and order reports with SQLite
#[derive(Parser)]
#[command(
    name = "hubdeck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Aggregate hub attendance and order sheets into daily summaries, projections and exports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check that configured paths exist")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Aggregate an attendance sheet into per-worker daily records
    Attendance {
        /// Input file (.csv, .xlsx or .xls)
        file: String,

        /// Show only rows matching this text (hub, worker or date)
        #[arg(long = "filter", short = 'f')]
        filter: Option<String>,

        /// Write the aggregated records to this file instead of printing
        #[arg(long = "export", short = 'e')]
        export: Option<String>,

        /// Export format
        #[arg(long = "format", value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Overwrite the output file without asking
        #[arg(long = "force")]
        force: bool,
    },

    /// Classify an order sheet and merge it with the day's projections
    Report {
        /// Input file (.csv, .xlsx or .xls)
        file: String,

        /// Projection date (YYYY-MM-DD), defaults to today
        #[arg(long = "date", short = 'd')]
        date: Option<String>,

        /// Hour of day to scale projections to (HH:MM or HH), defaults to now
        #[arg(long = "time", short = 't')]
        time: Option<String>,

        /// List the individual deep-pain orders after the summary
        #[arg(long = "deep-pain")]
        deep_pain: bool,
    },

    /// Show projected volumes for a date, scaled to an hour of day
    Projection {
        /// Projection date (YYYY-MM-DD), defaults to today
        #[arg(long = "date", short = 'd')]
        date: Option<String>,

        /// Hour of day (HH:MM or HH), defaults to now
        #[arg(long = "time", short = 't')]
        time: Option<String>,
    },

    /// Manage the editable staffing board
    Board {
        #[command(subcommand)]
        action: BoardAction,
    },
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Print the staffing board with column totals
    Show,

    /// Set one editable cell (row by store name, column by header)
    Set {
        /// Store name (tolerant matching)
        store: String,

        /// Column: "Actual Riders", "Idle Riders" or "BF" (or 1-3)
        column: String,

        /// New cell value
        value: String,
    },

    /// Clear the saved board
    Reset {
        /// Do not ask for confirmation
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },
}
