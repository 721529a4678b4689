use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timetracker
/// CLI application to track working sessions per company with SQLite
#[derive(Parser)]
#[command(
    name = "timetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track working sessions per company, browse a monthly calendar and watch the running session",
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

    /// Manage the database (integrity checks, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Start a working session for a company
    Start {
        /// Company name (created on first use)
        company: String,
    },

    /// Stop the running session
    Stop,

    /// Show the running session, if any
    Status,

    /// List completed records, newest first
    Show {
        /// Filter by company name (substring match)
        #[arg(long)]
        company: Option<String>,

        /// First start date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Last start date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Per-day worked time against the daily goal
    Balance {
        /// Filter by company name (substring match)
        #[arg(long)]
        company: Option<String>,

        /// Daily goal (e.g. 8h, 7h30m, 450m); defaults to the configured one
        #[arg(long)]
        goal: Option<String>,
    },

    /// Live view of the running session (q to quit)
    Watch,

    /// Monthly work calendar (p/n to change month, q to quit)
    Calendar {
        /// Months from the current one (-1 = previous month)
        #[arg(default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,

        /// Print the calendar as plain text instead of opening the viewer
        #[arg(long)]
        print: bool,
    },

    /// Export one company's records for a month
    Export {
        /// Company name (exact match)
        company: String,

        /// Month to export (MM/YY or MM/YYYY); defaults to the current month
        #[arg(long)]
        month: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file; defaults to <export_dir>/<company>_<MM_YYYY>.<ext>
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
}
