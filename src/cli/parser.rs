use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tasktimer
/// CLI application to time work on named tasks, one session at a time
#[derive(Parser)]
#[command(
    name = "tasktimer",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple task timing CLI: start/pause/stop a timer against a named task and review per-task totals",
    long_about = None
)]
pub struct Cli {
    /// Override session store path (useful for tests or a custom log file)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty session store
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Run an interactive timing session against a task
    Timer {
        /// Task to stage before the loop starts
        task: Option<String>,

        /// Initial session comment (editable until stop)
        #[arg(long, help = "Initial session comment")]
        comment: Option<String>,
    },

    /// List recent tasks with accumulated time and last comment
    Recent {
        #[arg(
            short = 'n',
            long = "limit",
            help = "Maximum number of tasks to show (default from config)"
        )]
        limit: Option<usize>,
    },

    /// Show every task with its sessions, grouped
    Tasks {
        /// Restrict the view to a single task
        task: Option<String>,
    },

    /// List sessions in append order
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Total tracked time per task or per date
    Totals {
        #[arg(
            long = "by-date",
            help = "Group totals by start date instead of by task"
        )]
        by_date: bool,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Rename a task across the whole session history
    Rename {
        /// Current task name (exact match)
        old: String,

        /// New task name
        new: String,
    },

    /// Show session store diagnostics
    Info,

    /// Export session data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "PERIOD",
            help = "Filter export by year/month/day or a custom range"
        )]
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the session store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
