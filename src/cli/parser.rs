use crate::classifier::ClassifierKind;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for greedfear
#[derive(Parser)]
#[command(
    name = "greedfear",
    version = env!("CARGO_PKG_VERSION"),
    about = "Classify financial headlines by sentiment and track a Greed & Fear index in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Override the sentiment model backend
    #[arg(global = true, long = "classifier", value_enum)]
    pub classifier: Option<ClassifierKind>,

    /// Override the inference endpoint (huggingface backend)
    #[arg(global = true, long = "model-endpoint", value_name = "URL")]
    pub model_endpoint: Option<String>,

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

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (schema, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Create or update the schema")]
        migrate: bool,

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

    /// Classify a headline or tweet and store the result
    Analyze {
        /// Text to analyze (defaults to the configured sample headline)
        text: Option<String>,

        #[arg(long = "no-dashboard", help = "Do not render the dashboard afterwards")]
        no_dashboard: bool,
    },

    /// Render the Greed & Fear dashboard
    Dashboard {
        #[arg(
            long = "interactive",
            short = 'i',
            conflicts_with = "once",
            help = "Keep prompting for new headlines"
        )]
        interactive: bool,

        #[arg(long = "once", help = "Render once and exit, even when not headless")]
        once: bool,
    },

    /// Print the Greed & Fear index
    Index {
        #[arg(long = "json", help = "Print the index as JSON")]
        json: bool,
    },

    /// List stored observations
    List {
        #[arg(long, short = 'n', help = "Number of rows to show (default: recent_rows)")]
        limit: Option<usize>,

        #[arg(long = "all", conflicts_with = "limit", help = "Show every observation")]
        all: bool,

        #[arg(long = "chronological", help = "Oldest first")]
        chronological: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export stored observations
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
