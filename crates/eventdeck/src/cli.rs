//! Command-line interface definition using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// eventdeck - browse tech events from the terminal
#[derive(Parser, Debug)]
#[command(name = "eventdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive listing (default)
    Tui(TuiArgs),

    /// Print the events matching a category and search text
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output format (table, json, brief)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show the filter categories with their event counts
    Categories,
}

/// Category and search options shared by `list` and `tui`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Category to show ("All" for every category)
    #[arg(short, long, default_value = "All")]
    pub category: String,

    /// Case-insensitive text matched against title and location
    #[arg(short, long, default_value = "")]
    pub search: String,
}

/// Options for the interactive listing.
#[derive(Args, Debug, Clone)]
pub struct TuiArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Milliseconds before a notification hides itself
    #[arg(long, env = "EVENTDECK_DISMISS_MS", default_value_t = 5000)]
    pub dismiss_ms: u64,
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Brief,
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
