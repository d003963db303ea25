//! eventdeck entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use eventdeck::cli::{Cli, Commands};
use eventdeck::commands;
use eventdeck::tui;

fn main() {
    // Load .env.local if it exists (RUST_LOG, EVENTDECK_DISMISS_MS)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Some(Commands::Tui(options)) => tui::run(options.into()),
        Some(cmd) => commands::execute(cmd).map_err(Into::into),
        // No command = open the listing
        None => tui::run(tui::Options::default()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
