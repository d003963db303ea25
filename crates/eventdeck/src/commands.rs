//! Command handlers for the non-interactive subcommands.

use std::io::{self, Write};

use eventdeck_events::{CategorySelection, EventCatalog, EventFilter};
use eventdeck_models::Event;
use thiserror::Error;
use tracing::debug;

use crate::cli::{Commands, FilterArgs, OutputFormat};

/// Shown when a filter leaves nothing to list.
pub const EMPTY_STATE: &str = "No events found matching your criteria";

/// Errors from command handlers.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Writing output failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Execute a CLI command against the sample catalog.
pub fn execute(command: Commands) -> Result<()> {
    let catalog = EventCatalog::sample();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::List { filter, format } => cmd_list(&mut out, &catalog, &filter, format),
        Commands::Categories => cmd_categories(&mut out, &catalog),
        Commands::Tui(_) => {
            // TUI is handled separately in main
            Ok(())
        }
    }
}

impl From<&FilterArgs> for EventFilter {
    fn from(args: &FilterArgs) -> Self {
        EventFilter::new()
            .with_category(CategorySelection::parse(&args.category))
            .with_search(args.search.clone())
    }
}

fn cmd_list(
    out: &mut impl Write,
    catalog: &EventCatalog,
    args: &FilterArgs,
    format: OutputFormat,
) -> Result<()> {
    let filter = EventFilter::from(args);
    let events = catalog.list(&filter);
    debug!(matched = events.len(), ?format, "listing events");

    match format {
        OutputFormat::Table => {
            if events.is_empty() {
                writeln!(out, "{}", EMPTY_STATE)?;
                return Ok(());
            }

            writeln!(
                out,
                "{:<4}  {:<34}  {:<12}  {:<12}  {:<18}  {:<10}  {:>9}",
                "ID", "TITLE", "DATE", "TIME", "LOCATION", "CATEGORY", "ATTENDEES"
            )?;
            writeln!(out, "{}", "-".repeat(111))?;
            for event in &events {
                write_row(out, event)?;
            }
            if filter.is_unfiltered() {
                writeln!(out, "\n{} event(s)", events.len())?;
            } else {
                writeln!(out, "\n{} of {} event(s)", events.len(), catalog.len())?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&events)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Brief => {
            if events.is_empty() {
                writeln!(out, "{}", EMPTY_STATE)?;
            }
            for event in &events {
                writeln!(out, "{}\t{}", event.id, event.title)?;
            }
        }
    }

    Ok(())
}

fn write_row(out: &mut impl Write, event: &Event) -> io::Result<()> {
    writeln!(
        out,
        "{:<4}  {:<34}  {:<12}  {:<12}  {:<18}  {:<10}  {:>9}",
        event.id,
        truncate(&event.title, 34),
        event.date,
        event.time,
        truncate(&event.location, 18),
        event.category,
        event.attendees
    )
}

fn cmd_categories(out: &mut impl Write, catalog: &EventCatalog) -> Result<()> {
    for option in catalog.filter_options() {
        writeln!(out, "{:<12} {}", option.label(), catalog.count_in(&option))?;
    }
    writeln!(out, "\n{} attending in total", catalog.total_attendees())?;
    Ok(())
}

/// Truncates a string to the given length in characters, adding "..." if truncated.
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
