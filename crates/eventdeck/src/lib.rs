//! eventdeck: the tech events listing, in a terminal.
//!
//! - `cli`: clap definitions
//! - `commands`: non-interactive `list` and `categories`
//! - `tui`: the interactive page (header, search, filters, cards, toast)

pub mod cli;
pub mod commands;
pub mod tui;

/// Message shown by every interaction the demo does not implement.
pub const DEMO_MESSAGE: &str = "Sorry, this demo isn't hooked up to anything! \
If you would like to change that, shoot me an email at ost.sam@gmail.com :)";
