//! Terminal User Interface for eventdeck.
//!
//! Provides a single-page TUI with:
//! - Header with title, subtitle and stats
//! - Navigation bar whose actions raise the demo notification
//! - Search box and category filter row
//! - Grid of event cards with RSVP
//! - Auto-dismissing toast overlay

mod app;
mod events;
mod input;
mod ui;

#[cfg(test)]
mod test_support;

use std::time::Duration;

use eventdeck_toast::DEFAULT_DISMISS_AFTER;

use crate::cli::TuiArgs;

pub use app::{App, Focus, NavAction};
pub use events::run;

/// Startup options for the TUI.
#[derive(Debug, Clone)]
pub struct Options {
    /// Initial category label.
    pub category: String,
    /// Initial search text.
    pub search: String,
    /// Auto-dismiss delay for notifications.
    pub dismiss_after: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            category: "All".to_string(),
            search: String::new(),
            dismiss_after: DEFAULT_DISMISS_AFTER,
        }
    }
}

impl From<TuiArgs> for Options {
    fn from(args: TuiArgs) -> Self {
        Self {
            category: args.filter.category,
            search: args.filter.search,
            dismiss_after: Duration::from_millis(args.dismiss_ms),
        }
    }
}
