//! Event records and categories.
//!
//! An event record is one listing entry on the page. Records are immutable
//! once built; the dataset is a fixed snapshot taken at startup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::ids::EventId;

/// Coarse grouping used by the category filter row.
///
/// "All" is a wildcard understood by the filter, not a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Talks and multi-track summits.
    Conference,
    /// Hands-on sessions.
    Workshop,
    /// Meetups, dinners and pitch nights.
    Networking,
}

impl Category {
    /// Every category, in filter-row order.
    pub const ALL: [Category; 3] = [
        Category::Conference,
        Category::Workshop,
        Category::Networking,
    ];

    /// Display label, also used for exact category matching.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Conference => "Conference",
            Category::Workshop => "Workshop",
            Category::Networking => "Networking",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// A single listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier within the dataset.
    pub id: EventId,

    /// Headline shown on the card.
    pub title: String,

    /// Display date, e.g. "Oct 15, 2025".
    pub date: String,

    /// Display time, e.g. "2:00 PM PST".
    pub time: String,

    /// Venue or "Virtual".
    pub location: String,

    /// Number of people attending.
    pub attendees: u32,

    /// Category used by the filter row.
    pub category: Category,

    /// Optional cover image URI.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
}

impl Event {
    /// Returns true if the title or location contains `needle`, ignoring case.
    ///
    /// An empty needle matches every event.
    pub fn mentions(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.location.to_lowercase().contains(&needle)
    }
}
