//! Category and search filtering for the event listing.

use std::fmt;

use eventdeck_models::{Category, Event};

/// The category filter currently selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategorySelection {
    /// Wildcard: every category passes.
    #[default]
    All,
    /// Only events whose category label equals this one.
    Only(String),
}

impl CategorySelection {
    /// Label of the wildcard entry in the filter row.
    pub const WILDCARD: &'static str = "All";

    /// Parses a filter label.
    ///
    /// "All" (any case) is the wildcard. Known category names are normalized
    /// to their canonical label; anything else is kept verbatim and simply
    /// matches nothing.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case(Self::WILDCARD) {
            return CategorySelection::All;
        }
        match label.parse::<Category>() {
            Ok(category) => CategorySelection::Only(category.label().to_string()),
            Err(_) => CategorySelection::Only(label.to_string()),
        }
    }

    /// Label shown in the filter row.
    pub fn label(&self) -> &str {
        match self {
            CategorySelection::All => Self::WILDCARD,
            CategorySelection::Only(label) => label,
        }
    }

    /// Returns true if `category` passes this selection.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(label) => category.label() == label.as_str(),
        }
    }
}

impl From<Category> for CategorySelection {
    fn from(category: Category) -> Self {
        CategorySelection::Only(category.label().to_string())
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Filter criteria for the visible event subset.
///
/// An event passes when its category matches the selection and, unless the
/// search text is empty, its title or location contains the search text
/// case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Selected category.
    pub category: CategorySelection,
    /// Free-text search, matched against title and location.
    pub search: String,
}

impl EventFilter {
    /// Creates a new filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the category selection.
    pub fn with_category(mut self, category: impl Into<CategorySelection>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Returns true if neither predicate narrows the result.
    pub fn is_unfiltered(&self) -> bool {
        self.category == CategorySelection::All && self.search.is_empty()
    }

    /// Returns true if the event matches this filter.
    pub fn matches(&self, event: &Event) -> bool {
        self.category.matches(event.category) && event.mentions(&self.search)
    }

    /// Returns references to the matching events, in their original order.
    pub fn select<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|event| self.matches(event)).collect()
    }

    /// Returns owned copies of the matching events, in their original order.
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        self.select(events).into_iter().cloned().collect()
    }
}
