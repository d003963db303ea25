//! EventCatalog - the ordered, immutable event collection.
//!
//! The catalog is built once at startup and never mutated. Every query is
//! recomputed from scratch; at this size there is nothing worth caching.

use std::collections::HashSet;

use eventdeck_models::{sample_events, Category, Event, EventId};
use tracing::debug;

use crate::error::{EventError, Result};
use crate::filter::{CategorySelection, EventFilter};

/// Ordered collection of event records.
///
/// Insertion order is display order, and every listing preserves it.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Creates a catalog from events in display order.
    ///
    /// # Errors
    ///
    /// Returns `EventError::DuplicateId` if two events share an id.
    pub fn new(events: Vec<Event>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(&event.id) {
                return Err(EventError::DuplicateId(event.id.to_string()));
            }
        }

        debug!(count = events.len(), "event catalog loaded");
        Ok(Self { events })
    }

    /// Creates a catalog holding the compiled-in sample events.
    pub fn sample() -> Self {
        Self {
            events: sample_events(),
        }
    }

    /// Number of events in the catalog.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the catalog holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in display order.
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    /// Gets an event by ID.
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Lists the events matching `filter`, in display order.
    ///
    /// An empty result always means "no matches".
    pub fn list(&self, filter: &EventFilter) -> Vec<&Event> {
        let events = filter.select(&self.events);
        debug!(
            category = %filter.category,
            search = %filter.search,
            matched = events.len(),
            "filtered events"
        );
        events
    }

    /// Distinct categories present, in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for event in &self.events {
            if !categories.contains(&event.category) {
                categories.push(event.category);
            }
        }
        categories
    }

    /// Entries of the filter row: "All" followed by the categories present.
    pub fn filter_options(&self) -> Vec<CategorySelection> {
        std::iter::once(CategorySelection::All)
            .chain(self.categories().into_iter().map(CategorySelection::from))
            .collect()
    }

    /// Number of events listed under `selection`, ignoring the search text.
    pub fn count_in(&self, selection: &CategorySelection) -> usize {
        self.events
            .iter()
            .filter(|e| selection.matches(e.category))
            .count()
    }

    /// Sum of attendees across all events.
    pub fn total_attendees(&self) -> u64 {
        self.events.iter().map(|e| u64::from(e.attendees)).sum()
    }
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(id: &str, category: Category) -> Event {
        Event::builder(id, format!("Event {}", id), category).build()
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = EventCatalog::new(vec![
            make_event("1", Category::Workshop),
            make_event("1", Category::Conference),
        ]);
        assert_eq!(result.unwrap_err(), EventError::DuplicateId("1".into()));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = EventCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.list(&EventFilter::new()).is_empty());
        assert_eq!(catalog.filter_options(), vec![CategorySelection::All]);
    }

    #[test]
    fn test_get() {
        let catalog = EventCatalog::sample();

        let event = catalog.get(&EventId::from("5")).unwrap();
        assert_eq!(event.title, "Cloud Architecture Forum");
        assert!(catalog.get(&EventId::from("99")).is_none());
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let catalog = EventCatalog::new(vec![
            make_event("1", Category::Networking),
            make_event("2", Category::Workshop),
            make_event("3", Category::Networking),
        ])
        .unwrap();

        assert_eq!(
            catalog.categories(),
            vec![Category::Networking, Category::Workshop]
        );
    }

    #[test]
    fn test_sample_filter_options() {
        let labels: Vec<String> = EventCatalog::sample()
            .filter_options()
            .iter()
            .map(|o| o.label().to_string())
            .collect();
        assert_eq!(labels, vec!["All", "Conference", "Workshop", "Networking"]);
    }

    #[test]
    fn test_counts() {
        let catalog = EventCatalog::sample();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.count_in(&CategorySelection::All), 8);
        assert_eq!(catalog.count_in(&Category::Conference.into()), 2);
        assert_eq!(catalog.count_in(&Category::Workshop.into()), 3);
        assert_eq!(catalog.count_in(&Category::Networking.into()), 3);
        assert_eq!(catalog.count_in(&CategorySelection::parse("Hackathon")), 0);
        assert_eq!(catalog.total_attendees(), 1423);
    }
}
