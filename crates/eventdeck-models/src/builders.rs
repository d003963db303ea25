//! Builder patterns for event records.

use crate::event::{Category, Event};
use crate::ids::EventId;

/// Builder for creating Event instances with a fluent API.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    id: EventId,
    title: String,
    category: Category,
    date: String,
    time: String,
    location: String,
    attendees: u32,
    image: Option<String>,
}

impl EventBuilder {
    /// Creates a new EventBuilder with required fields.
    pub fn new(id: impl Into<EventId>, title: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            date: String::new(),
            time: String::new(),
            location: String::new(),
            attendees: 0,
            image: None,
        }
    }

    /// Sets the display date.
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Sets the display time.
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Sets the location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the attendee count.
    pub fn attendees(mut self, attendees: u32) -> Self {
        self.attendees = attendees;
        self
    }

    /// Sets the cover image URI.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Builds the Event.
    pub fn build(self) -> Event {
        Event {
            id: self.id,
            title: self.title,
            date: self.date,
            time: self.time,
            location: self.location,
            attendees: self.attendees,
            category: self.category,
            image: self.image,
        }
    }
}

/// Convenience methods on Event for creating builders.
impl Event {
    /// Creates a builder for a new event.
    pub fn builder(
        id: impl Into<EventId>,
        title: impl Into<String>,
        category: Category,
    ) -> EventBuilder {
        EventBuilder::new(id, title, category)
    }
}
