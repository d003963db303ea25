//! The compiled-in event listing.

use crate::event::{Category, Event};

/// Returns the sample events in display order.
pub fn sample_events() -> Vec<Event> {
    vec![
        Event::builder("1", "AI & Machine Learning Summit 2025", Category::Conference)
            .date("Oct 15, 2025")
            .time("2:00 PM PST")
            .location("San Francisco, CA")
            .attendees(234)
            .image("https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=800&q=80")
            .build(),
        Event::builder("2", "Web3 Developer Workshop", Category::Workshop)
            .date("Oct 18, 2025")
            .time("6:00 PM PST")
            .location("Virtual")
            .attendees(156)
            .image("https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=800&q=80")
            .build(),
        Event::builder("3", "Startup Pitch Night", Category::Networking)
            .date("Oct 20, 2025")
            .time("7:00 PM PST")
            .location("Palo Alto, CA")
            .attendees(89)
            .image("https://images.unsplash.com/photo-1511578314322-379afb476865?w=800&q=80")
            .build(),
        Event::builder("4", "Design Systems Masterclass", Category::Workshop)
            .date("Oct 22, 2025")
            .time("10:00 AM PST")
            .location("San Francisco, CA")
            .attendees(178)
            .image("https://images.unsplash.com/photo-1558655146-9f40138edfeb?w=800&q=80")
            .build(),
        Event::builder("5", "Cloud Architecture Forum", Category::Conference)
            .date("Oct 25, 2025")
            .time("3:00 PM PST")
            .location("Seattle, WA")
            .attendees(312)
            .image("https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=800&q=80")
            .build(),
        Event::builder("6", "Product Management Meetup", Category::Networking)
            .date("Oct 27, 2025")
            .time("6:30 PM PST")
            .location("San Francisco, CA")
            .attendees(145)
            .image("https://images.unsplash.com/photo-1556761175-b413da4baf72?w=800&q=80")
            .build(),
        Event::builder("7", "Cybersecurity Best Practices", Category::Workshop)
            .date("Oct 29, 2025")
            .time("1:00 PM PST")
            .location("Virtual")
            .attendees(267)
            .image("https://images.unsplash.com/photo-1550751827-4bd374c3f58b?w=800&q=80")
            .build(),
        Event::builder("8", "Tech Founders Dinner", Category::Networking)
            .date("Nov 1, 2025")
            .time("7:00 PM PST")
            .location("San Francisco, CA")
            .attendees(42)
            .image("https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=800&q=80")
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_has_eight_events_in_order() {
        let ids: Vec<String> = sample_events().into_iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_sample_ids_unique() {
        let events = sample_events();
        let ids: HashSet<_> = events.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn test_sample_every_event_has_image() {
        assert!(sample_events().iter().all(|e| e.image.is_some()));
    }
}
