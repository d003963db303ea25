//! Event catalog and filtering for eventdeck.
//!
//! This crate provides:
//! - `EventFilter`, the category + free-text predicate behind the listing
//! - `EventCatalog`, the ordered, immutable collection the filter runs over
//!
//! # Example
//!
//! ```
//! use eventdeck_events::{CategorySelection, EventCatalog, EventFilter};
//!
//! let catalog = EventCatalog::sample();
//!
//! let filter = EventFilter::new()
//!     .with_category(CategorySelection::parse("Networking"))
//!     .with_search("dinner");
//! let events = catalog.list(&filter);
//!
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].title, "Tech Founders Dinner");
//! ```

pub mod catalog;
pub mod error;
pub mod filter;

pub use catalog::EventCatalog;
pub use error::{EventError, Result};
pub use filter::{CategorySelection, EventFilter};
