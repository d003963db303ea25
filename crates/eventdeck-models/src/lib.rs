//! Core data models for eventdeck.
//!
//! This crate provides the event record shown on the listing page, its
//! identifier and category types, and the compiled-in sample dataset.

pub mod builders;
pub mod event;
pub mod ids;
pub mod sample;

// Re-export main types
pub use builders::EventBuilder;
pub use event::{Category, Event, ParseCategoryError};
pub use ids::EventId;
pub use sample::sample_events;
