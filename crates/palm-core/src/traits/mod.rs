//! Seams to external collaborators.

pub mod calendar;

pub use calendar::CalendarNormalizer;
