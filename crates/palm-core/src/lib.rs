//! # palm-core
//!
//! Foundation crate for the one-palm fortune engine.
//! Defines the branch/element/star tables, request and report models,
//! errors, config, tracing setup, constants, and the calendar trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod symbols;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PalmConfig;
pub use errors::{EngineError, EngineResult};
pub use models::{CalendarKind, CivilDate, FortuneReport, FortuneRequest, LunarDate, Polarity, Scope};
pub use symbols::{Aspect, Branch, Element, Star, StarTier};
pub use traits::CalendarNormalizer;
