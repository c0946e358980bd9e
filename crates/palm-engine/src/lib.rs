//! # palm-engine
//!
//! The cyclic fortune calculation engine. Pure and synchronous: every
//! function is a deterministic mapping from inputs to outputs over the
//! static tables in `palm-core`.

pub mod aspects;
pub mod chart;
pub mod engine;
pub mod hierarchy;
pub mod patterns;
pub mod relation;
pub mod ring;
pub mod risk;
pub mod target;
pub mod trend;

pub use chart::{BirthPillars, SubjectChart};
pub use engine::FortuneEngine;
pub use target::TargetDate;
pub use trend::{Trend, TrendPoint};
