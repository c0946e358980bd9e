//! Request, report and intermediate models shared across crates.

pub mod calendar;
pub mod chart;
pub mod hierarchy;
pub mod relation;
pub mod report;
pub mod request;

pub use calendar::{CivilDate, LunarDate};
pub use chart::{Pillar, Placement};
pub use hierarchy::{Hierarchy, Layer};
pub use relation::Relation;
pub use report::{
    AspectReading, AspectSeries, FortuneReport, LayerEntry, PatternMatch, PillarEntry,
    TrendSeries,
};
pub use request::{CalendarKind, FortuneRequest, PartnerRequest, Polarity, Scope};
