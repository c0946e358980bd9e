//! CalendarNormalizer trait.
//!
//! The engine never does calendrical math itself. A host supplies an
//! implementation backed by a real lunisolar table; tests use the
//! deterministic fixture calendar.

use crate::errors::CalendarError;
use crate::models::{CivilDate, LunarDate};

/// Converts between civil and traditional lunar dates.
pub trait CalendarNormalizer: Send + Sync {
    /// Civil date → lunar date (with leap-month flag).
    fn civil_to_lunar(&self, year: i32, month: u32, day: u32) -> Result<LunarDate, CalendarError>;

    /// Lunar date (non-leap month) → civil date.
    /// Fails when the day does not exist in that lunar month.
    fn lunar_to_civil(&self, year: i32, month: u32, day: u32) -> Result<CivilDate, CalendarError>;

    /// Number of days in a lunar month, found by asking for day 30.
    fn lunar_month_days(&self, year: i32, month: u32) -> Result<u32, CalendarError> {
        use crate::constants::{LONG_MONTH_DAYS, SHORT_MONTH_DAYS};
        match self.lunar_to_civil(year, month, LONG_MONTH_DAYS) {
            Ok(_) => Ok(LONG_MONTH_DAYS),
            Err(CalendarError::InvalidDate { .. }) => Ok(SHORT_MONTH_DAYS),
            Err(e) => Err(e),
        }
    }
}
