//! Deterministic lunisolar calendar for tests.
//!
//! Lunar year `Y` starts on civil February 1 of `Y`. Months alternate 30
//! and 29 days starting with a long month, 354 days in all; the days left
//! before the next February 1 form a leap twelfth month.
//!
//! Individual civil dates can be overridden or made to fail, and whole
//! lunar months can be made unreachable, to drive fallback paths.

use chrono::{Datelike, Days, NaiveDate};
use palm_core::errors::CalendarError;
use palm_core::models::{CivilDate, LunarDate};
use palm_core::traits::CalendarNormalizer;
use std::collections::{HashMap, HashSet};

const DEFAULT_MIN_YEAR: i32 = 1900;
const DEFAULT_MAX_YEAR: i32 = 2100;

#[derive(Debug, Clone)]
pub struct FixtureCalendar {
    min_year: i32,
    max_year: i32,
    overrides: HashMap<(i32, u32, u32), LunarDate>,
    failures: HashSet<(i32, u32, u32)>,
    unreachable_months: HashSet<(i32, u32)>,
}

impl Default for FixtureCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureCalendar {
    pub fn new() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
            overrides: HashMap::new(),
            failures: HashSet::new(),
            unreachable_months: HashSet::new(),
        }
    }

    /// Restrict the supported lunar years.
    pub fn with_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Map a civil date to a fixed lunar date.
    pub fn with_override(mut self, civil: (i32, u32, u32), lunar: LunarDate) -> Self {
        self.overrides.insert(civil, lunar);
        self
    }

    /// Make a civil date fail with `OutOfRange`.
    pub fn with_failure(mut self, year: i32, month: u32, day: u32) -> Self {
        self.failures.insert((year, month, day));
        self
    }

    /// Make every lunar → civil lookup in one lunar month fail with `OutOfRange`.
    pub fn with_unreachable_month(mut self, year: i32, month: u32) -> Self {
        self.unreachable_months.insert((year, month));
        self
    }

    /// Length of a regular lunar month.
    pub fn month_days(month: u32) -> u32 {
        if month % 2 == 1 {
            30
        } else {
            29
        }
    }

    fn days_before(month: u32) -> u64 {
        (1..month).map(|m| u64::from(Self::month_days(m))).sum()
    }

    fn year_start(&self, lunar_year: i32) -> Option<NaiveDate> {
        if lunar_year < self.min_year || lunar_year > self.max_year {
            return None;
        }
        NaiveDate::from_ymd_opt(lunar_year, 2, 1)
    }
}

impl CalendarNormalizer for FixtureCalendar {
    fn civil_to_lunar(&self, year: i32, month: u32, day: u32) -> Result<LunarDate, CalendarError> {
        let out_of_range = CalendarError::OutOfRange { year, month, day };
        if self.failures.contains(&(year, month, day)) {
            return Err(out_of_range);
        }
        if let Some(lunar) = self.overrides.get(&(year, month, day)) {
            return Ok(*lunar);
        }
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarError::InvalidDate { year, month, day })?;

        let lunar_year = if date.month() >= 2 { year } else { year - 1 };
        let start = self.year_start(lunar_year).ok_or(out_of_range)?;
        let offset = (date - start).num_days();

        let mut cursor = 0i64;
        for lunar_month in 1..=12u32 {
            let len = i64::from(Self::month_days(lunar_month));
            if offset < cursor + len {
                let lunar_day = (offset - cursor + 1) as u32;
                return Ok(LunarDate::new(lunar_year, lunar_month, lunar_day, false));
            }
            cursor += len;
        }
        Ok(LunarDate::new(lunar_year, 12, (offset - cursor + 1) as u32, true))
    }

    fn lunar_to_civil(&self, year: i32, month: u32, day: u32) -> Result<CivilDate, CalendarError> {
        let out_of_range = CalendarError::OutOfRange { year, month, day };
        if self.unreachable_months.contains(&(year, month)) {
            return Err(out_of_range);
        }
        if !(1..=12).contains(&month) || day == 0 || day > Self::month_days(month) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        let start = self.year_start(year).ok_or(out_of_range.clone())?;
        let date = start
            .checked_add_days(Days::new(Self::days_before(month) + u64::from(day) - 1))
            .ok_or(out_of_range)?;
        Ok(CivilDate::new(date.year(), date.month(), date.day()))
    }
}
