use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::LEAP_CARRY_AFTER_DAY;

/// A traditional lunar date as produced by the calendar normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap_month: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month,
        }
    }

    /// Month ordinal used for the origin-month pillar.
    ///
    /// Births in the second half of a leap month count toward the
    /// following month.
    pub fn chart_month(&self) -> u32 {
        if self.is_leap_month && self.day > LEAP_CARRY_AFTER_DAY {
            self.month + 1
        } else {
            self.month
        }
    }

    /// Human-readable summary, e.g. `農曆 1990年 閏5月 20日`.
    pub fn summary(&self) -> String {
        format!(
            "農曆 {}年 {}{}月 {}日",
            self.year,
            if self.is_leap_month { "閏" } else { "" },
            self.month,
            self.day
        )
    }
}

/// A civil (solar) calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_month_carries_after_day_fifteen() {
        assert_eq!(LunarDate::new(2020, 4, 15, true).chart_month(), 4);
        assert_eq!(LunarDate::new(2020, 4, 16, true).chart_month(), 5);
        assert_eq!(LunarDate::new(2020, 4, 16, false).chart_month(), 4);
    }

    #[test]
    fn summary_marks_leap_months() {
        assert_eq!(LunarDate::new(1990, 5, 20, true).summary(), "農曆 1990年 閏5月 20日");
        assert_eq!(LunarDate::new(1990, 5, 20, false).summary(), "農曆 1990年 5月 20日");
    }
}
