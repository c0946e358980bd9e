//! Birth and target date normalization through the calendar seam.

use chrono::{Datelike, NaiveDate};
use palm_core::errors::RequestError;
use palm_core::models::{CalendarKind, CivilDate, LunarDate};
use palm_core::symbols::Branch;
use palm_core::traits::CalendarNormalizer;

/// Target date expressed in lunar units plus an hour branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDate {
    pub lunar_year: i32,
    pub lunar_month: u32,
    pub lunar_day: u32,
    pub hour: Branch,
}

/// A normalized target together with its display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub date: TargetDate,
    /// Empty when a solar conversion had to fall back.
    pub display: String,
}

/// Parse a `YYYY-MM-DD` civil date.
pub fn parse_civil_date(input: &str) -> Result<CivilDate, RequestError> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        RequestError::MalformedDate {
            input: input.to_string(),
        }
    })?;
    Ok(CivilDate::new(date.year(), date.month(), date.day()))
}

/// Convert a civil birth date to its lunar date.
///
/// Birth data has no fallback: a failed conversion rejects the request.
pub fn normalize_birth(
    calendar: &dyn CalendarNormalizer,
    birth_date: &str,
) -> Result<LunarDate, RequestError> {
    let civil = parse_civil_date(birth_date)?;
    calendar
        .civil_to_lunar(civil.year, civil.month, civil.day)
        .map_err(|e| RequestError::InvalidBirthDate {
            input: birth_date.to_string(),
            reason: e.to_string(),
        })
}

/// Normalize the target date into lunar units.
///
/// A failed solar conversion falls back to treating the raw values as lunar.
pub fn resolve_target(
    calendar: &dyn CalendarNormalizer,
    kind: CalendarKind,
    year: i32,
    month: u32,
    day: u32,
    hour: Branch,
) -> ResolvedTarget {
    let raw = TargetDate {
        lunar_year: year,
        lunar_month: month,
        lunar_day: day,
        hour,
    };
    match kind {
        CalendarKind::Lunar => ResolvedTarget {
            date: raw,
            display: format!("農曆 {year}-{month}-{day}"),
        },
        CalendarKind::Solar => match calendar.civil_to_lunar(year, month, day) {
            Ok(lunar) => ResolvedTarget {
                date: TargetDate {
                    lunar_year: lunar.year,
                    lunar_month: lunar.month,
                    lunar_day: lunar.day,
                    hour,
                },
                display: format!("國曆 {year}-{month}-{day}"),
            },
            Err(e) => {
                tracing::warn!(
                    year, month, day, error = %e,
                    "solar target conversion failed, using raw values as lunar"
                );
                ResolvedTarget {
                    date: raw,
                    display: String::new(),
                }
            }
        },
    }
}
