//! Axis construction per scope.
//!
//! Every point's time layer is an offset from a layer of the hierarchy
//! already resolved for the target, never a fresh resolution.

use palm_core::constants::{MONTHS_PER_YEAR, SHORT_MONTH_DAYS, YEAR_AXIS_RADIUS};
use palm_core::models::{Hierarchy, Scope};
use palm_core::symbols::Branch;
use palm_core::traits::CalendarNormalizer;

use crate::hierarchy::year_branch;
use crate::ring::advance_branch;
use crate::target::TargetDate;

/// One position on the time axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisPoint {
    pub label: String,
    /// Time-layer position at this point.
    pub layer: Branch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    pub points: Vec<AxisPoint>,
    pub target_index: Option<usize>,
}

/// Build the axis for `scope`.
pub fn build(
    scope: Scope,
    hierarchy: &Hierarchy,
    target: &TargetDate,
    direction: i64,
    calendar: &dyn CalendarNormalizer,
) -> Axis {
    match scope {
        Scope::Year => year_axis(hierarchy, target, direction),
        Scope::Month => month_axis(hierarchy, target, direction, calendar),
        Scope::Day => day_axis(hierarchy, target, direction, calendar),
        Scope::Hour => hour_axis(hierarchy, target, direction),
    }
}

fn year_axis(hierarchy: &Hierarchy, target: &TargetDate, direction: i64) -> Axis {
    let points = (-YEAR_AXIS_RADIUS..=YEAR_AXIS_RADIUS)
        .map(|offset| {
            let year = i64::from(target.lunar_year) + i64::from(offset);
            AxisPoint {
                label: format!("{year} {}年", year_branch(year).label()),
                layer: advance_branch(hierarchy.year, i64::from(offset), direction),
            }
        })
        .collect();
    Axis {
        points,
        target_index: Some(YEAR_AXIS_RADIUS as usize),
    }
}

fn month_axis(
    hierarchy: &Hierarchy,
    target: &TargetDate,
    direction: i64,
    calendar: &dyn CalendarNormalizer,
) -> Axis {
    let points = (1..=MONTHS_PER_YEAR)
        .map(|month| {
            let mut label = format!("{month}月");
            if let Ok(civil) = calendar.lunar_to_civil(target.lunar_year, month, 1) {
                label.push_str(&format!(" ({}/{})", civil.month, civil.day));
            }
            AxisPoint {
                label,
                layer: advance_branch(hierarchy.year, i64::from(month) - 1, direction),
            }
        })
        .collect();
    Axis {
        points,
        target_index: ordinal_index(target.lunar_month, MONTHS_PER_YEAR),
    }
}

fn day_axis(
    hierarchy: &Hierarchy,
    target: &TargetDate,
    direction: i64,
    calendar: &dyn CalendarNormalizer,
) -> Axis {
    let days = month_length(calendar, target.lunar_year, target.lunar_month);
    let points = (1..=days)
        .map(|day| {
            let mut label = format!("{day}日");
            if let Ok(civil) = calendar.lunar_to_civil(target.lunar_year, target.lunar_month, day) {
                label.push_str(&format!(" ({}/{})", civil.month, civil.day));
            }
            AxisPoint {
                label,
                layer: advance_branch(hierarchy.month, i64::from(day) - 1, direction),
            }
        })
        .collect();
    Axis {
        points,
        target_index: ordinal_index(target.lunar_day, days),
    }
}

fn hour_axis(hierarchy: &Hierarchy, target: &TargetDate, direction: i64) -> Axis {
    let points = Branch::ALL
        .into_iter()
        .map(|branch| AxisPoint {
            label: format!("{}時 ({})", branch.label(), branch.hour_window()),
            layer: advance_branch(hierarchy.day, branch.index() as i64, direction),
        })
        .collect();
    Axis {
        points,
        target_index: Some(target.hour.index()),
    }
}

/// Days in the target lunar month; 29 when the lookup fails.
pub fn month_length(calendar: &dyn CalendarNormalizer, year: i32, month: u32) -> u32 {
    match calendar.lunar_month_days(year, month) {
        Ok(days) => days,
        Err(e) => {
            tracing::warn!(year, month, error = %e, "day-count lookup failed, assuming 29 days");
            SHORT_MONTH_DAYS
        }
    }
}

/// Zero-based index of a 1-based ordinal, if it lies on an axis of `len` points.
fn ordinal_index(ordinal: u32, len: u32) -> Option<usize> {
    (1..=len).contains(&ordinal).then(|| ordinal as usize - 1)
}
