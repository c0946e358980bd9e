//! Hierarchy resolver: decade stage → year → month → day → hour.

use palm_core::constants::{STAGE_LENGTH_YEARS, YEAR_BRANCH_EPOCH};
use palm_core::errors::{EngineError, EngineResult};
use palm_core::models::Hierarchy;
use palm_core::symbols::Branch;

use crate::chart::SubjectChart;
use crate::ring::advance_branch;
use crate::target::TargetDate;

/// Age in nominal years: target lunar year − birth lunar year + 1.
///
/// Fails when the age is below 1 or does not fit in `i32`.
pub fn age_at(birth_lunar_year: i32, target_lunar_year: i32) -> EngineResult<i32> {
    let age = i64::from(target_lunar_year) - i64::from(birth_lunar_year) + 1;
    match i32::try_from(age) {
        Ok(age) if age >= 1 => Ok(age),
        _ => Err(EngineError::AgeOutOfRange { age }),
    }
}

/// Branch of a lunar year: `(year − 4) mod 12`. Takes `i64` so axis
/// neighbours of any `i32` year stay in range.
pub fn year_branch(lunar_year: i64) -> Branch {
    Branch::from_index((lunar_year - i64::from(YEAR_BRANCH_EPOCH)).rem_euclid(12) as usize)
}

/// Decade stage for `age`: one step past the origin-hour pillar, then one
/// more step per full seven years.
pub fn decade_stage(chart: &SubjectChart, age: i32) -> EngineResult<Branch> {
    if age < 1 {
        return Err(EngineError::AgeOutOfRange {
            age: i64::from(age),
        });
    }
    let direction = chart.direction();
    let start = advance_branch(chart.hour(), 1, direction);
    let stage_offset = (i64::from(age) - 1) / STAGE_LENGTH_YEARS;
    Ok(advance_branch(start, stage_offset, direction))
}

/// Resolve all five layers for `target`.
///
/// Each layer advances from the previous one by the target's own unit.
pub fn resolve(chart: &SubjectChart, age: i32, target: &TargetDate) -> EngineResult<Hierarchy> {
    let direction = chart.direction();
    let decade_stage = decade_stage(chart, age)?;
    let year = advance_branch(
        decade_stage,
        year_branch(i64::from(target.lunar_year)).index() as i64,
        direction,
    );
    let month = advance_branch(year, i64::from(target.lunar_month) - 1, direction);
    let day = advance_branch(month, i64::from(target.lunar_day) - 1, direction);
    let hour = advance_branch(day, target.hour.index() as i64, direction);

    let hierarchy = Hierarchy {
        decade_stage,
        year,
        month,
        day,
        hour,
    };
    tracing::debug!(age, ?hierarchy, "resolved hierarchy");
    Ok(hierarchy)
}
