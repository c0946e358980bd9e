/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of positions on the branch ring.
pub const RING_SIZE: usize = 12;

/// Calendar years covered by one decade stage.
pub const STAGE_LENGTH_YEARS: i64 = 7;

/// Civil-to-branch epoch: lunar year `y` sits on branch `(y - 4) mod 12`.
pub const YEAR_BRANCH_EPOCH: i32 = 4;

/// Years shown on either side of the target on a year-scope axis.
pub const YEAR_AXIS_RADIUS: i32 = 6;

/// Months on a month-scope axis.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Length of a long lunar month.
pub const LONG_MONTH_DAYS: u32 = 30;

/// Length of a short lunar month, and the fallback when the day-30 lookup fails.
pub const SHORT_MONTH_DAYS: u32 = 29;

/// Birth days after this one in a leap month carry into the next month.
pub const LEAP_CARRY_AFTER_DAY: u32 = 15;

/// Bonus added when an aspect's branch coincides with one of the four pillars.
pub const ROOTED_BONUS: i32 = 10;

/// Occurrences of one named star that form a "triple" pattern.
pub const TRIPLE_PATTERN_MIN: usize = 3;
