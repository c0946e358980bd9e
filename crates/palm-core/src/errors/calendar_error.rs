//! Calendar normalizer errors.

use super::error_code::{self, PalmErrorCode};

/// Errors a [`CalendarNormalizer`](crate::traits::CalendarNormalizer) may return.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("date {year}-{month}-{day} is outside the supported range")]
    OutOfRange { year: i32, month: u32, day: u32 },

    #[error("invalid date {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

impl PalmErrorCode for CalendarError {
    fn error_code(&self) -> &'static str {
        error_code::CALENDAR_ERROR
    }
}
