//! Top-level engine error. Aggregates subsystem errors via `From`.

use super::error_code::{self, PalmErrorCode};
use super::{ConfigError, RequestError};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No decade stage exists before the first year of life. Widened to
    /// `i64` so an age outside `i32` is still reported as-is.
    #[error("age {age} is out of range: target year precedes the birth year or exceeds the year range")]
    AgeOutOfRange { age: i64 },
}

pub type EngineResult<T> = Result<T, EngineError>;

impl PalmErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Request(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::AgeOutOfRange { .. } => error_code::AGE_OUT_OF_RANGE,
        }
    }
}
