//! Ring lookup errors.

use super::error_code::{self, PalmErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingError {
    #[error("unknown branch label: {label:?}")]
    UnknownBranch { label: String },
}

impl PalmErrorCode for RingError {
    fn error_code(&self) -> &'static str {
        error_code::UNKNOWN_BRANCH
    }
}
