//! Request validation errors. These reject the request outright.

use super::error_code::{self, PalmErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("malformed date {input:?}: expected YYYY-MM-DD")]
    MalformedDate { input: String },

    #[error("birth date {input:?} cannot be normalized: {reason}")]
    InvalidBirthDate { input: String, reason: String },

    #[error("unknown branch {label:?} in field {field}")]
    UnknownBranch { field: String, label: String },

    #[error("invalid scope {value:?}: expected year, month, day or hour")]
    InvalidScope { value: String },

    #[error("invalid calendar kind {value:?}: expected solar or lunar")]
    InvalidCalendarKind { value: String },
}

impl PalmErrorCode for RequestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedDate { .. } => error_code::MALFORMED_DATE,
            Self::InvalidBirthDate { .. } => error_code::INVALID_BIRTH_DATE,
            Self::UnknownBranch { .. } => error_code::UNKNOWN_BRANCH,
            Self::InvalidScope { .. } | Self::InvalidCalendarKind { .. } => {
                error_code::INVALID_REQUEST
            }
        }
    }
}
