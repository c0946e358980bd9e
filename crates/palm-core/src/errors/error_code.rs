//! PalmErrorCode trait for host-boundary conversion.

/// Every error enum implements this to expose a stable code string to
/// whatever host layer wraps the engine.
pub trait PalmErrorCode {
    /// Returns the error code string (e.g., "UNKNOWN_BRANCH").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn wire_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNKNOWN_BRANCH: &str = "UNKNOWN_BRANCH";
pub const CALENDAR_ERROR: &str = "CALENDAR_ERROR";
pub const MALFORMED_DATE: &str = "MALFORMED_DATE";
pub const INVALID_BIRTH_DATE: &str = "INVALID_BIRTH_DATE";
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const AGE_OUT_OF_RANGE: &str = "AGE_OUT_OF_RANGE";
