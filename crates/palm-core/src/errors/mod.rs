//! Error handling for the fortune engine.
//! One error enum per subsystem, `thiserror` only.

pub mod calendar_error;
pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod request_error;
pub mod ring_error;

pub use calendar_error::CalendarError;
pub use config_error::ConfigError;
pub use engine_error::{EngineError, EngineResult};
pub use error_code::PalmErrorCode;
pub use request_error::RequestError;
pub use ring_error::RingError;
