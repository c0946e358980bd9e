//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::models::{CalendarKind, Scope};

/// Request defaults and lookup strictness.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Scope used when a request omits one. Default: "year".
    pub default_scope: Option<String>,
    /// Target calendar used when a request omits one. Default: "lunar".
    pub default_target_calendar: Option<String>,
    /// Reject unknown branch labels instead of defaulting to 子. Default: false.
    pub strict_branches: Option<bool>,
}

impl EngineConfig {
    /// Returns the effective default scope, falling back to `Year` when the
    /// configured value does not parse. `validate` catches that case first.
    pub fn effective_default_scope(&self) -> Scope {
        self.default_scope
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Scope::Year)
    }

    /// Returns the effective default target calendar, defaulting to `Lunar`.
    pub fn effective_default_target_calendar(&self) -> CalendarKind {
        self.default_target_calendar
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(CalendarKind::Lunar)
    }

    /// Returns whether unknown branches are rejected, defaulting to false.
    pub fn effective_strict_branches(&self) -> bool {
        self.strict_branches.unwrap_or(false)
    }
}
