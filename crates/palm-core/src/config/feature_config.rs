//! Toggles for the optional analysis passes.

use serde::{Deserialize, Serialize};

/// Pattern detector toggle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PatternsConfig {
    /// Default: true.
    pub enabled: Option<bool>,
}

impl PatternsConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// Partner risk scanner toggle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RiskConfig {
    /// Default: true.
    pub enabled: Option<bool>,
}

impl RiskConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}
