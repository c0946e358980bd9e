//! Trend output configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrendConfig {
    /// Emit the per-point compatibility overlay. Default: true.
    pub include_compatibility: Option<bool>,
}

impl TrendConfig {
    pub fn effective_include_compatibility(&self) -> bool {
        self.include_compatibility.unwrap_or(true)
    }
}
