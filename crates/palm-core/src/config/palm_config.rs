//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{EngineConfig, PatternsConfig, RiskConfig, TrendConfig};
use crate::errors::ConfigError;
use crate::models::{CalendarKind, Scope};

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "palm.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PALM_*`)
/// 2. Project config (`palm.toml` in the project root)
/// 3. User config (`~/.palm/config.toml`)
/// 4. Compiled defaults
///
/// The resolved value is handed to the engine at construction; nothing in
/// the engine reads configuration from the environment.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PalmConfig {
    pub engine: EngineConfig,
    pub trend: TrendConfig,
    pub patterns: PatternsConfig,
    pub risk: RiskConfig,
}

impl PalmConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                if let Err(e) = Self::merge_toml_file(&mut config, &user_config_path) {
                    match e {
                        ConfigError::ParseError { .. } => return Err(e),
                        other => {
                            ::tracing::warn!(error = %other, "ignoring unreadable user config");
                        }
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PalmConfig) -> Result<(), ConfigError> {
        if let Some(ref scope) = config.engine.default_scope {
            if scope.parse::<Scope>().is_err() {
                return Err(ConfigError::ValidationFailed {
                    field: "engine.default_scope".to_string(),
                    message: format!("{scope:?} is not one of year, month, day, hour"),
                });
            }
        }
        if let Some(ref calendar) = config.engine.default_target_calendar {
            if calendar.parse::<CalendarKind>().is_err() {
                return Err(ConfigError::ValidationFailed {
                    field: "engine.default_target_calendar".to_string(),
                    message: format!("{calendar:?} is not one of solar, lunar"),
                });
            }
        }
        Ok(())
    }

    /// Apply `PALM_*` environment variable overrides.
    pub fn apply_env_overrides(config: &mut PalmConfig) {
        Self::apply_overrides_from(config, |key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    /// Values that fail to parse are ignored.
    pub fn apply_overrides_from<F>(config: &mut PalmConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("PALM_DEFAULT_SCOPE") {
            config.engine.default_scope = Some(val);
        }
        if let Some(val) = lookup("PALM_DEFAULT_TARGET_CALENDAR") {
            config.engine.default_target_calendar = Some(val);
        }
        if let Some(val) = lookup("PALM_STRICT_BRANCHES") {
            if let Ok(v) = val.parse::<bool>() {
                config.engine.strict_branches = Some(v);
            }
        }
        if let Some(val) = lookup("PALM_INCLUDE_COMPATIBILITY") {
            if let Ok(v) = val.parse::<bool>() {
                config.trend.include_compatibility = Some(v);
            }
        }
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut PalmConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PalmConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` override.
    fn merge(base: &mut PalmConfig, other: &PalmConfig) {
        if other.engine.default_scope.is_some() {
            base.engine.default_scope = other.engine.default_scope.clone();
        }
        if other.engine.default_target_calendar.is_some() {
            base.engine.default_target_calendar = other.engine.default_target_calendar.clone();
        }
        if other.engine.strict_branches.is_some() {
            base.engine.strict_branches = other.engine.strict_branches;
        }
        if other.trend.include_compatibility.is_some() {
            base.trend.include_compatibility = other.trend.include_compatibility;
        }
        if other.patterns.enabled.is_some() {
            base.patterns.enabled = other.patterns.enabled;
        }
        if other.risk.enabled.is_some() {
            base.risk.enabled = other.risk.enabled;
        }
    }

    /// Returns the user config path: `~/.palm/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".palm").join("config.toml"))
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
