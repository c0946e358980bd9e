//! Configuration system for the fortune engine.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod engine_config;
pub mod feature_config;
pub mod palm_config;
pub mod trend_config;

pub use engine_config::EngineConfig;
pub use feature_config::{PatternsConfig, RiskConfig};
pub use palm_config::PalmConfig;
pub use trend_config::TrendConfig;
