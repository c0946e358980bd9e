use palm_core::config::*;
use palm_core::models::{CalendarKind, Scope};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = PalmConfig::from_toml("").unwrap();

    assert_eq!(config.engine.effective_default_scope(), Scope::Year);
    assert_eq!(
        config.engine.effective_default_target_calendar(),
        CalendarKind::Lunar
    );
    assert!(!config.engine.effective_strict_branches());
    assert!(config.trend.effective_include_compatibility());
    assert!(config.patterns.effective_enabled());
    assert!(config.risk.effective_enabled());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[engine]
default_scope = "month"
strict_branches = true

[trend]
include_compatibility = false
"#;
    let config = PalmConfig::from_toml(toml).unwrap();
    assert_eq!(config.engine.effective_default_scope(), Scope::Month);
    assert!(config.engine.effective_strict_branches());
    assert!(!config.trend.effective_include_compatibility());
    // Non-overridden fields keep defaults
    assert_eq!(
        config.engine.effective_default_target_calendar(),
        CalendarKind::Lunar
    );
    assert!(config.patterns.effective_enabled());
}

#[test]
fn config_rejects_invalid_toml() {
    let err = PalmConfig::from_toml("[engine\nbroken").unwrap_err();
    assert!(matches!(err, palm_core::errors::ConfigError::ParseError { .. }));
}

#[test]
fn validate_rejects_unknown_scope() {
    let config = PalmConfig::from_toml("[engine]\ndefault_scope = \"week\"").unwrap();
    let err = PalmConfig::validate(&config).unwrap_err();
    assert!(err.to_string().contains("engine.default_scope"));
}

#[test]
fn validate_rejects_unknown_calendar() {
    let config =
        PalmConfig::from_toml("[engine]\ndefault_target_calendar = \"mayan\"").unwrap();
    assert!(PalmConfig::validate(&config).is_err());
}

#[test]
fn overrides_apply_from_lookup() {
    let mut config = PalmConfig::default();
    PalmConfig::apply_overrides_from(&mut config, |key| match key {
        "PALM_DEFAULT_SCOPE" => Some("hour".to_string()),
        "PALM_STRICT_BRANCHES" => Some("true".to_string()),
        "PALM_INCLUDE_COMPATIBILITY" => Some("not-a-bool".to_string()),
        _ => None,
    });
    assert_eq!(config.engine.effective_default_scope(), Scope::Hour);
    assert!(config.engine.effective_strict_branches());
    // Unparseable values are ignored.
    assert!(config.trend.include_compatibility.is_none());
}

#[test]
fn load_reads_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("palm.toml"),
        "[engine]\ndefault_target_calendar = \"solar\"\n[patterns]\nenabled = false\n",
    )
    .unwrap();
    let config = PalmConfig::load(dir.path()).unwrap();
    assert_eq!(
        config.engine.effective_default_target_calendar(),
        CalendarKind::Solar
    );
    assert!(!config.patterns.effective_enabled());
}

#[test]
fn load_fails_on_invalid_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("palm.toml"), "[engine]\ndefault_scope = \"decade\"\n").unwrap();
    assert!(PalmConfig::load(dir.path()).is_err());
}

#[test]
fn config_serde_roundtrip() {
    let mut config = PalmConfig::default();
    config.engine.default_scope = Some("day".to_string());
    config.risk.enabled = Some(false);
    let toml_str = config.to_toml().unwrap();
    let roundtripped = PalmConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.engine.effective_default_scope(), Scope::Day);
    assert!(!roundtripped.risk.effective_enabled());
}
