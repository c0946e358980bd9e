//! Test fixtures for the palm workspace: a deterministic calendar, request
//! builders, and the scenario loader for golden JSON files under `data/`.

mod calendar;
mod requests;

pub use calendar::FixtureCalendar;
pub use requests::RequestBuilder;

use palm_core::models::FortuneRequest;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// A golden end-to-end calculation against [`FixtureCalendar`].
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub request: FortuneRequest,
    pub expected: ExpectedReport,
}

/// The parts of a report a scenario pins down. Branches are given by label.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedReport {
    pub lunar_birth_summary: String,
    pub age: i32,
    pub base_pillars: Vec<String>,
    pub hierarchy: Vec<String>,
    pub target_display: String,
    pub axis_len: usize,
    pub target_index: Option<usize>,
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Load every scenario under `data/scenarios`.
pub fn load_scenarios() -> Vec<Scenario> {
    list_fixtures("scenarios")
        .into_iter()
        .map(|path| {
            let file = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            load_fixture(&format!("scenarios/{file}"))
        })
        .collect()
}
