//! Golden-scenario loader for the taste engine test suites.
//!
//! Fixtures live under `golden/` in this crate and are shared by every crate
//! in the workspace through `[dev-dependencies]`.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the golden fixtures.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
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

/// Load a fixture file as raw JSON.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by file name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Load every JSON fixture in a subdirectory, paired with its file stem.
pub fn load_all<T: DeserializeOwned>(subdir: &str) -> Vec<(String, T)> {
    list_fixtures(subdir)
        .into_iter()
        .map(|path| {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let relative = format!("{subdir}/{stem}.json");
            (stem, load_fixture(&relative))
        })
        .collect()
}
