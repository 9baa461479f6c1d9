//! Scenario fixtures shared by the tests of every crate in the workspace.
//!
//! Each scenario is a JSON file under `scenarios/` holding an input mapping
//! and the expectations hand-derived for it.

use std::path::PathBuf;

use complexity_core::CountryProducts;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Directory holding the scenario JSON files.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios")
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

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// One input mapping plus what the pipeline must produce for it.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub description: String,
    pub countries: CountryProducts,
    pub expected: Expected,
}

/// Hand-derived expectations. Absent fields are not checked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Expected {
    /// Error code the pipeline must fail with, if any.
    pub error: Option<String>,
    pub country_labels: Vec<String>,
    pub product_labels: Vec<String>,
    /// Row-major incidence matrix.
    pub incidence: Vec<Vec<f64>>,
    pub diversity: Vec<f64>,
    pub ubiquity: Vec<f64>,
    /// Second-largest eigenvalue of the country space.
    pub country_second_eigenvalue: Option<f64>,
    /// ECI up to sign.
    pub eci_up_to_sign: Vec<f64>,
    /// PCI up to sign.
    pub pci_up_to_sign: Vec<f64>,
}

/// Load `scenarios/<name>.json`.
pub fn scenario(name: &str) -> Scenario {
    load_fixture(&format!("{name}.json"))
}

/// Names of every scenario file, sorted.
pub fn scenario_names() -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(fixtures_root())
        .unwrap_or_else(|e| panic!("Failed to read scenarios directory: {e}"))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                path.file_stem().map(|s| s.to_string_lossy().into_owned())
            } else {
                None
            }
        })
        .collect();
    names.sort();
    names
}

/// Assert two vectors are equal up to a global sign flip.
///
/// # Panics
/// Panics when neither `actual` nor `-actual` is within `tol` of `expected`.
pub fn assert_close_up_to_sign(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    let same = actual.iter().zip(expected).all(|(a, e)| (a - e).abs() <= tol);
    let flipped = actual.iter().zip(expected).all(|(a, e)| (a + e).abs() <= tol);
    assert!(
        same || flipped,
        "vectors differ beyond sign: actual {actual:?}, expected {expected:?}"
    );
}
