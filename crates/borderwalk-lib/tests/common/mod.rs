//! Common test utilities and fixture helpers.
//!
//! Shared by the integration tests: the checked-in border fixture and a
//! helper for comparing paths.

use std::path::PathBuf;

use borderwalk_lib::{build_adjacency, load_countries, AdjacencyMap};

/// Path to the checked-in border dataset.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/borders.json")
}

/// Adjacency map built from the checked-in border dataset.
#[allow(dead_code)]
pub fn fixture_adjacency() -> AdjacencyMap {
    let records = load_countries(&fixture_path()).expect("fixture dataset loads");
    build_adjacency(records)
}

/// Convenience conversion for comparing paths.
#[allow(dead_code)]
pub fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
