//! Conformance harness: golden quote vectors and request contract.
//!
//! Invariant coverage:
//! - Golden scenarios: validated request → exact presented breakdown
//! - Invalid requests: exact `{ path, message }` issue lists
//! - Message registry: every emitted message uses a registered stem
//!
//! Vectors live in `tests/vectors/` and are parsed with serde_json.
//! Changing a default table value is expected to break the golden
//! scenarios; update the vectors in the same change.

mod golden_quotes;
mod invalid_requests;
mod message_registry;

use std::path::PathBuf;

pub fn vectors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("vectors")
}

pub fn load_vectors<T: serde::de::DeserializeOwned>(file: &str) -> T {
    let path = vectors_dir().join(file);
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("{file} parse failed: {e}"))
}
