//! Request and rates-file loading.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

/// Read a JSON document from `path`, or from stdin when `path` is `None`
/// or `-`.
pub fn read_json(path: Option<&Path>) -> Result<Value> {
    let (text, source) = match path {
        Some(p) if p != Path::new("-") => {
            let text = fs::read_to_string(p)
                .with_context(|| format!("failed to read {}", p.display()))?;
            (text, p.display().to_string())
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read request from stdin")?;
            (text, "<stdin>".to_string())
        }
    };
    debug!(source = %source, bytes = text.len(), "loaded JSON document");
    serde_json::from_str(&text).with_context(|| format!("{source} is not valid JSON"))
}
