//! Config file parsing and top-level shape validation

use anyhow::{Context, Result};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::merge::merge_into;

/// A YAML document whose top-level shape cannot be merged.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid config shape in {path}: top-level YAML value must be a mapping, got {found}")]
    InvalidShape { path: String, found: &'static str },
}

/// Load every file in `files`, in order, into one merged mapping.
pub fn load_merged(files: &[PathBuf]) -> Result<Mapping> {
    let mut merged = Mapping::new();
    for file in files {
        if let Some(document) = load_document(file)? {
            merge_into(&mut merged, document);
        }
    }
    Ok(merged)
}

/// Parse a single YAML file into its top-level mapping.
///
/// Returns `Ok(None)` for an empty or null document, which merges nothing.
/// A scalar or sequence at the top level is a shape error.
pub fn load_document(path: &Path) -> Result<Option<Mapping>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading config file: {}", path.display()))?;

    if content.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_yaml::from_str(&content)
        .with_context(|| format!("Invalid YAML syntax: {}", path.display()))?;

    match value {
        Value::Mapping(mapping) => Ok(Some(mapping)),
        Value::Null => Ok(None),
        other => Err(LoadError::InvalidShape {
            path: path.display().to_string(),
            found: shape_name(&other),
        }
        .into()),
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
