//! Record sources for the CLI.
//!
//! The browsing loop is agnostic about where records come from; the CLI
//! feeds it from a JSON file — an array of flat objects, one per record.
//! Scalar values are stringified for display, null becomes the empty
//! string, and nested values are rejected.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::types::Record;

/// Errors loading records from a source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of objects")]
    NotAnArray,

    #[error("record {index} is not an object")]
    NotAnObject { index: usize },

    #[error("record {index}, field {field:?}: nested values are not displayable")]
    NestedValue { index: usize, field: String },
}

/// Parse records from a JSON string.
pub fn records_from_json(json: &str) -> Result<Vec<Record>, LoadError> {
    let value: Value = serde_json::from_str(json)?;

    let items = value.as_array().ok_or(LoadError::NotAnArray)?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let object = item
            .as_object()
            .ok_or(LoadError::NotAnObject { index })?;

        let mut record = Record::new();
        for (field, value) in object {
            record.set(field, display_value(value, index, field)?);
        }
        records.push(record);
    }

    Ok(records)
}

/// Read and parse records from a JSON file.
pub fn records_from_file(path: &Path) -> Result<Vec<Record>, LoadError> {
    let json = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    records_from_json(&json)
}

/// Stringify one scalar for display.
fn display_value(value: &Value, index: usize, field: &str) -> Result<String, LoadError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(LoadError::NestedValue {
            index,
            field: field.to_string(),
        }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
