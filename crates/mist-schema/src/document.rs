//! # Document Loader
//!
//! Parses content files into a generic document tree
//! ([`serde_json::Value`]) by file extension: `.json` and `.toml` are
//! supported, everything else is rejected. This layer is purely
//! syntactic; it knows nothing about schemas.

use std::path::Path;

use serde_json::Value;

use crate::error::DocumentError;

/// Whether the batch driver should consider this path a content file.
///
/// Extension matching is case-insensitive; `.JSON` and `.Toml` qualify.
pub fn is_data_file(path: &Path) -> bool {
    matches!(extension_lowercase(path).as_deref(), Some("json" | "toml"))
}

/// Load a content file into a generic document.
///
/// Dispatch is purely by case-insensitive extension: `.json` parses as
/// JSON, `.toml` parses as TOML and is converted losslessly into the same
/// document tree (TOML datetimes become RFC 3339 strings).
///
/// # Errors
///
/// - [`DocumentError::UnsupportedFileType`] for any other extension.
/// - [`DocumentError::Read`] when the file cannot be read.
/// - [`DocumentError::Parse`] for malformed syntax, carrying the parser's
///   own message and the offending path.
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let format = match extension_lowercase(path).as_deref() {
        Some("json") => "JSON",
        Some("toml") => "TOML",
        _ => {
            return Err(DocumentError::UnsupportedFileType {
                path: path.display().to_string(),
            })
        }
    };

    let raw = std::fs::read_to_string(path).map_err(|e| DocumentError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    match format {
        "JSON" => serde_json::from_str(&raw).map_err(|e| DocumentError::Parse {
            path: path.display().to_string(),
            format,
            reason: e.to_string(),
        }),
        _ => {
            let value: toml::Value = toml::from_str(&raw).map_err(|e| DocumentError::Parse {
                path: path.display().to_string(),
                format,
                reason: e.to_string(),
            })?;
            toml_to_json_value(&value).map_err(|reason| DocumentError::Parse {
                path: path.display().to_string(),
                format,
                reason,
            })
        }
    }
}

fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Convert a `toml::Value` into the generic document tree.
///
/// TOML has a richer scalar set than JSON; datetimes are rendered as
/// RFC 3339 strings and non-finite floats are rejected because they have
/// no JSON representation.
fn toml_to_json_value(value: &toml::Value) -> Result<Value, String> {
    match value {
        toml::Value::String(s) => Ok(Value::String(s.clone())),
        toml::Value::Integer(i) => Ok(Value::Number(serde_json::Number::from(*i))),
        toml::Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .ok_or_else(|| format!("cannot represent float {f} in JSON")),
        toml::Value::Boolean(b) => Ok(Value::Bool(*b)),
        toml::Value::Datetime(dt) => Ok(Value::String(dt.to_string())),
        toml::Value::Array(items) => {
            let converted: Result<Vec<Value>, String> =
                items.iter().map(toml_to_json_value).collect();
            Ok(Value::Array(converted?))
        }
        toml::Value::Table(table) => {
            let mut map = serde_json::Map::new();
            for (k, v) in table {
                map.insert(k.clone(), toml_to_json_value(v)?);
            }
            Ok(Value::Object(map))
        }
    }
}
