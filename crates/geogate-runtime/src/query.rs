//! Single-property display queries
//!
//! Renders one record property as a display string with a default
//! fallback, for template output like "show the visitor's country name".

use crate::lookup::lookup_path;
use geogate_core::{LocationRecord, Value};

/// Resolve a property path to a display string.
///
/// Place-like objects render as their `name`. Other objects and arrays
/// have no display form and fall back to `default`, as do unresolvable
/// paths and empty strings.
pub fn query_property(record: &LocationRecord, path: &str, default: &str) -> String {
    let resolved = match lookup_path(record.root(), path) {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(property = %path, %error, "property query fell back to default");
            return default.to_string();
        }
    };

    let display = match resolved {
        Value::Object(map) => map.get("name").and_then(Value::to_display_string),
        Value::Array(_) => None,
        scalar => scalar.to_display_string(),
    };

    match display {
        Some(text) if !text.is_empty() => text,
        _ => default.to_string(),
    }
}
