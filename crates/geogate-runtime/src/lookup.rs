//! Property path lookup
//!
//! Navigates a location record's value tree using dot-notation paths.
//! A path segment that parses as a small non-negative integer indexes an
//! array-valued property, so `subdivisions.0.isoCode` addresses the first
//! subdivision. "Not found" is a typed error, never a panic; the evaluator
//! downgrades it to a non-match.

use crate::error::{Result, RuntimeError};
use geogate_core::Value;

/// Resolve a dot-path against a value tree.
///
/// Fails with [`RuntimeError::PropertyNotFound`] for missing keys,
/// out-of-range indices and `Null` leaves, and with
/// [`RuntimeError::TypeError`] when the path tries to descend into a
/// scalar.
pub fn lookup_path<'a>(root: &'a Value, path: &str) -> Result<&'a Value> {
    let mut current = root;

    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment).ok_or_else(|| {
                RuntimeError::PropertyNotFound(path.to_string())
            })?,
            Value::Array(items) => {
                let index: usize = segment.parse().map_err(|_| {
                    RuntimeError::PropertyNotFound(path.to_string())
                })?;
                items
                    .get(index)
                    .ok_or_else(|| RuntimeError::PropertyNotFound(path.to_string()))?
            }
            _ => {
                return Err(RuntimeError::TypeError(format!(
                    "cannot access '{segment}' of '{path}' on a scalar value"
                )))
            }
        };
    }

    // A Null leaf carries no information a condition could match on.
    if current.is_null() {
        return Err(RuntimeError::PropertyNotFound(path.to_string()));
    }

    Ok(current)
}
