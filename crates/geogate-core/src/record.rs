//! Resolved location record
//!
//! A [`LocationRecord`] is the read-only result of a geolocation lookup,
//! exposed as a tree of named properties using the provider's camelCase
//! wire naming (`country.isoCode`, `mostSpecificSubdivision`,
//! `location.timeZone`, ...). Place-like nodes are objects carrying up to
//! four alternative representations: `name`, `isoCode`, `code` and
//! `geonameId`.

use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Resolved geolocation result for one visitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationRecord {
    root: Value,
}

impl LocationRecord {
    /// Wrap a value tree as a record
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// A record with no data (lookup found nothing for the IP)
    pub fn empty() -> Self {
        Self {
            root: Value::Object(HashMap::new()),
        }
    }

    /// Build a record from provider JSON
    pub fn from_json(json: serde_json::Value) -> Self {
        Self {
            root: Value::from(json),
        }
    }

    /// The underlying property tree
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Returns true if the record holds no properties at all
    pub fn is_empty(&self) -> bool {
        match &self.root {
            Value::Object(map) => map.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }
}

impl From<serde_json::Value> for LocationRecord {
    fn from(json: serde_json::Value) -> Self {
        Self::from_json(json)
    }
}
