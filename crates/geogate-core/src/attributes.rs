//! Raw block attributes
//!
//! Attributes arrive as a flat string-to-string mapping supplied by the
//! template caller, read once per invocation. An empty-string value is
//! equivalent to an absent key; neither ever produces a condition.

use std::collections::HashMap;

/// Flat attribute mapping for one content block
pub type RawAttributes = HashMap<String, String>;

/// Look up an attribute that is present AND non-empty
pub fn non_empty<'a>(attrs: &'a RawAttributes, key: &str) -> Option<&'a str> {
    attrs
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}
