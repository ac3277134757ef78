//! Lookup and query options
//!
//! Blocks can carry a few non-condition attributes steering the lookup
//! (`lang`, `skip_cache`) and the property query (`property`, `default`).

use geogate_core::attributes::{non_empty, RawAttributes};
use geogate_core::normalize::parse_bool_attr;
use serde::{Deserialize, Serialize};

/// Options read from a block's non-condition attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Language preference list for localized names, most preferred
    /// first. Always ends with `"en"`.
    pub languages: Vec<String>,

    /// Bypass the collaborator's page-level lookup cache
    pub skip_cache: bool,

    /// Fallback display value for property queries
    pub default: String,

    /// Property path for property queries
    pub property: Option<String>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string()],
            skip_cache: false,
            default: String::new(),
            property: None,
        }
    }
}

impl QueryOptions {
    /// Read options from block attributes. Absent keys produce defaults.
    pub fn from_attributes(attrs: &RawAttributes) -> Self {
        let mut languages: Vec<String> = match non_empty(attrs, "lang") {
            Some(raw) => raw
                .split(',')
                .map(|segment| segment.trim().to_string())
                .filter(|segment| !segment.is_empty())
                .collect(),
            None => Vec::new(),
        };
        if !languages.iter().any(|lang| lang == "en") {
            languages.push("en".to_string());
        }

        Self {
            languages,
            skip_cache: non_empty(attrs, "skip_cache").is_some_and(parse_bool_attr),
            default: attrs.get("default").cloned().unwrap_or_default(),
            property: non_empty(attrs, "property").map(str::to_string),
        }
    }
}
