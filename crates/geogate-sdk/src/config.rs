//! Engine configuration

use serde::{Deserialize, Serialize};

/// Configuration for the targeting engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Display-language preference used when a block carries no `lang`
    /// attribute of its own, most preferred first
    pub languages: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string()],
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the default language preference
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the site-level language preference, keeping the `en` fallback
    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        if !self.languages.iter().any(|lang| lang == "en") {
            self.languages.push("en".to_string());
        }
        self
    }
}
