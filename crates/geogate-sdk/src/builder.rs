//! Builder pattern for TargetingEngine

use crate::config::EngineConfig;
use crate::engine::TargetingEngine;
use crate::error::{Result, SdkError};
use crate::resolver::LocationResolver;
use geogate_runtime::{ConditionSetHook, RecordHook};
use std::sync::Arc;

/// Builder for [`TargetingEngine`]
///
/// # Example
///
/// ```rust,ignore
/// let engine = TargetingEngine::builder()
///     .with_resolver(my_resolver)
///     .with_config(EngineConfig::new().with_languages(vec!["de".to_string()]))
///     .add_condition_set_hook(my_hook)
///     .build()?;
/// ```
pub struct TargetingEngineBuilder {
    config: EngineConfig,
    resolver: Option<Arc<dyn LocationResolver>>,
    condition_set_hooks: Vec<Arc<dyn ConditionSetHook>>,
    record_hooks: Vec<Arc<dyn RecordHook>>,
}

impl TargetingEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            resolver: None,
            condition_set_hooks: Vec::new(),
            record_hooks: Vec::new(),
        }
    }

    /// Set the engine configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the location resolver collaborator (required)
    pub fn with_resolver(mut self, resolver: impl LocationResolver + 'static) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// Register a condition-set rewrite hook.
    ///
    /// Hooks run in registration order, each receiving the previous one's
    /// output.
    pub fn add_condition_set_hook(mut self, hook: impl ConditionSetHook + 'static) -> Self {
        self.condition_set_hooks.push(Arc::new(hook));
        self
    }

    /// Register a record substitution hook, applied after the condition
    /// set hooks, in registration order
    pub fn add_record_hook(mut self, hook: impl RecordHook + 'static) -> Self {
        self.record_hooks.push(Arc::new(hook));
        self
    }

    /// Build the engine. Fails if no resolver was supplied.
    pub fn build(self) -> Result<TargetingEngine> {
        let resolver = self.resolver.ok_or_else(|| {
            SdkError::ConfigError("a location resolver is required".to_string())
        })?;

        Ok(TargetingEngine::from_parts(
            self.config,
            resolver,
            self.condition_set_hooks,
            self.record_hooks,
        ))
    }
}

impl Default for TargetingEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
