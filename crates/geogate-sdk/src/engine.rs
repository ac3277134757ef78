//! TargetingEngine - Main API for show/hide decisions

use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use crate::resolver::{LocationResolver, ResolveOptions};
use geogate_core::attributes::non_empty;
use geogate_core::{LocationRecord, RawAttributes};
use geogate_parser::{ConditionParser, QueryOptions};
use geogate_runtime::{evaluate, query_property, ConditionSetHook, RecordHook};
use std::sync::Arc;

/// High-level gating engine.
///
/// Holds the resolver collaborator and the registered extension hooks;
/// each decision is otherwise stateless, so one engine can serve
/// unrelated requests concurrently.
pub struct TargetingEngine {
    config: EngineConfig,
    resolver: Arc<dyn LocationResolver>,
    condition_set_hooks: Vec<Arc<dyn ConditionSetHook>>,
    record_hooks: Vec<Arc<dyn RecordHook>>,
}

impl TargetingEngine {
    /// Start building an engine
    pub fn builder() -> crate::builder::TargetingEngineBuilder {
        crate::builder::TargetingEngineBuilder::new()
    }

    pub(crate) fn from_parts(
        config: EngineConfig,
        resolver: Arc<dyn LocationResolver>,
        condition_set_hooks: Vec<Arc<dyn ConditionSetHook>>,
        record_hooks: Vec<Arc<dyn RecordHook>>,
    ) -> Self {
        Self {
            config,
            resolver,
            condition_set_hooks,
            record_hooks,
        }
    }

    /// Should the content of a "show if" block be rendered?
    pub fn show_if(&self, attrs: &RawAttributes) -> Result<bool> {
        self.decide(attrs, false)
    }

    /// Should the content of a "hide if" block be rendered?
    ///
    /// For every record, this is the exact logical complement of
    /// [`show_if`](Self::show_if) over the same attributes.
    pub fn hide_if(&self, attrs: &RawAttributes) -> Result<bool> {
        self.decide(attrs, true)
    }

    fn decide(&self, attrs: &RawAttributes, hide_mode: bool) -> Result<bool> {
        let options = QueryOptions::from_attributes(attrs);
        let record = self.resolve(attrs, &options)?;
        Ok(self.evaluate_with_record(attrs, hide_mode, record))
    }

    /// Evaluate a block against a caller-supplied record, bypassing the
    /// resolver. Extension hooks still apply.
    pub fn evaluate_with_record(
        &self,
        attrs: &RawAttributes,
        hide_mode: bool,
        record: LocationRecord,
    ) -> bool {
        let show_if = !hide_mode;

        let mut set = ConditionParser::parse(attrs, hide_mode);
        for hook in &self.condition_set_hooks {
            set = hook.rewrite(set, attrs, show_if);
        }

        let mut record = record;
        for hook in &self.record_hooks {
            record = hook.rewrite(record, attrs, show_if);
        }

        let verdict = evaluate(&set, &record);
        tracing::debug!(
            conditions = set.len(),
            combinator = ?set.combinator,
            inverted = set.invert_final_result,
            verdict,
            "evaluated content block"
        );
        verdict
    }

    /// Render one record property as a display string.
    ///
    /// Reads `property`, `lang`, `skip_cache` and `default` from the
    /// attributes; fails only when `property` is absent or the resolver
    /// fails, everything else falls back to the default value.
    pub fn query_property(&self, attrs: &RawAttributes) -> Result<String> {
        let options = QueryOptions::from_attributes(attrs);
        let path = options
            .property
            .clone()
            .ok_or(SdkError::MissingProperty)?;

        let record = self.resolve(attrs, &options)?;
        Ok(query_property(&record, &path, &options.default))
    }

    /// Ask the collaborator for the visitor's record.
    ///
    /// A block-level `lang` attribute overrides the engine's configured
    /// language preference.
    fn resolve(&self, attrs: &RawAttributes, options: &QueryOptions) -> Result<LocationRecord> {
        let languages = if non_empty(attrs, "lang").is_some() {
            &options.languages
        } else {
            &self.config.languages
        };

        let record = self.resolver.resolve(
            languages,
            &ResolveOptions {
                skip_cache: options.skip_cache,
            },
        )?;
        Ok(record)
    }
}
