//! Geogate SDK - High-level API for geo-targeted content gating
//!
//! Wires the attribute parser, the extension hooks, the location resolver
//! collaborator and the condition evaluator into one engine:
//!
//! ```rust
//! use geogate_sdk::{LocationRecord, RawAttributes, StaticResolver, TargetingEngine};
//!
//! let record = LocationRecord::from_json(serde_json::json!({
//!     "country": {"name": "United States", "isoCode": "US"}
//! }));
//! let engine = TargetingEngine::builder()
//!     .with_resolver(StaticResolver::new(record))
//!     .build()
//!     .unwrap();
//!
//! let mut attrs = RawAttributes::new();
//! attrs.insert("country".to_string(), "US".to_string());
//! assert!(engine.show_if(&attrs).unwrap());
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod resolver;

// Re-export main types
pub use builder::TargetingEngineBuilder;
pub use config::EngineConfig;
pub use engine::TargetingEngine;
pub use error::{Result, SdkError};
pub use resolver::{LocationResolver, ResolveError, ResolveOptions, StaticResolver};

// Re-export commonly used types from dependencies
pub use geogate_core::{Combinator, Condition, ConditionSet, LocationRecord, RawAttributes, Value};
pub use geogate_parser::{ConditionParser, QueryOptions};
pub use geogate_runtime::{ConditionSetHook, RecordHook};
