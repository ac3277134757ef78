//! Geogate Core - Core types for the Geogate targeting engine
//!
//! This crate provides the fundamental types used across the Geogate
//! workspace:
//! - Value types for runtime data
//! - Condition data model (conditions, combinators, condition sets)
//! - Location record wrapper and raw block attributes
//! - Attribute-value normalization helpers
//! - Error types

pub mod attributes;
pub mod condition;
pub mod error;
pub mod normalize;
pub mod record;
pub mod types;

// Re-export commonly used types
pub use attributes::RawAttributes;
pub use condition::{Combinator, Condition, ConditionSet};
pub use error::CoreError;
pub use record::LocationRecord;
pub use types::Value;
