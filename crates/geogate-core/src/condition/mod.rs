//! Condition data model for content gating

pub mod types;

pub use types::{Combinator, Condition, ConditionSet};
