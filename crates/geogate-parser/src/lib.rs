//! Geogate Parser - Attribute grammar parser for the Geogate targeting engine
//!
//! This crate converts the flat string attributes of a content block into
//! the structured [`geogate_core::ConditionSet`] the evaluator consumes,
//! and reads the per-block lookup/query options.
//!
//! Attribute vocabulary:
//!
//! | key | meaning |
//! |---|---|
//! | `continent`, `not_continent` | match/exclude continent |
//! | `country`, `not_country` | match/exclude country |
//! | `most_specific_subdivision` / `region` / `state` (and `not_` forms) | aliases for the subdivision dimension |
//! | `city`, `not_city` | match/exclude city |
//! | `property`, `property_value`, `not_property_value` | generic dot-path comparison |
//! | `operator` | `"or"` selects OR-combination, anything else AND |
//! | `lang`, `skip_cache`, `default` | lookup/query options |
//!
//! All match values may hold multiple alternatives separated by commas.
//! Parsing is permissive by design: malformed or absent attributes never
//! raise, they simply produce no condition.

pub mod condition_parser;
pub mod options;

// Re-export main parser types
pub use condition_parser::ConditionParser;
pub use geogate_core::attributes::{non_empty, RawAttributes};
pub use options::QueryOptions;
