//! Condition evaluation
//!
//! Computes the show/hide verdict for a parsed condition set against a
//! resolved location record. Pure function of its inputs; a property that
//! fails to resolve makes that one condition a non-match and never aborts
//! the siblings.

use crate::lookup::lookup_path;
use geogate_core::normalize::{FALSE_TOKENS, TRUE_TOKENS};
use geogate_core::{Condition, ConditionSet, LocationRecord, Value};

/// Scalar representations a place-like object node exposes, collected in
/// this order: full display name, standardized code, short code, numeric
/// identifier. Every one that exists participates in the comparison.
const ALTERNATIVE_REPRESENTATIONS: [&str; 4] = ["name", "isoCode", "code", "geonameId"];

/// Evaluate a condition set against a location record.
///
/// The accumulator starts at the combinator's identity (`true` for And,
/// `false` for Or), each condition's match result is folded in order, and
/// the final-result inversion flag is applied once at the end.
pub fn evaluate(set: &ConditionSet, record: &LocationRecord) -> bool {
    let mut accumulator = set.combinator.identity();

    for condition in &set.conditions {
        let matched = evaluate_condition(condition, record);
        accumulator = set.combinator.fold(accumulator, matched);
    }

    if set.invert_final_result {
        accumulator = !accumulator;
    }

    accumulator
}

/// Evaluate one condition, negation included
fn evaluate_condition(condition: &Condition, record: &LocationRecord) -> bool {
    let matched = match lookup_path(record.root(), &condition.property) {
        Ok(value) => {
            let actual = actual_values(value);
            values_intersect(&actual, &condition.expected_values)
        }
        Err(error) => {
            tracing::debug!(
                property = %condition.property,
                %error,
                "property did not resolve, condition treated as not matched"
            );
            false
        }
    };

    if condition.negate {
        !matched
    } else {
        matched
    }
}

/// Expand a resolved value into the list of scalar strings it may match as.
///
/// Objects contribute every alternative representation they carry; plain
/// booleans expand to the canonical truthy/falsy token lists so a single
/// `property_value="true"` matches any boolean-truthy spelling; other
/// scalars are a single-element list. Arrays and representation-free
/// objects expand to nothing and can never match.
fn actual_values(value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => ALTERNATIVE_REPRESENTATIONS
            .iter()
            .filter_map(|key| map.get(*key))
            .filter_map(Value::to_display_string)
            .collect(),
        Value::Bool(true) => TRUE_TOKENS.iter().map(|t| t.to_string()).collect(),
        Value::Bool(false) => FALSE_TOKENS.iter().map(|t| t.to_string()).collect(),
        Value::Null | Value::Array(_) => Vec::new(),
        scalar => scalar.to_display_string().into_iter().collect(),
    }
}

/// Case-insensitive set intersection: any actual value equal to any
/// expected value is a match. Expected values are already lower-cased by
/// the parser.
fn values_intersect(actual: &[String], expected: &[String]) -> bool {
    actual.iter().any(|actual_value| {
        let actual_value = actual_value.to_lowercase();
        expected.iter().any(|expected_value| *expected_value == actual_value)
    })
}
