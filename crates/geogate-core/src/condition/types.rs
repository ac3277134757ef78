//! Condition types for audience targeting
//!
//! A content block carries one [`ConditionSet`]: an ordered list of atomic
//! [`Condition`]s folded with a single [`Combinator`], plus a flag that
//! inverts the final verdict for "hide if" blocks.

use crate::error::CoreError;
use crate::normalize::normalize_value_list;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Logical combinator applied across a condition set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    /// All conditions must match (AND logic)
    #[default]
    And,
    /// At least one condition must match (OR logic)
    Or,
}

impl Combinator {
    /// The fold identity: `true` for And, `false` for Or.
    ///
    /// An empty condition set evaluates to this value before final
    /// inversion is applied.
    pub fn identity(&self) -> bool {
        matches!(self, Combinator::And)
    }

    /// Fold one condition result into the accumulator
    pub fn fold(&self, accumulator: bool, matched: bool) -> bool {
        match self {
            Combinator::And => accumulator && matched,
            Combinator::Or => accumulator || matched,
        }
    }

    /// Select the combinator from the raw `operator` attribute.
    ///
    /// Only a case-insensitive `"or"` selects Or; any other value (or an
    /// absent attribute) selects And.
    pub fn from_operator_attr(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("or") => Combinator::Or,
            _ => Combinator::And,
        }
    }
}

impl FromStr for Combinator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "and" => Ok(Combinator::And),
            "or" => Ok(Combinator::Or),
            other => Err(CoreError::InvalidCombinator(other.to_string())),
        }
    }
}

/// One atomic property comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Dot-path into the location record (e.g. `country` or
    /// `location.timeZone`)
    pub property: String,

    /// Lower-cased, trimmed alternatives; matching any one suffices.
    /// Never empty for a constructed condition.
    pub expected_values: Vec<String>,

    /// Invert this condition's match result
    #[serde(default)]
    pub negate: bool,
}

impl Condition {
    /// Build a condition from a raw comma-separated attribute value
    pub fn new(property: impl Into<String>, raw_values: &str, negate: bool) -> Self {
        Self {
            property: property.into(),
            expected_values: normalize_value_list(raw_values),
            negate,
        }
    }

    /// Build a condition from already-normalized values
    pub fn with_values(
        property: impl Into<String>,
        expected_values: Vec<String>,
        negate: bool,
    ) -> Self {
        Self {
            property: property.into(),
            expected_values,
            negate,
        }
    }
}

/// The full parsed rule for one content block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConditionSet {
    /// How condition results are folded together
    pub combinator: Combinator,

    /// Conditions in discovery order
    pub conditions: Vec<Condition>,

    /// Flip the folded verdict once at the end ("hide if" blocks)
    #[serde(default)]
    pub invert_final_result: bool,
}

impl ConditionSet {
    /// Create an empty set with the given combinator and inversion flag
    pub fn new(combinator: Combinator, invert_final_result: bool) -> Self {
        Self {
            combinator,
            conditions: Vec::new(),
            invert_final_result,
        }
    }

    /// Append a condition, preserving discovery order
    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// Returns true if the set holds no conditions
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Number of conditions in the set
    pub fn len(&self) -> usize {
        self.conditions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinator_identity() {
        assert!(Combinator::And.identity());
        assert!(!Combinator::Or.identity());
    }

    #[test]
    fn test_combinator_fold() {
        assert!(Combinator::And.fold(true, true));
        assert!(!Combinator::And.fold(true, false));
        assert!(Combinator::Or.fold(false, true));
        assert!(!Combinator::Or.fold(false, false));
    }

    #[test]
    fn test_combinator_from_operator_attr() {
        assert_eq!(Combinator::from_operator_attr(None), Combinator::And);
        assert_eq!(Combinator::from_operator_attr(Some("or")), Combinator::Or);
        assert_eq!(Combinator::from_operator_attr(Some("OR")), Combinator::Or);
        assert_eq!(Combinator::from_operator_attr(Some(" Or ")), Combinator::Or);
        assert_eq!(Combinator::from_operator_attr(Some("and")), Combinator::And);
        assert_eq!(Combinator::from_operator_attr(Some("xor")), Combinator::And);
        assert_eq!(Combinator::from_operator_attr(Some("")), Combinator::And);
    }

    #[test]
    fn test_combinator_from_str() {
        assert_eq!("and".parse::<Combinator>().unwrap(), Combinator::And);
        assert_eq!("OR".parse::<Combinator>().unwrap(), Combinator::Or);
        assert!("nand".parse::<Combinator>().is_err());
    }

    #[test]
    fn test_condition_normalizes_values() {
        let condition = Condition::new("mostSpecificSubdivision", "TX, LA", false);
        assert_eq!(condition.property, "mostSpecificSubdivision");
        assert_eq!(condition.expected_values, vec!["tx", "la"]);
        assert!(!condition.negate);
    }

    #[test]
    fn test_condition_set_push_preserves_order() {
        let mut set = ConditionSet::new(Combinator::And, false);
        set.push(Condition::new("country", "US", false));
        set.push(Condition::new("city", "Houston", true));

        assert_eq!(set.len(), 2);
        assert_eq!(set.conditions[0].property, "country");
        assert_eq!(set.conditions[1].property, "city");
        assert!(set.conditions[1].negate);
    }

    #[test]
    fn test_condition_set_serde_roundtrip() {
        let mut set = ConditionSet::new(Combinator::Or, true);
        set.push(Condition::new("continent", "Europe", false));

        let json = serde_json::to_string(&set).unwrap();
        let deserialized: ConditionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, deserialized);
    }
}
