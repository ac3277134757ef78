//! Condition parser
//!
//! Converts block attributes into a [`ConditionSet`]. Each fixed dimension
//! (continent, country, most-specific subdivision, city) contributes at
//! most one condition, from either its positive or its `not_`-prefixed
//! attribute. A generic `property` / `property_value` pair adds one
//! further condition for arbitrary record paths.

use geogate_core::attributes::{non_empty, RawAttributes};
use geogate_core::{Combinator, Condition, ConditionSet};

/// One fixed location dimension and the attribute keys addressing it
struct Dimension {
    /// Canonical record property the conditions compare against
    property: &'static str,
    /// Attribute keys selecting the positive form, in priority order
    positive_keys: &'static [&'static str],
    /// Attribute keys selecting the negated form, in priority order
    negated_keys: &'static [&'static str],
}

/// Fixed dimension vocabulary, iterated in this order.
///
/// `most_specific_subdivision`, `region` and `state` are aliases for the
/// same dimension.
const DIMENSIONS: [Dimension; 4] = [
    Dimension {
        property: "continent",
        positive_keys: &["continent"],
        negated_keys: &["not_continent"],
    },
    Dimension {
        property: "country",
        positive_keys: &["country"],
        negated_keys: &["not_country"],
    },
    Dimension {
        property: "mostSpecificSubdivision",
        positive_keys: &["most_specific_subdivision", "region", "state"],
        negated_keys: &["not_most_specific_subdivision", "not_region", "not_state"],
    },
    Dimension {
        property: "city",
        positive_keys: &["city"],
        negated_keys: &["not_city"],
    },
];

/// Attribute parser producing condition sets
///
/// Parsing never fails: absent or malformed attributes simply do not
/// produce conditions.
pub struct ConditionParser;

impl ConditionParser {
    /// Parse block attributes into a condition set.
    ///
    /// `hide_mode` is true when the block was declared as "hide if"; it
    /// sets the final-result inversion flag so the same conditions yield
    /// the complementary verdict.
    pub fn parse(attrs: &RawAttributes, hide_mode: bool) -> ConditionSet {
        let combinator =
            Combinator::from_operator_attr(attrs.get("operator").map(String::as_str));
        let mut set = ConditionSet::new(combinator, hide_mode);

        for dimension in &DIMENSIONS {
            if let Some(condition) = Self::parse_dimension(attrs, dimension) {
                set.push(condition);
            }
        }

        if let Some(condition) = Self::parse_custom_property(attrs) {
            set.push(condition);
        }

        set
    }

    /// Parse one fixed dimension.
    ///
    /// The first present, non-empty key in priority order (positive keys,
    /// then negated keys) wins. Supplying more than one key for the same
    /// dimension is unspecified input; the rest are dropped with a
    /// warning.
    fn parse_dimension(attrs: &RawAttributes, dimension: &Dimension) -> Option<Condition> {
        let keys = dimension
            .positive_keys
            .iter()
            .map(|key| (*key, false))
            .chain(dimension.negated_keys.iter().map(|key| (*key, true)));

        let mut winner: Option<(&str, Condition)> = None;
        for (key, negate) in keys {
            if let Some(raw) = non_empty(attrs, key) {
                match &winner {
                    None => {
                        winner = Some((key, Condition::new(dimension.property, raw, negate)));
                    }
                    Some((winning_key, _)) => {
                        tracing::warn!(
                            dimension = dimension.property,
                            used = *winning_key,
                            dropped = key,
                            "conflicting attributes for one dimension, dropping the later key"
                        );
                    }
                }
            }
        }

        winner.map(|(_, condition)| condition)
    }

    /// Parse the generic `property` escape hatch.
    ///
    /// Requires both `property` and one of `property_value` /
    /// `not_property_value`; `property_value` takes precedence. A bare
    /// `property` attribute yields nothing.
    fn parse_custom_property(attrs: &RawAttributes) -> Option<Condition> {
        let property = non_empty(attrs, "property")?;

        if let Some(raw) = non_empty(attrs, "property_value") {
            return Some(Condition::new(property, raw, false));
        }
        if let Some(raw) = non_empty(attrs, "not_property_value") {
            return Some(Condition::new(property, raw, true));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs_from(pairs: &[(&str, &str)]) -> RawAttributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_empty_attributes() {
        let set = ConditionParser::parse(&RawAttributes::new(), false);

        assert_eq!(set.combinator, Combinator::And);
        assert!(set.is_empty());
        assert!(!set.invert_final_result);
    }

    #[test]
    fn test_parse_single_country() {
        let attrs = attrs_from(&[("country", "US")]);
        let set = ConditionParser::parse(&attrs, false);

        assert_eq!(set.len(), 1);
        assert_eq!(set.conditions[0].property, "country");
        assert_eq!(set.conditions[0].expected_values, vec!["us"]);
        assert!(!set.conditions[0].negate);
    }

    #[test]
    fn test_parse_negated_dimension() {
        let attrs = attrs_from(&[("not_city", "Houston")]);
        let set = ConditionParser::parse(&attrs, false);

        assert_eq!(set.len(), 1);
        assert_eq!(set.conditions[0].property, "city");
        assert_eq!(set.conditions[0].expected_values, vec!["houston"]);
        assert!(set.conditions[0].negate);
    }

    #[test]
    fn test_parse_subdivision_aliases() {
        for alias in ["most_specific_subdivision", "region", "state"] {
            let attrs = attrs_from(&[(alias, "TX")]);
            let set = ConditionParser::parse(&attrs, false);

            assert_eq!(set.len(), 1, "alias {alias} should produce one condition");
            assert_eq!(set.conditions[0].property, "mostSpecificSubdivision");
        }
    }

    #[test]
    fn test_parse_multi_value_attribute() {
        let attrs = attrs_from(&[("state", "TX, LA")]);
        let set = ConditionParser::parse(&attrs, false);

        assert_eq!(set.conditions[0].expected_values, vec!["tx", "la"]);
    }

    #[test]
    fn test_parse_preserves_dimension_order() {
        let attrs = attrs_from(&[
            ("city", "Dallas"),
            ("country", "US"),
            ("continent", "North America"),
        ]);
        let set = ConditionParser::parse(&attrs, false);

        let properties: Vec<&str> = set
            .conditions
            .iter()
            .map(|c| c.property.as_str())
            .collect();
        assert_eq!(properties, vec!["continent", "country", "city"]);
    }

    #[test]
    fn test_parse_custom_property() {
        let attrs = attrs_from(&[
            ("property", "location.timeZone"),
            ("property_value", "Europe/Berlin"),
        ]);
        let set = ConditionParser::parse(&attrs, false);

        assert_eq!(set.len(), 1);
        assert_eq!(set.conditions[0].property, "location.timeZone");
        assert_eq!(set.conditions[0].expected_values, vec!["europe/berlin"]);
        assert!(!set.conditions[0].negate);
    }

    #[test]
    fn test_parse_custom_property_negated() {
        let attrs = attrs_from(&[
            ("property", "country.isInEuropeanUnion"),
            ("not_property_value", "true"),
        ]);
        let set = ConditionParser::parse(&attrs, false);

        assert_eq!(set.len(), 1);
        assert!(set.conditions[0].negate);
    }

    #[test]
    fn test_parse_custom_property_without_value_yields_nothing() {
        let attrs = attrs_from(&[("property", "location.timeZone")]);
        let set = ConditionParser::parse(&attrs, false);

        assert!(set.is_empty());
    }

    #[test]
    fn test_parse_custom_property_comes_last() {
        let attrs = attrs_from(&[
            ("property", "traits.ispName"),
            ("property_value", "ExampleNet"),
            ("country", "US"),
        ]);
        let set = ConditionParser::parse(&attrs, false);

        assert_eq!(set.len(), 2);
        assert_eq!(set.conditions[0].property, "country");
        assert_eq!(set.conditions[1].property, "traits.ispName");
    }

    #[test]
    fn test_parse_operator_or() {
        let attrs = attrs_from(&[("operator", "or"), ("city", "Berlin")]);
        let set = ConditionParser::parse(&attrs, false);
        assert_eq!(set.combinator, Combinator::Or);

        let attrs = attrs_from(&[("operator", "OR"), ("city", "Berlin")]);
        let set = ConditionParser::parse(&attrs, false);
        assert_eq!(set.combinator, Combinator::Or);
    }

    #[test]
    fn test_parse_operator_anything_else_is_and() {
        for operator in ["and", "xor", ""] {
            let attrs = attrs_from(&[("operator", operator), ("city", "Berlin")]);
            let set = ConditionParser::parse(&attrs, false);
            assert_eq!(set.combinator, Combinator::And);
        }
    }

    #[test]
    fn test_parse_hide_mode_sets_inversion() {
        let attrs = attrs_from(&[("country", "US")]);

        let show = ConditionParser::parse(&attrs, false);
        assert!(!show.invert_final_result);

        let hide = ConditionParser::parse(&attrs, true);
        assert!(hide.invert_final_result);
    }

    #[test]
    fn test_parse_empty_attribute_produces_no_condition() {
        let attrs = attrs_from(&[("country", ""), ("city", "Berlin")]);
        let set = ConditionParser::parse(&attrs, false);

        assert_eq!(set.len(), 1);
        assert_eq!(set.conditions[0].property, "city");
    }

    #[test]
    fn test_conflicting_forms_positive_wins() {
        let attrs = attrs_from(&[("country", "US"), ("not_country", "FR")]);
        let set = ConditionParser::parse(&attrs, false);

        assert_eq!(set.len(), 1);
        assert_eq!(set.conditions[0].expected_values, vec!["us"]);
        assert!(!set.conditions[0].negate);
    }

    #[test]
    fn test_conflicting_aliases_first_in_priority_order_wins() {
        let attrs = attrs_from(&[("region", "TX"), ("state", "LA")]);
        let set = ConditionParser::parse(&attrs, false);

        assert_eq!(set.len(), 1);
        assert_eq!(set.conditions[0].expected_values, vec!["tx"]);
    }
}
