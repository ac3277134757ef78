//! Runtime value types for location records
//!
//! The `Value` enum represents all possible values inside a resolved
//! location record, similar to JSON values but with additional type safety.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Runtime value type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value (f64 for simplicity, handles both int and float)
    Number(f64),
    /// String value
    String(String),
    /// Array of values
    Array(Vec<Value>),
    /// Object (key-value map)
    Object(HashMap<String, Value>),
}

impl Value {
    /// Returns true if this value is `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the string content, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the boolean content, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the object map, if this is an object value
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Render a scalar value as its comparison/display string.
    ///
    /// Numbers with no fractional part print without a decimal point, so a
    /// `geonameId` of `2950159` compares equal to the attribute text
    /// `"2950159"`. Arrays, objects and `Null` have no scalar form.
    pub fn to_display_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(format_number(*n)),
            Value::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_null() {
        let val = Value::Null;
        assert!(val.is_null());
        assert_eq!(val.to_display_string(), None);
    }

    #[test]
    fn test_value_string() {
        let val = Value::String("Berlin".to_string());
        assert_eq!(val.as_str(), Some("Berlin"));
        assert_eq!(val.to_display_string(), Some("Berlin".to_string()));
    }

    #[test]
    fn test_value_bool_display() {
        assert_eq!(
            Value::Bool(true).to_display_string(),
            Some("true".to_string())
        );
        assert_eq!(
            Value::Bool(false).to_display_string(),
            Some("false".to_string())
        );
    }

    #[test]
    fn test_integral_number_has_no_decimal_point() {
        let val = Value::Number(2950159.0);
        assert_eq!(val.to_display_string(), Some("2950159".to_string()));
    }

    #[test]
    fn test_fractional_number_keeps_fraction() {
        let val = Value::Number(52.52);
        assert_eq!(val.to_display_string(), Some("52.52".to_string()));
    }

    #[test]
    fn test_containers_have_no_display_string() {
        assert_eq!(Value::Array(vec![]).to_display_string(), None);
        assert_eq!(Value::Object(HashMap::new()).to_display_string(), None);
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({
            "country": {
                "isoCode": "DE",
                "geonameId": 2921044,
                "isInEuropeanUnion": true
            },
            "subdivisions": [{"isoCode": "BE"}]
        });

        let value = Value::from(json);
        let map = value.as_object().unwrap();
        let country = map.get("country").unwrap().as_object().unwrap();

        assert_eq!(
            country.get("isoCode"),
            Some(&Value::String("DE".to_string()))
        );
        assert_eq!(country.get("geonameId"), Some(&Value::Number(2921044.0)));
        assert_eq!(country.get("isInEuropeanUnion"), Some(&Value::Bool(true)));
        assert!(matches!(map.get("subdivisions"), Some(Value::Array(_))));
    }

    #[test]
    fn test_value_serde_roundtrip() {
        let mut map = HashMap::new();
        map.insert("isoCode".to_string(), Value::String("US".to_string()));
        map.insert("geonameId".to_string(), Value::Number(6252001.0));
        let val = Value::Object(map);

        let json = serde_json::to_string(&val).unwrap();
        let deserialized: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(val, deserialized);
    }
}
