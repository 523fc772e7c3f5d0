use std::fmt::Display;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Largest integer magnitude a `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A normalized field value.
///
/// Numeric fields always hold `Null` or `Number`. `Number` may carry the NaN
/// sentinel produced by a failed coercion. String fields hold `Null`, `Text`
/// or, when the upstream sent something that is not a string, the raw JSON
/// value untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Number(f64),
    Text(String),
    Raw(Value),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Numeric view used by number-equality filters.
    ///
    /// Text is parsed after trimming; whitespace-only text is zero. Anything
    /// that cannot be read as a number is NaN. Null has no numeric view.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Null => None,
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => Some(Self::parse_number(s)),
            FieldValue::Raw(v) => Some(Self::coerce_number(v)),
        }
    }

    /// String view used by string-equality and date-prefix filters.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::Text(s) => Some(s.clone()),
            _ => Some(self.to_string()),
        }
    }

    /// Coerce an arbitrary JSON value to a number.
    pub fn coerce_number(value: &Value) -> f64 {
        match value {
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => Self::parse_number(s),
            Value::Bool(true) => 1.0,
            Value::Bool(false) => 0.0,
            _ => f64::NAN,
        }
    }

    /// Parse decimal text; whitespace-only is zero, garbage is NaN.
    pub fn parse_number(text: &str) -> f64 {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return 0.0;
        }
        // Rust accepts "inf"/"nan" spellings that are not numbers on the wire.
        if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
            return f64::NAN;
        }
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    }

    fn fmt_number(n: f64, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if n.is_nan() {
            write!(f, "NaN")
        } else if n.is_infinite() {
            write!(f, "{}Infinity", if n < 0.0 { "-" } else { "" })
        } else if n == 0.0 {
            write!(f, "0")
        } else {
            write!(f, "{}", n)
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Number(n) => Self::fmt_number(*n, f),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Raw(Value::String(s)) => write!(f, "{}", s),
            FieldValue::Raw(v) => write!(f, "{}", v),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_none(),
            FieldValue::Number(n) if !n.is_finite() => serializer.serialize_none(),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Raw(v) => v.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_number_from_json_shapes() {
        assert_eq!(FieldValue::coerce_number(&json!(12)), 12.0);
        assert_eq!(FieldValue::coerce_number(&json!("12.5")), 12.5);
        assert_eq!(FieldValue::coerce_number(&json!(" 7 ")), 7.0);
        assert_eq!(FieldValue::coerce_number(&json!("   ")), 0.0);
        assert_eq!(FieldValue::coerce_number(&json!(true)), 1.0);
        assert!(FieldValue::coerce_number(&json!("abc")).is_nan());
        assert!(FieldValue::coerce_number(&json!("inf")).is_nan());
        assert!(FieldValue::coerce_number(&json!([1])).is_nan());
        assert_eq!(FieldValue::coerce_number(&json!("1e3")), 1000.0);
    }

    #[test]
    fn test_text_view_of_numbers_has_no_trailing_fraction() {
        assert_eq!(FieldValue::Number(42.0).as_text().unwrap(), "42");
        assert_eq!(FieldValue::Number(-0.0).as_text().unwrap(), "0");
        assert_eq!(FieldValue::Number(2.5).as_text().unwrap(), "2.5");
        assert_eq!(FieldValue::Number(f64::NAN).as_text().unwrap(), "NaN");
        assert_eq!(FieldValue::Raw(json!(true)).as_text().unwrap(), "true");
        assert!(FieldValue::Null.as_text().is_none());
    }

    #[test]
    fn test_serialize_follows_json_rules() {
        let values = vec![
            FieldValue::Number(42.0),
            FieldValue::Number(1.25),
            FieldValue::Number(f64::NAN),
            FieldValue::Null,
            FieldValue::Text("Airport".into()),
            FieldValue::Raw(json!(20250801)),
        ];
        let out = serde_json::to_value(&values).unwrap();
        assert_eq!(out, json!([42, 1.25, null, null, "Airport", 20250801]));
    }

    #[test]
    fn test_as_number() {
        assert_eq!(FieldValue::Text("3".into()).as_number(), Some(3.0));
        assert!(FieldValue::Null.as_number().is_none());
        assert!(FieldValue::Text("x".into()).as_number().unwrap().is_nan());
    }
}
