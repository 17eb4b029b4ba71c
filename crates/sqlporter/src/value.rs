//! Bindable scalar values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value bound to a named placeholder.
///
/// The set of variants is closed so an execution layer can match on it
/// exhaustively when binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// SQL NULL
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// Text string
    Text(String),
}

impl ScalarValue {
    /// Check if this value is NULL.
    pub const fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Get the type name of this value.
    pub const fn type_name(&self) -> &'static str {
        match self {
            ScalarValue::Null => "null",
            ScalarValue::Bool(_) => "bool",
            ScalarValue::Int(_) => "int",
            ScalarValue::Float(_) => "float",
            ScalarValue::Text(_) => "text",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScalarValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Float(v) => Some(*v),
            ScalarValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Convert into a JSON scalar.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ScalarValue::Null => serde_json::Value::Null,
            ScalarValue::Bool(v) => serde_json::Value::Bool(*v),
            ScalarValue::Int(v) => serde_json::Value::from(*v),
            // Non-finite floats have no JSON form.
            ScalarValue::Float(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            ScalarValue::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

/// Renders a SQL-literal-looking form, for logs and debugging only.
impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => f.write_str("NULL"),
            ScalarValue::Bool(v) => write!(f, "{v}"),
            ScalarValue::Int(v) => write!(f, "{v}"),
            ScalarValue::Float(v) => write!(f, "{v}"),
            ScalarValue::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ScalarValue {
                fn from(v: $ty) -> Self {
                    ScalarValue::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for ScalarValue {
    fn from(v: bool) -> Self {
        ScalarValue::Bool(v)
    }
}

impl From<f32> for ScalarValue {
    fn from(v: f32) -> Self {
        ScalarValue::Float(f64::from(v))
    }
}

impl From<f64> for ScalarValue {
    fn from(v: f64) -> Self {
        ScalarValue::Float(v)
    }
}

impl From<&str> for ScalarValue {
    fn from(v: &str) -> Self {
        ScalarValue::Text(v.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(v: String) -> Self {
        ScalarValue::Text(v)
    }
}

impl From<&String> for ScalarValue {
    fn from(v: &String) -> Self {
        ScalarValue::Text(v.clone())
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ScalarValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_matching_variant() {
        assert_eq!(ScalarValue::from(1i32), ScalarValue::Int(1));
        assert_eq!(ScalarValue::from(7u32), ScalarValue::Int(7));
        assert_eq!(ScalarValue::from(1.5f64), ScalarValue::Float(1.5));
        assert_eq!(ScalarValue::from(true), ScalarValue::Bool(true));
        assert_eq!(ScalarValue::from("a"), ScalarValue::Text("a".into()));
        assert_eq!(ScalarValue::from(None::<i32>), ScalarValue::Null);
        assert_eq!(ScalarValue::from(Some("x")), ScalarValue::Text("x".into()));
    }

    #[test]
    fn serializes_as_plain_json_scalars() {
        let values = vec![
            ScalarValue::Null,
            ScalarValue::Bool(false),
            ScalarValue::Int(3),
            ScalarValue::Text("hi".into()),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,false,3,"hi"]"#);

        let back: Vec<ScalarValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn display_quotes_text() {
        assert_eq!(ScalarValue::Text("it's".into()).to_string(), "'it''s'");
        assert_eq!(ScalarValue::Null.to_string(), "NULL");
        assert_eq!(ScalarValue::Int(-4).to_string(), "-4");
    }

    #[test]
    fn non_finite_float_becomes_json_null() {
        assert_eq!(ScalarValue::Float(f64::NAN).to_json(), serde_json::Value::Null);
        assert_eq!(ScalarValue::Float(2.5).to_json(), serde_json::json!(2.5));
    }
}
