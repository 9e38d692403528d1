//! Scalar cell value for tabular data

use serde_json::Value;

/// A single scalar table cell (Value Object)
///
/// Tables sourced from CSV carry text cells only; tables built from JSON may
/// carry typed scalars. `Null` renders as the empty string, which is also how
/// sparse cells appear in the final enriched table.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Convert to a JSON value for prompt payloads and structured logs.
    pub fn to_json(&self) -> Value {
        match self {
            CellValue::Null => Value::Null,
            CellValue::Bool(b) => Value::Bool(*b),
            CellValue::Integer(i) => Value::from(*i),
            CellValue::Float(f) => {
                serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number)
            }
            CellValue::Text(s) => Value::String(s.clone()),
        }
    }

    /// Build a cell from a JSON scalar.
    ///
    /// Non-scalar values (objects, arrays) are flattened to their JSON text
    /// so no information is silently dropped.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Integer(i)
                } else {
                    CellValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Integer(42).to_string(), "42");
        assert_eq!(CellValue::text("Ada").to_string(), "Ada");
    }

    #[test]
    fn test_json_roundtrip() {
        for value in [
            CellValue::Null,
            CellValue::Bool(true),
            CellValue::Integer(7),
            CellValue::text("hello"),
        ] {
            assert_eq!(CellValue::from_json(&value.to_json()), value);
        }
    }

    #[test]
    fn test_from_json_flattens_compound_values() {
        let cell = CellValue::from_json(&json!({"a": 1}));
        assert_eq!(cell, CellValue::text("{\"a\":1}"));
    }
}
