use serde::{Deserialize, Serialize};

/// Value of a single record field, resolved by name.
///
/// Used wherever a field is selected at call time (histogram field,
/// "filter by City" style selectors) instead of a typed accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Number(f64),
    Text(String),
    Null,
}

impl CellValue {
    /// Numeric view of the value.
    ///
    /// Text is never coerced, even when it looks like a number, and
    /// non-finite floats are treated as non-numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// Grouping key for the value. `None` for null and blank labels.
    pub fn as_key(&self) -> Option<String> {
        match self {
            CellValue::Text(s) if !s.trim().is_empty() => Some(s.clone()),
            CellValue::Text(_) => None,
            CellValue::Integer(i) => Some(i.to_string()),
            CellValue::Number(n) if n.is_finite() => Some(n.to_string()),
            CellValue::Number(_) | CellValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(b) => CellValue::Text(b.to_string()),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Integer(i),
                None => n.as_f64().map(CellValue::Number).unwrap_or(CellValue::Null),
            },
            serde_json::Value::String(s) => CellValue::Text(s.clone()),
            // Nested structures cannot be grouped or bucketed
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => CellValue::Null,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_view() {
        assert_eq!(CellValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(CellValue::Number(2.5).as_f64(), Some(2.5));
        assert_eq!(CellValue::Number(f64::NAN).as_f64(), None);
        assert_eq!(CellValue::Text("42".to_string()).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
    }

    #[test]
    fn test_key_view() {
        assert_eq!(CellValue::from("Yangon").as_key(), Some("Yangon".to_string()));
        assert_eq!(CellValue::from("  ").as_key(), None);
        assert_eq!(CellValue::Integer(2024).as_key(), Some("2024".to_string()));
        assert_eq!(CellValue::Null.as_key(), None);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(CellValue::from(&json!(7)), CellValue::Integer(7));
        assert_eq!(CellValue::from(&json!(7.5)), CellValue::Number(7.5));
        assert_eq!(CellValue::from(&json!("Cash")), CellValue::from("Cash"));
        assert_eq!(CellValue::from(&json!(true)), CellValue::from("true"));
        assert!(CellValue::from(&json!(null)).is_null());
        assert!(CellValue::from(&json!({"a": 1})).is_null());
    }
}
