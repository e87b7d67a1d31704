use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Backing store shared by the resource types: API field name to raw JSON
/// value.
///
/// A field is absent when its key is missing or its stored value is JSON
/// null; the platform treats null and unset interchangeably, so both read
/// back as `None`. Fields are overwritten, never removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct FieldMap {
    entries: Map<String, Value>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.entries.get(field).filter(|value| !value.is_null())
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.entries.insert(field.into(), value);
    }

    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }
}

/// Truthiness the way the platform's body-inclusion checks expect it:
/// null, false, numeric zero, the empty string, "0" and the empty array
/// are falsy; everything else, including any object, is truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(false, |n| n != 0.0),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_reads_as_absent() {
        let mut fields = FieldMap::new();
        fields.set("password", Value::Null);

        assert!(!fields.has("password"));
        assert_eq!(fields.get("password"), None);

        fields.set("password", json!("hunter2"));
        assert!(fields.has("password"));
        assert_eq!(fields.get_str("password"), Some("hunter2"));
    }

    #[test]
    fn test_truthiness_table() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!("0"), json!([])] {
            assert!(!is_truthy(&falsy), "expected {:?} to be falsy", falsy);
        }
        for truthy in [json!(true), json!(1), json!("x"), json!(["a"]), json!({"k": 1})] {
            assert!(is_truthy(&truthy), "expected {:?} to be truthy", truthy);
        }
    }
}
