//! Opaque key/value map (tags, card limits, evaluation params). Keys are kept verbatim.

use crate::error::CastError;
use crate::types::{json_kind, Serializable};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(Map<String, Value>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cast(raw: &Value) -> Result<Option<Self>, CastError> {
        match raw {
            Value::Null => Ok(None),
            Value::Object(map) => Ok(Some(Self(map.clone()))),
            other => Err(CastError::TypeMismatch {
                expected: "hash",
                found: json_kind(other),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl Serializable for Tags {
    fn to_wire(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for Tags {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_are_not_case_converted() {
        let tags = Tags::cast(&json!({ "purpose": "payroll", "cost_center": 7 })).unwrap().unwrap();
        assert_eq!(tags.get("cost_center"), Some(&json!(7)));
        assert_eq!(tags.to_wire(), json!({ "purpose": "payroll", "cost_center": 7 }));
    }

    #[test]
    fn only_objects_cast() {
        assert!(Tags::cast(&json!(["a"])).is_err());
        assert_eq!(Tags::cast(&Value::Null).unwrap(), None);
    }
}
