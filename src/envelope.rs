//! JSON:API wire envelope: inbound resource objects and outbound documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `{ id, type, attributes, relationships }` as received from the server.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attributes: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub relationships: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{ type, id }` reference to another resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

/// `{ data: { type, id } }` relationship fragment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipData {
    pub data: ResourceIdentifier,
}

impl RelationshipData {
    /// Parses a to-one relationship entry; to-many or empty entries yield `None`.
    pub fn parse(raw: &Value) -> Option<Self> {
        serde_json::from_value(raw.clone()).ok()
    }
}

/// Resource object of an outbound create/update document.
#[derive(Clone, Debug, Serialize)]
pub struct OutboundResource {
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub relationships: Map<String, Value>,
}

/// Top-level `{ data: ... }` document.
#[derive(Clone, Debug, Serialize)]
pub struct Document<T> {
    pub data: T,
}

impl<T: Serialize> Document<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
