//! Resource base: a local, single-owner projection of one remote entity snapshot.
//!
//! Attribute writes are cast through the declared type and tracked in a dirty set.
//! Hydration from the wire is a full replace and always ends clean.

use crate::case::{to_camel_case, to_snake_case};
use crate::envelope::{Document, Envelope, OutboundResource, RelationshipData, ResourceIdentifier};
use crate::error::{CastError, ResourceError};
use crate::schema::{AttributeDescriptor, ResourceDefinition};
use crate::types::{AttrValue, Encoding, RawValue};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Resource {
    definition: Arc<ResourceDefinition>,
    id: Option<String>,
    wire_type: Option<String>,
    /// Indexed by schema position.
    values: Vec<Option<AttrValue>>,
    relationships: BTreeMap<String, ResourceIdentifier>,
    changed_relationships: BTreeSet<String>,
    dirty: BTreeSet<usize>,
    raw: Option<Value>,
}

impl Resource {
    /// Two-phase construction: every attribute starts null, caller values are written,
    /// then default factories run for attributes still null. The result is clean.
    pub fn new<I, K, V>(definition: Arc<ResourceDefinition>, attributes: I) -> Result<Self, ResourceError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<RawValue>,
    {
        let mut resource = Self::blank(definition);
        for (name, value) in attributes {
            resource.set(name.as_ref(), value)?;
        }
        resource.apply_defaults()?;
        resource.mark_clean();
        Ok(resource)
    }

    /// Builds a resource from a server envelope. Default factories never run here.
    pub fn from_wire(definition: Arc<ResourceDefinition>, envelope: &Value) -> Result<Self, ResourceError> {
        let mut resource = Self::blank(definition);
        resource.replace_from_wire(envelope)?;
        Ok(resource)
    }

    fn blank(definition: Arc<ResourceDefinition>) -> Self {
        let len = definition.schema.len();
        Self {
            definition,
            id: None,
            wire_type: None,
            values: vec![None; len],
            relationships: BTreeMap::new(),
            changed_relationships: BTreeSet::new(),
            dirty: BTreeSet::new(),
            raw: None,
        }
    }

    fn apply_defaults(&mut self) -> Result<(), CastError> {
        let definition = Arc::clone(&self.definition);
        for (pos, attr) in definition.schema.attributes().iter().enumerate() {
            if let Some(factory) = attr.default {
                if self.values[pos].is_none() {
                    self.write(pos, factory().into())?;
                }
            }
        }
        Ok(())
    }

    pub fn definition(&self) -> &Arc<ResourceDefinition> {
        &self.definition
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Type tag from the last hydration, or the definition's own tag.
    pub fn wire_type(&self) -> &str {
        self.wire_type.as_deref().unwrap_or(self.definition.wire_type)
    }

    /// Last envelope this resource was hydrated from.
    pub fn raw(&self) -> Option<&Value> {
        self.raw.as_ref()
    }

    pub fn resource_path(&self) -> Result<String, ResourceError> {
        let id = self.id().ok_or(ResourceError::MissingId(self.definition.name))?;
        Ok(self.definition.resource_path(id))
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        let pos = self.definition.schema.position(name)?;
        self.values[pos].as_ref()
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_str)
    }

    /// Casts and stores `value`. Returns whether the stored value changed; an unchanged
    /// write leaves the dirty set untouched.
    pub fn set(&mut self, name: &str, value: impl Into<RawValue>) -> Result<bool, ResourceError> {
        let pos = self.position(name)?;
        Ok(self.write(pos, value.into())?)
    }

    fn write(&mut self, pos: usize, raw: RawValue) -> Result<bool, CastError> {
        let cast = self.definition.schema.attributes()[pos].ty.cast(raw)?;
        if cast == self.values[pos] {
            return Ok(false);
        }
        self.values[pos] = cast;
        self.dirty.insert(pos);
        Ok(true)
    }

    fn position(&self, name: &str) -> Result<usize, ResourceError> {
        self.definition
            .schema
            .position(name)
            .ok_or_else(|| ResourceError::UnknownAttribute {
                resource: self.definition.name,
                attribute: name.to_string(),
            })
    }

    /// Every declared attribute with its current value, in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, Option<&AttrValue>)> + '_ {
        self.definition
            .schema
            .attributes()
            .iter()
            .zip(&self.values)
            .map(|(attr, value)| (attr.name.as_str(), value.as_ref()))
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn dirty_attributes(&self) -> Vec<&str> {
        let attrs = self.definition.schema.attributes();
        self.dirty.iter().map(|&pos| attrs[pos].name.as_str()).collect()
    }

    pub fn has_relationship_changes(&self) -> bool {
        !self.changed_relationships.is_empty()
    }

    pub fn mark_clean(&mut self) {
        self.dirty.clear();
        self.changed_relationships.clear();
    }

    pub fn relationship(&self, name: &str) -> Option<&ResourceIdentifier> {
        self.relationships.get(name)
    }

    /// Points relationship `name` at `related`, keeping only its identifier.
    pub fn set_relationship(&mut self, name: &str, related: &Resource) -> Result<(), ResourceError> {
        let rel = self
            .definition
            .relationship(name)
            .ok_or_else(|| ResourceError::UnknownRelationship {
                resource: self.definition.name,
                relationship: name.to_string(),
            })?;
        let id = related.id().ok_or(ResourceError::MissingId(related.definition.name))?;
        let identifier = ResourceIdentifier {
            kind: rel.wire_type.clone(),
            id: id.to_string(),
        };
        self.relationships.insert(name.to_string(), identifier);
        self.changed_relationships.insert(name.to_string());
        Ok(())
    }

    /// `{ <relName>: { data: { type, id } } }` for every known relationship.
    pub fn relationships_to_wire(&self) -> Map<String, Value> {
        self.relationship_fragments(|_| true)
    }

    fn relationship_fragments(&self, include: impl Fn(&str) -> bool) -> Map<String, Value> {
        let mut out = Map::new();
        for (name, identifier) in &self.relationships {
            if !include(name) {
                continue;
            }
            let key = self
                .definition
                .relationship(name)
                .map(|r| r.wire_key.clone())
                .unwrap_or_else(|| to_camel_case(name));
            let fragment = RelationshipData {
                data: identifier.clone(),
            };
            if let Ok(v) = serde_json::to_value(fragment) {
                out.insert(key, v);
            }
        }
        out
    }

    /// Compact projection of every non-readonly attribute; null values are omitted.
    pub fn to_wire_attributes(&self) -> Map<String, Value> {
        self.attribute_fragments(|_, _| true)
    }

    fn attribute_fragments(&self, include: impl Fn(usize, &AttributeDescriptor) -> bool) -> Map<String, Value> {
        let mut out = Map::new();
        for (pos, attr) in self.definition.schema.attributes().iter().enumerate() {
            if attr.readonly || !include(pos, attr) {
                continue;
            }
            let Some(value) = &self.values[pos] else {
                continue;
            };
            let wire = encode(attr, value);
            if !wire.is_null() {
                out.insert(attr.wire_key.clone(), wire);
            }
        }
        out
    }

    /// Create document: every non-readonly attribute and every known relationship.
    pub fn to_wire_payload(&self) -> Value {
        Document::new(OutboundResource {
            kind: self.definition.wire_type.to_string(),
            attributes: self.to_wire_attributes(),
            relationships: self.relationships_to_wire(),
        })
        .to_value()
    }

    /// Update document: only dirty attributes and relationships changed since the last
    /// clean state.
    pub fn to_update_payload(&self) -> Value {
        let relationships = self.relationship_fragments(|name| self.changed_relationships.contains(name));
        Document::new(OutboundResource {
            kind: self.wire_type().to_string(),
            attributes: self.update_attributes(),
            relationships,
        })
        .to_value()
    }

    fn update_attributes(&self) -> Map<String, Value> {
        self.attribute_fragments(|pos, attr| {
            self.dirty.contains(&pos) && !self.definition.excluded_from_update(&attr.name)
        })
    }

    /// Whether an update document would carry anything. Dirty attributes that are
    /// readonly, excluded from updates or null do not count.
    pub fn has_pending_update(&self) -> bool {
        self.has_relationship_changes() || !self.update_attributes().is_empty()
    }

    /// Full replace from a server envelope: identity, relationships and every attribute.
    /// Attributes missing from the payload become null; unknown keys are ignored.
    /// Nothing is modified if any value fails to cast.
    pub fn replace_from_wire(&mut self, raw: &Value) -> Result<(), ResourceError> {
        let envelope: Envelope =
            serde_json::from_value(raw.clone()).map_err(|e| ResourceError::Envelope(e.to_string()))?;
        let schema = &self.definition.schema;

        let mut values = vec![None; schema.len()];
        for (key, value) in &envelope.attributes {
            let pos = schema.position(key).or_else(|| schema.position(&to_snake_case(key)));
            match pos {
                Some(pos) => values[pos] = schema.attributes()[pos].ty.cast(value.clone())?,
                None => tracing::trace!(resource = self.definition.name, attribute = %key, "ignoring unknown attribute"),
            }
        }

        let mut relationships = BTreeMap::new();
        for (key, entry) in &envelope.relationships {
            match RelationshipData::parse(entry) {
                Some(rel) => {
                    relationships.insert(to_snake_case(key), rel.data);
                }
                None => tracing::trace!(resource = self.definition.name, relationship = %key, "skipping non to-one relationship"),
            }
        }

        self.id = envelope.id;
        self.wire_type = envelope.kind;
        self.values = values;
        self.relationships = relationships;
        self.raw = Some(raw.clone());
        self.mark_clean();
        Ok(())
    }
}

fn encode(attr: &AttributeDescriptor, value: &AttrValue) -> Value {
    match attr.encoding {
        Encoding::Structured => value
            .as_serializable()
            .map(|s| s.to_wire())
            .unwrap_or_else(|| value.to_wire()),
        Encoding::Scalar => value.scalar_wire().unwrap_or(Value::Null),
    }
}
