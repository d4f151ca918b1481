//! Attribute descriptors and the per-type schema table.

use crate::case::to_camel_case;
use crate::types::{AttrType, AttrValue, Encoding};
use std::collections::HashMap;

/// Produces a default value during construction when the caller supplied none.
pub type DefaultFactory = fn() -> AttrValue;

#[derive(Clone, Debug, Default)]
pub struct AttributeOptions {
    /// Settable locally (hydration, construction) but never sent to the server.
    pub readonly: bool,
    pub default: Option<DefaultFactory>,
}

impl AttributeOptions {
    pub fn readonly() -> Self {
        Self {
            readonly: true,
            default: None,
        }
    }

    pub fn with_default(factory: DefaultFactory) -> Self {
        Self {
            readonly: false,
            default: Some(factory),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AttributeDescriptor {
    pub name: String,
    pub wire_key: String,
    pub ty: AttrType,
    pub encoding: Encoding,
    pub readonly: bool,
    pub default: Option<DefaultFactory>,
}

/// Ordered attribute table shared by every instance of one resource type.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    attributes: Vec<AttributeDescriptor>,
    index: HashMap<String, usize>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name`. Re-declaring a name replaces its descriptor in place.
    pub fn declare(&mut self, name: impl Into<String>, ty: AttrType, options: AttributeOptions) -> &mut Self {
        let name = name.into();
        let descriptor = AttributeDescriptor {
            wire_key: to_camel_case(&name),
            encoding: ty.encoding(),
            ty,
            readonly: options.readonly,
            default: options.default,
            name: name.clone(),
        };
        match self.index.get(&name) {
            Some(&pos) => {
                tracing::debug!(attribute = %name, "attribute redeclared; replacing descriptor");
                self.attributes[pos] = descriptor;
            }
            None => {
                self.index.insert(name, self.attributes.len());
                self.attributes.push(descriptor);
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.position(name).map(|pos| &self.attributes[pos])
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn attributes(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AttrValue {
        AttrValue::String("token".into())
    }

    #[test]
    fn declaration_order_is_preserved() {
        let mut schema = Schema::new();
        schema
            .declare("amount", AttrType::Integer, AttributeOptions::default())
            .declare("description", AttrType::String, AttributeOptions::default())
            .declare("created_at", AttrType::DateTime, AttributeOptions::readonly());
        let names: Vec<_> = schema.attributes().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["amount", "description", "created_at"]);
        assert!(schema.get("created_at").unwrap().readonly);
        assert_eq!(schema.get("created_at").unwrap().wire_key, "createdAt");
    }

    #[test]
    fn redeclaring_a_name_is_last_wins() {
        let mut schema = Schema::new();
        schema
            .declare("status", AttrType::String, AttributeOptions::default())
            .declare("tags", AttrType::Hash, AttributeOptions::default())
            .declare("status", AttrType::Boolean, AttributeOptions::readonly());
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.position("status"), Some(0));
        let status = schema.get("status").unwrap();
        assert_eq!(status.ty, AttrType::Boolean);
        assert!(status.readonly);
    }

    #[test]
    fn encoding_is_fixed_at_declaration() {
        let mut schema = Schema::new();
        schema
            .declare("idempotency_key", AttrType::String, AttributeOptions::with_default(token))
            .declare("address", AttrType::Address, AttributeOptions::default());
        assert_eq!(schema.get("idempotency_key").unwrap().encoding, Encoding::Scalar);
        assert!(schema.get("idempotency_key").unwrap().default.is_some());
        assert_eq!(schema.get("address").unwrap().encoding, Encoding::Structured);
    }
}
