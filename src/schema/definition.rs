//! Resource definitions: wire type, paths, attribute schema and `belongs_to` relationships.

use crate::case::to_camel_case;
use crate::schema::{AttributeOptions, DefaultFactory, Schema};
use crate::types::AttrType;

/// A `belongs_to` declaration. Holds no reference to the related resource, only the
/// definition name used to look up its finder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relationship {
    pub name: String,
    pub wire_key: String,
    /// Type tag written into `{data: {type, id}}`.
    pub wire_type: String,
    /// Name of the related [`ResourceDefinition`] in the registry.
    pub related: String,
}

#[derive(Clone, Debug)]
pub struct ResourceDefinition {
    pub name: &'static str,
    pub wire_type: &'static str,
    pub path: &'static str,
    /// Sub-path appended after a parent id for nested collections
    /// (`/cards/{id}/cardholder/token`).
    pub nested: Option<&'static str>,
    pub schema: Schema,
    pub relationships: Vec<Relationship>,
    /// Attributes never sent on update even when dirty.
    pub update_excludes: Vec<String>,
}

impl ResourceDefinition {
    pub fn builder(name: &'static str, wire_type: &'static str, path: &'static str) -> DefinitionBuilder {
        DefinitionBuilder {
            def: ResourceDefinition {
                name,
                wire_type,
                path,
                nested: None,
                schema: Schema::new(),
                relationships: Vec::new(),
                update_excludes: Vec::new(),
            },
        }
    }

    pub fn resource_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, id)
    }

    /// Collection path; nested definitions place the parent id between path and suffix.
    pub fn resources_path(&self, parent: Option<&str>) -> String {
        match (parent, self.nested) {
            (Some(parent), Some(suffix)) => format!("{}/{}/{}", self.path, parent, suffix),
            (Some(parent), None) => format!("{}/{}", self.path, parent),
            (None, _) => self.path.to_string(),
        }
    }

    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.name == name)
    }

    pub fn excluded_from_update(&self, attribute: &str) -> bool {
        self.update_excludes.iter().any(|a| a == attribute)
    }
}

pub struct DefinitionBuilder {
    def: ResourceDefinition,
}

impl DefinitionBuilder {
    pub fn attribute(mut self, name: &str, ty: AttrType) -> Self {
        self.def.schema.declare(name, ty, AttributeOptions::default());
        self
    }

    pub fn readonly(mut self, name: &str, ty: AttrType) -> Self {
        self.def.schema.declare(name, ty, AttributeOptions::readonly());
        self
    }

    pub fn defaulted(mut self, name: &str, ty: AttrType, factory: DefaultFactory) -> Self {
        self.def.schema.declare(name, ty, AttributeOptions::with_default(factory));
        self
    }

    /// `belongs_to` with the wire type derived from the relationship name.
    pub fn belongs_to(self, name: &str, related: &str) -> Self {
        let wire_type = to_camel_case(name);
        self.belongs_to_typed(name, related, &wire_type)
    }

    pub fn belongs_to_typed(mut self, name: &str, related: &str, wire_type: &str) -> Self {
        let relationship = Relationship {
            name: name.to_string(),
            wire_key: to_camel_case(name),
            wire_type: wire_type.to_string(),
            related: related.to_string(),
        };
        match self.def.relationships.iter_mut().find(|r| r.name == name) {
            Some(existing) => *existing = relationship,
            None => self.def.relationships.push(relationship),
        }
        self
    }

    pub fn nested(mut self, suffix: &'static str) -> Self {
        self.def.nested = Some(suffix);
        self
    }

    pub fn exclude_from_update(mut self, name: &str) -> Self {
        self.def.update_excludes.push(name.to_string());
        self
    }

    pub fn build(self) -> ResourceDefinition {
        self.def
    }
}
