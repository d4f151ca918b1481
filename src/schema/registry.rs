//! Explicit registry of resource definitions, built once and shared read-only.

use crate::error::RegistryError;
use crate::schema::ResourceDefinition;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct Registry {
    definitions: HashMap<&'static str, Arc<ResourceDefinition>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ResourceDefinition>> {
        self.definitions.get(name)
    }

    pub fn definition(&self, name: &str) -> Result<&Arc<ResourceDefinition>, RegistryError> {
        self.get(name).ok_or_else(|| RegistryError::MissingReference {
            kind: "resource definition",
            id: name.to_string(),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.definitions.keys().copied()
    }
}

#[derive(Default)]
pub struct RegistryBuilder {
    definitions: Vec<ResourceDefinition>,
}

impl RegistryBuilder {
    pub fn register(mut self, definition: ResourceDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Validates uniqueness of names and that every relationship target is registered.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut definitions = HashMap::with_capacity(self.definitions.len());
        for def in self.definitions {
            if definitions.contains_key(def.name) {
                return Err(RegistryError::DuplicateDefinition(def.name.to_string()));
            }
            definitions.insert(def.name, Arc::new(def));
        }
        for def in definitions.values() {
            for rel in &def.relationships {
                if !definitions.contains_key(rel.related.as_str()) {
                    return Err(RegistryError::MissingReference {
                        kind: "relationship target",
                        id: format!("{}.{} -> {}", def.name, rel.name, rel.related),
                    });
                }
            }
        }
        Ok(Registry { definitions })
    }
}
