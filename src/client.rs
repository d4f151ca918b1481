//! Remote operations over an injected [`Transport`]: finders, create, save,
//! relationship resolution and actions.
//!
//! Every call awaits a single request and returns; nothing is spawned or cached.

use crate::action::Action;
use crate::error::ResourceError;
use crate::resource::Resource;
use crate::schema::{Registry, ResourceDefinition};
use crate::transport::Transport;
use crate::types::RawValue;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    registry: Arc<Registry>,
}

impl Client {
    pub fn new(transport: Arc<dyn Transport>, registry: Arc<Registry>) -> Self {
        Self { transport, registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn definition(&self, name: &str) -> Result<Arc<ResourceDefinition>, ResourceError> {
        Ok(Arc::clone(self.registry.definition(name)?))
    }

    /// Builds a new local resource of the named definition.
    pub fn build<I, K, V>(&self, name: &str, attributes: I) -> Result<Resource, ResourceError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<RawValue>,
    {
        Resource::new(self.definition(name)?, attributes)
    }

    pub async fn find(&self, name: &str, id: &str) -> Result<Resource, ResourceError> {
        let definition = self.definition(name)?;
        let data = self.transport.get(&definition.resource_path(id)).await?;
        Resource::from_wire(definition, &data)
    }

    /// `GET` on the collection path with `query` form-encoded (`filter[status]=Open`).
    pub async fn list(&self, name: &str, query: &[(&str, &str)]) -> Result<Vec<Resource>, ResourceError> {
        let definition = self.definition(name)?;
        let mut path = definition.resources_path(None);
        if !query.is_empty() {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            path = format!("{path}?{encoded}");
        }
        let data = self.transport.get(&path).await?;
        let Value::Array(items) = data else {
            return Err(ResourceError::Envelope(format!("expected an array of resources from {path}")));
        };
        items
            .iter()
            .map(|item| Resource::from_wire(Arc::clone(&definition), item))
            .collect()
    }

    /// `POST` of the full create document; the response replaces local state.
    pub async fn create(&self, resource: &mut Resource) -> Result<(), ResourceError> {
        let path = resource.definition().resources_path(None);
        self.create_at(resource, path).await
    }

    /// Create for nested collections, e.g. `/cards/{parent}/cardholder/token`.
    pub async fn create_under(&self, resource: &mut Resource, parent_id: &str) -> Result<(), ResourceError> {
        let path = resource.definition().resources_path(Some(parent_id));
        self.create_at(resource, path).await
    }

    async fn create_at(&self, resource: &mut Resource, path: String) -> Result<(), ResourceError> {
        let data = self.transport.post(&path, Some(resource.to_wire_payload())).await?;
        resource.replace_from_wire(&data)
    }

    /// `PATCH` of the dirty attributes. Returns `false` without a request when the
    /// update document would be empty, e.g. when only an attribute excluded from
    /// updates changed.
    pub async fn save(&self, resource: &mut Resource) -> Result<bool, ResourceError> {
        let path = resource.resource_path()?;
        if !resource.has_pending_update() {
            tracing::debug!(resource = resource.definition().name, path = %path, "nothing to save");
            return Ok(false);
        }
        let data = self.transport.patch(&path, resource.to_update_payload()).await?;
        resource.replace_from_wire(&data)?;
        Ok(true)
    }

    /// Fetches the related resource by id. Every call performs a fresh request.
    pub async fn related(&self, resource: &Resource, name: &str) -> Result<Option<Resource>, ResourceError> {
        let relationship = resource
            .definition()
            .relationship(name)
            .ok_or_else(|| ResourceError::UnknownRelationship {
                resource: resource.definition().name,
                relationship: name.to_string(),
            })?;
        let Some(identifier) = resource.relationship(name) else {
            return Ok(None);
        };
        self.find(&relationship.related, &identifier.id).await.map(Some)
    }

    /// Posts `action` and replaces the resource with the returned snapshot.
    pub async fn perform(&self, resource: &mut Resource, action: Action) -> Result<(), ResourceError> {
        let path = action.path(&resource.resource_path()?);
        let data = self.transport.post(&path, action.body()).await?;
        resource.replace_from_wire(&data)
    }
}
