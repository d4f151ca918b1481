//! Unit SDK: typed resource models over the Unit JSON:API banking service.

pub mod action;
pub mod case;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod resource;
pub mod resources;
pub mod schema;
pub mod transport;
pub mod types;

pub use action::Action;
pub use client::Client;
pub use config::ClientConfig;
pub use error::{CastError, ConfigError, RegistryError, ResourceError, TransportError};
pub use resource::Resource;
pub use resources::standard_registry;
pub use schema::{Registry, ResourceDefinition};
pub use transport::{HttpTransport, MockTransport, Transport};
pub use types::{AttrType, AttrValue, RawValue};
