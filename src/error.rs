//! Typed errors for casting, registry setup, configuration and remote calls.

use thiserror::Error;

/// Raised synchronously while coercing a raw value into a declared type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CastError {
    #[error("invalid {label}: {value:?}. Allowed values: {}", .allowed.join(", "))]
    InvalidEnumValue {
        label: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
    #[error("{type_name} {reason}")]
    InvalidCompositeState {
        type_name: &'static str,
        reason: &'static str,
    },
    #[error("cannot cast {found} to {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("invalid {expected}: {value:?}")]
    Parse { expected: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("missing reference: {kind} '{id}'")]
    MissingReference { kind: &'static str, id: String },
    #[error("duplicate resource definition: {0}")]
    DuplicateDefinition(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Opaque failure reported by a [`Transport`](crate::transport::Transport).
/// The core never inspects it.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(err.into())
    }

    pub fn msg(message: impl Into<String>) -> Self {
        Self(message.into().into())
    }

    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync> {
        self.0
    }
}

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error(transparent)]
    Cast(#[from] CastError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("unknown attribute '{attribute}' on {resource}")]
    UnknownAttribute {
        resource: &'static str,
        attribute: String,
    },
    #[error("unknown relationship '{relationship}' on {resource}")]
    UnknownRelationship {
        resource: &'static str,
        relationship: String,
    },
    #[error("{0} has no id")]
    MissingId(&'static str),
    #[error("malformed envelope: {0}")]
    Envelope(String),
}
