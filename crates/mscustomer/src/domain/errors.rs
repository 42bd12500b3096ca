//! Domain Errors
//!
//! Error types for domain operations. Every variant carries a machine-readable
//! code and the HTTP-style status it maps to at the API boundary.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Required field is missing: {field}")]
    MissingField { field: &'static str },

    #[error("Required field is empty: {field}")]
    EmptyValue { field: &'static str },

    #[error("Invalid customer type: {0} (expected PERSONA or EMPRESA)")]
    InvalidPersonType(String),

    #[error("Customer already registered with identifier {0}")]
    DuplicateUser(String),

    #[error("Authorized signers are only allowed for EMPRESA customers")]
    SignerOnIndividual,

    /// A signer listing was requested for a customer whose signer collection was never set.
    #[error("Customer {customer_id} has no authorized signers")]
    SignersConflict { customer_id: String },

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    /// Machine-readable message code
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::EmptyValue { .. } => "empty_value",
            Self::InvalidPersonType(_) => "invalid_person_type",
            Self::DuplicateUser(_) => "user_registered",
            Self::SignerOnIndividual | Self::SignersConflict { .. } => "person_authorized_signer",
            Self::NotFound { .. } => "not_found",
            Self::Repository(_) => "repository_error",
        }
    }

    /// HTTP-style status; also used as the numeric error code
    pub fn status(&self) -> u16 {
        match self {
            Self::MissingField { .. }
            | Self::EmptyValue { .. }
            | Self::InvalidPersonType(_)
            | Self::DuplicateUser(_)
            | Self::SignerOnIndividual => 400,
            Self::NotFound { .. } => 404,
            Self::SignersConflict { .. } => 409,
            Self::Repository(_) => 500,
        }
    }

    /// True for errors caused by the request rather than the infrastructure
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status())
    }
}
