//! Customer - Persisted person or company record
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::CustomerType;

/// Customer - validated record as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    /// External business key (national or tax ID), unique across customers
    pub identifier: String,
    pub fullname: String,
    /// Stored as supplied; matches a `CustomerType` case-insensitively
    #[serde(rename = "type")]
    pub customer_type: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub birthday: String,
    /// `None` means never initialized, which is distinct from an empty list
    #[serde(
        rename = "authorizedSigners",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub authorized_signers: Option<Vec<AuthorizedSigner>>,
}

/// Authorized Signer - person allowed to sign for a company customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedSigner {
    pub fullname: String,
    /// Role or title within the company
    pub cargo: String,
    pub dni: String,
}

impl Customer {
    /// Generate a fresh system identifier
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn kind(&self) -> Option<CustomerType> {
        self.customer_type.parse().ok()
    }

    pub fn is_individual(&self) -> bool {
        self.kind() == Some(CustomerType::Persona)
    }

    /// Overwrite the mutable fields with those of `incoming`.
    ///
    /// `id`, `identifier` and `type` are immutable after creation.
    pub fn apply_update(&mut self, incoming: Customer) {
        self.address = incoming.address;
        self.birthday = incoming.birthday;
        self.email = incoming.email;
        self.fullname = incoming.fullname;
        self.phone = incoming.phone;
        self.authorized_signers = incoming.authorized_signers;
    }

    /// Append a signer, initializing the collection if it was never set
    pub fn push_signer(&mut self, signer: AuthorizedSigner) {
        self.authorized_signers
            .get_or_insert_with(Vec::new)
            .push(signer);
    }
}
