//! Inbound payloads
//!
//! Unvalidated shapes of Customer and AuthorizedSigner as received from a
//! caller. Every field is optional here; the validator decides what is
//! acceptable and the `into_*` conversions produce the validated entities.

use crate::domain::services::validator;
use crate::domain::{AuthorizedSigner, Customer, DomainError};

/// Customer as received on create or update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPayload {
    /// Only meaningful on update, where it selects the record to change
    pub id: Option<String>,
    pub identifier: Option<String>,
    pub fullname: Option<String>,
    pub customer_type: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<String>,
    pub authorized_signers: Option<Vec<AuthorizedSignerPayload>>,
}

/// Authorized signer as received
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizedSignerPayload {
    pub fullname: Option<String>,
    pub cargo: Option<String>,
    pub dni: Option<String>,
}

impl CustomerPayload {
    /// Required fields in reporting order, paired with their wire names
    pub fn required_fields(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("identifier", self.identifier.as_deref()),
            ("fullname", self.fullname.as_deref()),
            ("type", self.customer_type.as_deref()),
            ("address", self.address.as_deref()),
            ("phone", self.phone.as_deref()),
            ("email", self.email.as_deref()),
            ("birthday", self.birthday.as_deref()),
        ]
    }

    /// Convert into a validated Customer carrying `id`.
    ///
    /// Nested signers go through the signer presence and blank checks.
    /// Business rules that need context (type, uniqueness, signer ownership)
    /// are the caller's job.
    pub fn into_customer(self, id: String) -> Result<Customer, DomainError> {
        validator::require_all_fields_present(&self)?;
        validator::require_all_fields_non_blank(&self)?;

        let authorized_signers = self
            .authorized_signers
            .map(|signers| {
                signers
                    .into_iter()
                    .map(AuthorizedSignerPayload::into_signer)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(Customer {
            id,
            identifier: required(self.identifier, "identifier")?,
            fullname: required(self.fullname, "fullname")?,
            customer_type: required(self.customer_type, "type")?,
            address: required(self.address, "address")?,
            phone: required(self.phone, "phone")?,
            email: required(self.email, "email")?,
            birthday: required(self.birthday, "birthday")?,
            authorized_signers,
        })
    }
}

impl AuthorizedSignerPayload {
    pub fn required_fields(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("fullname", self.fullname.as_deref()),
            ("cargo", self.cargo.as_deref()),
            ("dni", self.dni.as_deref()),
        ]
    }

    pub fn into_signer(self) -> Result<AuthorizedSigner, DomainError> {
        validator::require_signer_fields_present(&self)?;
        validator::require_signer_fields_non_blank(&self)?;

        Ok(AuthorizedSigner {
            fullname: required(self.fullname, "fullname")?,
            cargo: required(self.cargo, "cargo")?,
            dni: required(self.dni, "dni")?,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, DomainError> {
    value.ok_or(DomainError::MissingField { field })
}
