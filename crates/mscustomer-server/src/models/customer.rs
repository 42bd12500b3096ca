//! Customer and AuthorizedSigner request/response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use mscustomer::{AuthorizedSigner, AuthorizedSignerPayload, Customer, CustomerPayload};

/// Customer request body for create and update
#[derive(Debug, Deserialize, ToSchema)]
pub struct CustomerRequest {
    /// Selects the record on update; ignored on create
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub identifier: Option<String>,
    pub fullname: Option<String>,
    /// PERSONA or EMPRESA, any case
    #[serde(rename = "type")]
    pub customer_type: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<String>,
    #[serde(rename = "authorizedSigners")]
    pub authorized_signers: Option<Vec<AuthorizedSignerRequest>>,
}

/// Authorized signer request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthorizedSignerRequest {
    pub fullname: Option<String>,
    pub cargo: Option<String>,
    pub dni: Option<String>,
}

/// Customer response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub identifier: String,
    pub fullname: String,
    #[serde(rename = "type")]
    pub customer_type: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub birthday: String,
    #[serde(
        rename = "authorizedSigners",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub authorized_signers: Option<Vec<AuthorizedSignerResponse>>,
}

/// Authorized signer response
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorizedSignerResponse {
    pub fullname: String,
    pub cargo: String,
    pub dni: String,
}

impl From<CustomerRequest> for CustomerPayload {
    fn from(req: CustomerRequest) -> Self {
        Self {
            id: req.id,
            identifier: req.identifier,
            fullname: req.fullname,
            customer_type: req.customer_type,
            address: req.address,
            phone: req.phone,
            email: req.email,
            birthday: req.birthday,
            authorized_signers: req
                .authorized_signers
                .map(|signers| signers.into_iter().map(Into::into).collect()),
        }
    }
}

impl From<AuthorizedSignerRequest> for AuthorizedSignerPayload {
    fn from(req: AuthorizedSignerRequest) -> Self {
        Self {
            fullname: req.fullname,
            cargo: req.cargo,
            dni: req.dni,
        }
    }
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            identifier: customer.identifier,
            fullname: customer.fullname,
            customer_type: customer.customer_type,
            address: customer.address,
            phone: customer.phone,
            email: customer.email,
            birthday: customer.birthday,
            authorized_signers: customer
                .authorized_signers
                .map(|signers| signers.into_iter().map(Into::into).collect()),
        }
    }
}

impl From<AuthorizedSigner> for AuthorizedSignerResponse {
    fn from(signer: AuthorizedSigner) -> Self {
        Self {
            fullname: signer.fullname,
            cargo: signer.cargo,
            dni: signer.dni,
        }
    }
}
