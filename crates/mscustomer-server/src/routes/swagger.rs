//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{
    AuthorizedSignerRequest, AuthorizedSignerResponse, CustomerRequest, CustomerResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        super::customer::create_customer,
        super::customer::list_customers,
        super::customer::get_customer,
        super::customer::update_customer,
        super::customer::delete_customer,
        super::customer::list_authorized_signers,
        super::customer::add_authorized_signer,
    ),
    info(
        title = "Customer API",
        version = "0.1.0",
        description = "Customer records for individuals (PERSONA) and companies (EMPRESA), with the authorized signers of each company.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Customer", description = "Customer and authorized signer management"),
    ),
    components(
        schemas(
            crate::HealthCheck,
            CustomerRequest,
            CustomerResponse,
            AuthorizedSignerRequest,
            AuthorizedSignerResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
