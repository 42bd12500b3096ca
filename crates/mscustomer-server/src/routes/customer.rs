//! Customer Routes - Customer and Authorized Signer Management
//!
//! HTTP handlers that delegate to CustomerService for business logic.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::{ApiError, ErrorResponse};
use crate::models::{
    AuthorizedSignerRequest, AuthorizedSignerResponse, CustomerRequest, CustomerResponse,
};
use crate::AppState;

/// Create new Customer
#[utoipa::path(
    post,
    path = "/customer",
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Customer created"),
        (status = 400, description = "Invalid request or identifier already registered", body = ErrorResponse)
    ),
    tag = "Customer"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(payload) = payload?;
    state.customer_service.create(payload.into()).await?;

    tracing::info!("create_customer:: completed");
    Ok(StatusCode::CREATED)
}

/// List all Customers
#[utoipa::path(
    get,
    path = "/customer",
    responses(
        (status = 200, description = "List of all Customers", body = Vec<CustomerResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Customer"
)]
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = state.customer_service.list_all().await?;

    tracing::info!("list_customers:: completed ({} customers)", customers.len());
    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

/// Get Customer by ID
#[utoipa::path(
    get,
    path = "/customer/{customer_id}",
    params(
        ("customer_id" = String, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer found", body = CustomerResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "Customer"
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = state.customer_service.get_by_id(&customer_id).await?;
    Ok(Json(customer.into()))
}

/// Update Customer
#[utoipa::path(
    put,
    path = "/customer",
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Customer updated"),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "Customer"
)]
pub async fn update_customer(
    State(state): State<AppState>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(payload) = payload?;
    state.customer_service.update(payload.into()).await?;

    tracing::info!("update_customer:: completed");
    Ok(StatusCode::OK)
}

/// Delete Customer
#[utoipa::path(
    delete,
    path = "/customer/{customer_id}",
    params(
        ("customer_id" = String, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer deleted"),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "Customer"
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.customer_service.delete_by_id(&customer_id).await?;

    tracing::info!("delete_customer:: completed");
    Ok(StatusCode::OK)
}

/// List authorized signers of a Customer
#[utoipa::path(
    get,
    path = "/customer/authorized_signers/{customer_id}",
    params(
        ("customer_id" = String, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Authorized signers", body = Vec<AuthorizedSignerResponse>),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 409, description = "Customer has no authorized signers", body = ErrorResponse)
    ),
    tag = "Customer"
)]
pub async fn list_authorized_signers(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Vec<AuthorizedSignerResponse>>, ApiError> {
    let signers = state.customer_service.list_signers(&customer_id).await?;

    tracing::info!("list_authorized_signers:: completed");
    Ok(Json(signers.into_iter().map(Into::into).collect()))
}

/// Add an authorized signer to a Customer
#[utoipa::path(
    post,
    path = "/customer/authorized_signers/{customer_id}",
    params(
        ("customer_id" = String, Path, description = "Customer ID")
    ),
    request_body = AuthorizedSignerRequest,
    responses(
        (status = 201, description = "Authorized signer added"),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "Customer"
)]
pub async fn add_authorized_signer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    payload: Result<Json<AuthorizedSignerRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(payload) = payload?;
    state
        .customer_service
        .add_signer(&customer_id, payload.into())
        .await?;

    tracing::info!("add_authorized_signer:: completed");
    Ok(StatusCode::CREATED)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/customer",
            get(list_customers)
                .post(create_customer)
                .put(update_customer),
        )
        .route(
            "/customer/:customer_id",
            get(get_customer).delete(delete_customer),
        )
        .route(
            "/customer/authorized_signers/:customer_id",
            get(list_authorized_signers).post(add_authorized_signer),
        )
}
