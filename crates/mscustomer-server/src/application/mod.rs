//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! validation rules and repositories.

mod customer_service;

pub use customer_service::CustomerService;
