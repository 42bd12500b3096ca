//! Customer Domain Library
//!
//! Core domain types and interfaces for the customer microservice.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Customer and its nested AuthorizedSigner, plus inbound payloads
//!   - `value_objects/`: Immutable value types (CustomerType)
//!   - `services/`: Validation rules applied before anything is persisted
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use mscustomer::domain::{Customer, CustomerPayload};
//! use mscustomer::ports::CustomerRepository;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    validator, AuthorizedSigner, AuthorizedSignerPayload, Customer, CustomerPayload, CustomerType,
    DomainError,
};
pub use ports::CustomerRepository;
