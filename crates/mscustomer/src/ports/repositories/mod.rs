//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod customer_repository;

pub use customer_repository::*;
