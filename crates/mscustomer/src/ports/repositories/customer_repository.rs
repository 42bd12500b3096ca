//! Customer Repository Port
//!
//! Abstract interface for Customer persistence operations. Authorized signers
//! have no identity of their own and are persisted as part of their customer.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Customer};

/// Repository interface for Customer entities
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find all Customers, in store-defined order
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError>;

    /// Find a Customer by system ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, DomainError>;

    /// Find a Customer by external identifier
    async fn find_by_identifier(&self, identifier: &str)
        -> Result<Option<Customer>, DomainError>;

    /// Save a Customer (insert or replace by ID)
    async fn save(&self, customer: &Customer) -> Result<Customer, DomainError>;

    /// Delete a Customer
    async fn delete(&self, customer: &Customer) -> Result<(), DomainError>;
}
