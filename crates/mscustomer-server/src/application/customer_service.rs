//! Customer Application Service (Use Case)
//!
//! Orchestrates validation and persistence for Customers and their
//! authorized signers. A failed check never reaches the repository.

use std::sync::Arc;

use mscustomer::{
    validator, AuthorizedSigner, AuthorizedSignerPayload, Customer, CustomerPayload,
    CustomerRepository, DomainError,
};

/// Application service for Customer operations
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Customers
    pub async fn list_all(&self) -> Result<Vec<Customer>, DomainError> {
        tracing::debug!("list_all:: init");
        self.repo.find_all().await
    }

    /// Get a Customer by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Customer, DomainError> {
        tracing::debug!("get_by_id:: init ({})", id);
        self.find(id).await
    }

    /// Create a new Customer with a fresh system ID
    pub async fn create(&self, payload: CustomerPayload) -> Result<Customer, DomainError> {
        tracing::debug!("create:: init");

        validator::require_all_fields_present(&payload)?;
        validator::require_all_fields_non_blank(&payload)?;
        validator::require_valid_type(&payload)?;
        validator::require_identifier_unused(
            payload.identifier.as_deref().unwrap_or_default(),
            self.repo.as_ref(),
        )
        .await?;
        validator::require_signers_only_for_company(&payload)?;

        let customer = payload.into_customer(Customer::generate_id())?;
        let saved = self.repo.save(&customer).await?;

        tracing::info!("Created Customer: {} ({})", saved.identifier, saved.id);

        Ok(saved)
    }

    /// Update the mutable fields of the Customer selected by `payload.id`
    pub async fn update(&self, payload: CustomerPayload) -> Result<Customer, DomainError> {
        tracing::debug!("update:: init");

        validator::require_all_fields_present(&payload)?;
        validator::require_all_fields_non_blank(&payload)?;
        validator::require_valid_type(&payload)?;

        let id = payload.id.clone().unwrap_or_default();
        let mut current = self.find(&id).await?;

        let incoming = payload.into_customer(current.id.clone())?;
        // Type is immutable, so the signer rule is checked against the stored record
        if current.is_individual() && incoming.authorized_signers.is_some() {
            return Err(DomainError::SignerOnIndividual);
        }

        current.apply_update(incoming);
        let saved = self.repo.save(&current).await?;

        tracing::info!("Updated Customer: {}", saved.id);

        Ok(saved)
    }

    /// Delete a Customer
    pub async fn delete_by_id(&self, id: &str) -> Result<(), DomainError> {
        tracing::debug!("delete_by_id:: init ({})", id);

        let customer = self.find(id).await?;
        self.repo.delete(&customer).await?;

        tracing::info!("Deleted Customer: {}", id);
        Ok(())
    }

    /// Get the authorized signers of a Customer.
    ///
    /// A collection that was never initialized is a conflict, not an empty list.
    pub async fn list_signers(&self, id: &str) -> Result<Vec<AuthorizedSigner>, DomainError> {
        tracing::debug!("list_signers:: init ({})", id);

        self.find(id)
            .await?
            .authorized_signers
            .ok_or_else(|| DomainError::SignersConflict {
                customer_id: id.to_string(),
            })
    }

    /// Append an authorized signer to a Customer
    pub async fn add_signer(
        &self,
        id: &str,
        payload: AuthorizedSignerPayload,
    ) -> Result<Customer, DomainError> {
        tracing::debug!("add_signer:: init ({})", id);

        let signer = payload.into_signer()?;
        let mut customer = self.find(id).await?;
        customer.push_signer(signer);
        let saved = self.repo.save(&customer).await?;

        tracing::info!("Added authorized signer to Customer: {}", id);

        Ok(saved)
    }

    async fn find(&self, id: &str) -> Result<Customer, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Customer", id))
    }
}
