//! In-memory implementation of CustomerRepository
//!
//! Backs the service and route tests; nothing here survives a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use mscustomer::{Customer, CustomerRepository, DomainError};

/// Process-local store keyed by customer ID
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<String, Customer>>,
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.get(id).cloned())
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers
            .values()
            .find(|c| c.identifier == identifier)
            .cloned())
    }

    async fn save(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().await;
        customers.insert(customer.id.clone(), customer.clone());
        Ok(customer.clone())
    }

    async fn delete(&self, customer: &Customer) -> Result<(), DomainError> {
        let mut customers = self.customers.write().await;
        customers.remove(&customer.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str, identifier: &str) -> Customer {
        Customer {
            id: id.to_string(),
            identifier: identifier.to_string(),
            fullname: "Ana Torres".to_string(),
            customer_type: "PERSONA".to_string(),
            address: "Calle 1".to_string(),
            phone: "999".to_string(),
            email: "ana@example.com".to_string(),
            birthday: "1990-05-05".to_string(),
            authorized_signers: None,
        }
    }

    #[tokio::test]
    async fn test_save_replaces_by_id() {
        let repo = InMemoryCustomerRepository::default();
        repo.save(&customer("c-1", "X1")).await.unwrap();

        let mut changed = customer("c-1", "X1");
        changed.phone = "111".to_string();
        repo.save(&changed).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].phone, "111");
    }

    #[tokio::test]
    async fn test_find_by_identifier() {
        let repo = InMemoryCustomerRepository::default();
        repo.save(&customer("c-1", "X1")).await.unwrap();
        repo.save(&customer("c-2", "X2")).await.unwrap();

        let found = repo.find_by_identifier("X2").await.unwrap().unwrap();
        assert_eq!(found.id, "c-2");
        assert!(repo.find_by_identifier("X3").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = InMemoryCustomerRepository::default();
        let saved = repo.save(&customer("c-1", "X1")).await.unwrap();

        repo.delete(&saved).await.unwrap();
        assert!(repo.find_by_id("c-1").await.unwrap().is_none());
    }
}
