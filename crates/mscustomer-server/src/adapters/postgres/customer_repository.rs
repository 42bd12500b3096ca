//! PostgreSQL implementation of CustomerRepository
//!
//! Authorized signers live in a JSONB column so each row keeps the shape of
//! the customer document.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use mscustomer::{AuthorizedSigner, Customer, CustomerRepository, DomainError};

const CUSTOMER_COLUMNS: &str = "id, identifier, fullname, customer_type, address, phone, email, birthday, authorized_signers";

/// PostgreSQL implementation of CustomerRepository
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: String,
    identifier: String,
    fullname: String,
    customer_type: String,
    address: String,
    phone: String,
    email: String,
    birthday: String,
    authorized_signers: Option<Json<Vec<AuthorizedSigner>>>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: row.id,
            identifier: row.identifier,
            fullname: row.fullname,
            customer_type: row.customer_type,
            address: row.address,
            phone: row.phone,
            email: row.email,
            birthday: row.birthday,
            authorized_signers: row.authorized_signers.map(|Json(signers)| signers),
        }
    }
}

/// Conflicts on `id` are absorbed by the upsert, so a unique violation here
/// can only come from the `identifier` constraint.
fn save_error(err: sqlx::Error, identifier: &str) -> DomainError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::DuplicateUser(identifier.to_string())
        }
        other => DomainError::Repository(other.to_string()),
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let rows = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, DomainError> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Customer>, DomainError> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE identifier = $1"
        ))
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            r#"
            INSERT INTO customers ({CUSTOMER_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE
            SET identifier = EXCLUDED.identifier,
                fullname = EXCLUDED.fullname,
                customer_type = EXCLUDED.customer_type,
                address = EXCLUDED.address,
                phone = EXCLUDED.phone,
                email = EXCLUDED.email,
                birthday = EXCLUDED.birthday,
                authorized_signers = EXCLUDED.authorized_signers
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(&customer.id)
        .bind(&customer.identifier)
        .bind(&customer.fullname)
        .bind(&customer.customer_type)
        .bind(&customer.address)
        .bind(&customer.phone)
        .bind(&customer.email)
        .bind(&customer.birthday)
        .bind(customer.authorized_signers.as_ref().map(Json))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| save_error(e, &customer.identifier))?;

        Ok(row.into())
    }

    async fn delete(&self, customer: &Customer) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(&customer.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;

    use sqlx::error::{DatabaseError, ErrorKind};

    #[derive(Debug, thiserror::Error)]
    #[error("duplicate key value violates unique constraint \"customers_identifier_key\"")]
    struct IdentifierTaken;

    impl DatabaseError for IdentifierTaken {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed("23505"))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }
    }

    #[test]
    fn test_unique_violation_on_save_is_duplicate_user() {
        let err = save_error(sqlx::Error::Database(Box::new(IdentifierTaken)), "X1");
        assert_eq!(err, DomainError::DuplicateUser("X1".to_string()));
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn test_other_save_failures_stay_repository_errors() {
        let err = save_error(sqlx::Error::PoolTimedOut, "X1");
        assert!(matches!(err, DomainError::Repository(_)));
        assert_eq!(err.status(), 500);
    }
}
