//! Customer Validator
//!
//! Checks applied to inbound payloads before anything is persisted. Each
//! check stops at the first unmet condition. Presence and blankness are
//! separate passes so a caller learns exactly which of the two went wrong.

use crate::domain::{AuthorizedSignerPayload, CustomerPayload, CustomerType, DomainError};
use crate::ports::CustomerRepository;

/// Fail with `MissingField` if any required customer field is absent
pub fn require_all_fields_present(customer: &CustomerPayload) -> Result<(), DomainError> {
    first_missing(&customer.required_fields())
}

/// Fail with `EmptyValue` if any required customer field is empty or whitespace
pub fn require_all_fields_non_blank(customer: &CustomerPayload) -> Result<(), DomainError> {
    first_blank(&customer.required_fields())
}

/// Fail with `InvalidPersonType` unless `type` is PERSONA or EMPRESA, any case
pub fn require_valid_type(customer: &CustomerPayload) -> Result<CustomerType, DomainError> {
    let raw = customer.customer_type.as_deref().unwrap_or_default();
    raw.parse::<CustomerType>()
        .map_err(|_| DomainError::InvalidPersonType(raw.to_string()))
}

/// Fail with `DuplicateUser` if a customer with `identifier` already exists
pub async fn require_identifier_unused<R>(identifier: &str, lookup: &R) -> Result<(), DomainError>
where
    R: CustomerRepository + ?Sized,
{
    match lookup.find_by_identifier(identifier).await? {
        Some(existing) => {
            tracing::debug!(
                "Identifier {} already registered to customer {}",
                identifier,
                existing.id
            );
            Err(DomainError::DuplicateUser(identifier.to_string()))
        }
        None => Ok(()),
    }
}

/// Fail with `SignerOnIndividual` if a PERSONA carries any signer collection,
/// including an empty one
pub fn require_signers_only_for_company(customer: &CustomerPayload) -> Result<(), DomainError> {
    let refuses_signers = customer
        .customer_type
        .as_deref()
        .and_then(|t| t.parse::<CustomerType>().ok())
        .is_some_and(|t| !t.allows_signers());

    if refuses_signers && customer.authorized_signers.is_some() {
        return Err(DomainError::SignerOnIndividual);
    }
    Ok(())
}

/// Fail with `MissingField` if any of fullname, cargo or dni is absent
pub fn require_signer_fields_present(signer: &AuthorizedSignerPayload) -> Result<(), DomainError> {
    first_missing(&signer.required_fields())
}

/// Fail with `EmptyValue` if any of fullname, cargo or dni is blank
pub fn require_signer_fields_non_blank(
    signer: &AuthorizedSignerPayload,
) -> Result<(), DomainError> {
    first_blank(&signer.required_fields())
}

fn first_missing(fields: &[(&'static str, Option<&str>)]) -> Result<(), DomainError> {
    match fields.iter().find(|(_, value)| value.is_none()) {
        Some((field, _)) => Err(DomainError::MissingField { field: *field }),
        None => Ok(()),
    }
}

fn first_blank(fields: &[(&'static str, Option<&str>)]) -> Result<(), DomainError> {
    let blank = fields
        .iter()
        .find(|(_, value)| value.is_some_and(|v| v.trim().is_empty()));

    match blank {
        Some((field, _)) => Err(DomainError::EmptyValue { field: *field }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Customer;
    use async_trait::async_trait;

    fn payload() -> CustomerPayload {
        CustomerPayload {
            id: None,
            identifier: Some("X1".to_string()),
            fullname: Some("A".to_string()),
            customer_type: Some("persona".to_string()),
            address: Some("a".to_string()),
            phone: Some("1".to_string()),
            email: Some("e@e.com".to_string()),
            birthday: Some("2000-01-01".to_string()),
            authorized_signers: None,
        }
    }

    fn signer() -> AuthorizedSignerPayload {
        AuthorizedSignerPayload {
            fullname: Some("Rosa Diaz".to_string()),
            cargo: Some("Gerente".to_string()),
            dni: Some("11111111".to_string()),
        }
    }

    /// Lookup that knows a single identifier
    struct SingleIdentifier(&'static str);

    #[async_trait]
    impl CustomerRepository for SingleIdentifier {
        async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, _id: &str) -> Result<Option<Customer>, DomainError> {
            Ok(None)
        }

        async fn find_by_identifier(
            &self,
            identifier: &str,
        ) -> Result<Option<Customer>, DomainError> {
            if identifier != self.0 {
                return Ok(None);
            }
            let mut existing = payload().into_customer("existing".to_string())?;
            existing.identifier = identifier.to_string();
            Ok(Some(existing))
        }

        async fn save(&self, customer: &Customer) -> Result<Customer, DomainError> {
            Ok(customer.clone())
        }

        async fn delete(&self, _customer: &Customer) -> Result<(), DomainError> {
            Ok(())
        }
    }

    #[test]
    fn test_complete_payload_passes() {
        let customer = payload();
        assert!(require_all_fields_present(&customer).is_ok());
        assert!(require_all_fields_non_blank(&customer).is_ok());
        assert_eq!(require_valid_type(&customer), Ok(CustomerType::Persona));
        assert!(require_signers_only_for_company(&customer).is_ok());
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        let cases: [(&'static str, fn(&mut CustomerPayload)); 7] = [
            ("identifier", |c| c.identifier = None),
            ("fullname", |c| c.fullname = None),
            ("type", |c| c.customer_type = None),
            ("address", |c| c.address = None),
            ("phone", |c| c.phone = None),
            ("email", |c| c.email = None),
            ("birthday", |c| c.birthday = None),
        ];

        for (field, clear) in cases {
            let mut customer = payload();
            clear(&mut customer);
            assert_eq!(
                require_all_fields_present(&customer),
                Err(DomainError::MissingField { field }),
            );
        }
    }

    #[test]
    fn test_first_missing_field_wins() {
        let customer = CustomerPayload {
            phone: None,
            fullname: None,
            ..payload()
        };
        assert_eq!(
            require_all_fields_present(&customer),
            Err(DomainError::MissingField { field: "fullname" }),
        );
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let customer = CustomerPayload {
            email: Some(" \t ".to_string()),
            ..payload()
        };
        assert!(require_all_fields_present(&customer).is_ok());
        assert_eq!(
            require_all_fields_non_blank(&customer),
            Err(DomainError::EmptyValue { field: "email" }),
        );
    }

    #[test]
    fn test_empty_string_is_blank() {
        let customer = CustomerPayload {
            identifier: Some(String::new()),
            ..payload()
        };
        assert_eq!(
            require_all_fields_non_blank(&customer),
            Err(DomainError::EmptyValue { field: "identifier" }),
        );
    }

    #[test]
    fn test_type_accepts_any_case() {
        for raw in ["persona", "PERSONA", "Empresa", "eMpReSa"] {
            let customer = CustomerPayload {
                customer_type: Some(raw.to_string()),
                ..payload()
            };
            assert!(require_valid_type(&customer).is_ok(), "{raw} should be valid");
        }
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let customer = CustomerPayload {
            customer_type: Some("COMPANY".to_string()),
            ..payload()
        };
        assert_eq!(
            require_valid_type(&customer),
            Err(DomainError::InvalidPersonType("COMPANY".to_string())),
        );
    }

    #[test]
    fn test_persona_with_empty_signer_list_is_rejected() {
        let customer = CustomerPayload {
            authorized_signers: Some(vec![]),
            ..payload()
        };
        assert_eq!(
            require_signers_only_for_company(&customer),
            Err(DomainError::SignerOnIndividual),
        );
    }

    #[test]
    fn test_empresa_may_carry_signers() {
        let customer = CustomerPayload {
            customer_type: Some("EMPRESA".to_string()),
            authorized_signers: Some(vec![signer()]),
            ..payload()
        };
        assert!(require_signers_only_for_company(&customer).is_ok());
    }

    #[test]
    fn test_signer_checks() {
        assert!(require_signer_fields_present(&signer()).is_ok());
        assert!(require_signer_fields_non_blank(&signer()).is_ok());

        let missing = AuthorizedSignerPayload {
            cargo: None,
            ..signer()
        };
        assert_eq!(
            require_signer_fields_present(&missing),
            Err(DomainError::MissingField { field: "cargo" }),
        );

        let blank = AuthorizedSignerPayload {
            fullname: Some("".to_string()),
            ..signer()
        };
        assert_eq!(
            require_signer_fields_non_blank(&blank),
            Err(DomainError::EmptyValue { field: "fullname" }),
        );
    }

    #[tokio::test]
    async fn test_identifier_uniqueness() {
        let lookup = SingleIdentifier("X1");

        assert_eq!(
            require_identifier_unused("X1", &lookup).await,
            Err(DomainError::DuplicateUser("X1".to_string())),
        );
        assert!(require_identifier_unused("X2", &lookup).await.is_ok());
    }
}
