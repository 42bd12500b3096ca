//! PostgreSQL Repository Implementations

mod customer_repository;

pub use customer_repository::PgCustomerRepository;
