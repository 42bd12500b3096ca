//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

#[cfg(test)]
pub mod memory;
pub mod postgres;

// Re-exports
#[cfg(test)]
pub use memory::InMemoryCustomerRepository;
pub use postgres::PgCustomerRepository;
