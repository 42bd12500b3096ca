//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod customer_type;

pub use customer_type::*;
