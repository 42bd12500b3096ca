//! Customer API Data Models
//!
//! Wire shapes of the customer document. Requests keep every field optional
//! so the domain validator can report exactly what is missing.

mod customer;

pub use customer::*;
