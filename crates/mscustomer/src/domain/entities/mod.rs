//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Customer: persisted person or company record
//! - AuthorizedSigner: signer nested inside a company Customer
//! - Payloads: unvalidated inbound shapes of both

mod customer;
mod payload;

pub use customer::*;
pub use payload::*;
