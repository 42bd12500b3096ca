//! Customer API Routes
//!
//! - /customer - Customer management
//! - /customer/authorized_signers/:customer_id - Authorized signers of a company customer

pub mod customer;
pub mod swagger;
