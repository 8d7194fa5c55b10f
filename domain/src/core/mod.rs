//! Core domain concepts shared across all subdomains.
//!
//! - [`value::FieldValue`]: a submitted or stored form value
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod value;
