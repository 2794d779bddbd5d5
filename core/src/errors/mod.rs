//! Error types for the verification domain

pub mod domain_error;

pub use domain_error::{DomainError, DomainResult, ValidationError, VerificationError};
