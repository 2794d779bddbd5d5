//! # CarePortal Core
//!
//! Core business logic and domain layer for the email verification service.
//! This crate contains the verification code entity, business services,
//! repository interfaces, the email template renderer, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod templates;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
