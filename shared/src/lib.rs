//! Shared utilities and common types for the CarePortal verification service
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response body structures
//! - Validation utilities (email shape, onboarding fields, log masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, MailConfig, ServerConfig, VerificationConfig};
pub use types::response::{ErrorBody, SuccessBody};
pub use utils::validation;
