//! Verification service module for email-based authentication
//!
//! This module provides the complete verification code workflow:
//! - code generation and hashing
//! - issuance with transactional supersession of prior codes
//! - delivery through a pluggable mail transport
//! - verification with expiry, attempt limiting, and single consumption

pub mod code;
mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use code::{generate_code, hash_code};
pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::MailerTrait;
pub use types::IssueCodeResult;
