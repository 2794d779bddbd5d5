//! # Infrastructure Layer
//!
//! Concrete implementations for external services used by the verification
//! flow:
//! - **Database**: MySQL verification code repository using SQLx
//! - **Mail**: HTTP mail provider client and a mock transport for
//!   development and tests

use thiserror::Error;

pub mod database;
pub mod mail;

pub use database::{DatabasePool, MySqlVerificationCodeRepository};
pub use mail::{HttpMailer, MockMailer};

/// Errors raised while constructing infrastructure components
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Mail transport error: {0}")]
    Mail(String),
}
