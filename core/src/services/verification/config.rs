//! Verification service configuration

use cp_shared::config::VerificationConfig;

use crate::domain::entities::verification_code::{DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Minutes until an issued code expires
    pub code_ttl_minutes: i64,

    /// Maximum failed submissions before a code is locked out
    pub max_attempts: u32,

    /// Base URL used to build the magic link in the verification email
    pub base_url: String,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: DEFAULT_EXPIRATION_MINUTES,
            max_attempts: MAX_ATTEMPTS,
            base_url: String::from("http://localhost:8080"),
        }
    }
}

impl From<&VerificationConfig> for VerificationServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_ttl_minutes: config.code_ttl_minutes,
            max_attempts: config.max_attempts,
            base_url: config.base_url.clone(),
        }
    }
}
