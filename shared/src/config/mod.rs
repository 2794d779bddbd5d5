//! Configuration module
//!
//! All configuration is collected into a single [`AppConfig`] struct that is
//! built once at process start and passed by reference into each service
//! constructor. Nothing in the codebase reads environment variables after
//! startup.

pub mod database;
pub mod environment;
pub mod mail;
pub mod server;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use environment::Environment;
pub use mail::MailConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment the process runs in
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Mail transport configuration
    pub mail: MailConfig,

    /// Verification flow configuration
    pub verification: VerificationConfig,
}

/// Tunables for the verification code flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Minutes until an issued code expires
    pub code_ttl_minutes: i64,

    /// Maximum failed submissions before a code is locked out
    pub max_attempts: u32,

    /// Base URL the magic link in the email points at
    pub base_url: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: 10,
            max_attempts: 5,
            base_url: String::from("http://localhost:8080"),
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            code_ttl_minutes: std::env::var("VERIFICATION_CODE_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.code_ttl_minutes),
            max_attempts: std::env::var("VERIFICATION_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_attempts),
            base_url: std::env::var("VERIFICATION_BASE_URL").unwrap_or(defaults.base_url),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            mail: MailConfig::default(),
            verification: VerificationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            mail: MailConfig::from_env(),
            verification: VerificationConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_verification_config_matches_flow_constants() {
        let config = VerificationConfig::default();
        assert_eq!(config.code_ttl_minutes, 10);
        assert_eq!(config.max_attempts, 5);
    }

    #[test]
    fn default_app_config_is_development() {
        let config = AppConfig::default();
        assert!(config.environment.is_development());
    }
}
