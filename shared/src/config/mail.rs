//! Mail transport configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the outbound mail provider
///
/// The provider is an HTTP API (API key + endpoint); the service refuses to
/// issue verification codes while this is unconfigured so that codes which
/// can never be delivered are never written to the store.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MailConfig {
    /// Provider API key (bearer token)
    pub api_key: String,

    /// Provider send endpoint, e.g. `https://api.mailprovider.example/v3/send`
    pub endpoint: String,

    /// Default "from" address for outbound mail
    pub from_address: String,
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("MAIL_API_KEY").unwrap_or_default(),
            endpoint: std::env::var("MAIL_ENDPOINT").unwrap_or_default(),
            from_address: std::env::var("MAIL_FROM_ADDRESS").unwrap_or_default(),
        }
    }

    /// Whether every credential needed to send mail is present
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
            && !self.endpoint.trim().is_empty()
            && !self.from_address.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_not_configured() {
        assert!(!MailConfig::default().is_configured());
    }

    #[test]
    fn configured_when_all_fields_present() {
        let config = MailConfig {
            api_key: "key".into(),
            endpoint: "https://mail.example/send".into(),
            from_address: "no-reply@careportal.example".into(),
        };
        assert!(config.is_configured());
    }

    #[test]
    fn blank_from_address_is_not_configured() {
        let config = MailConfig {
            api_key: "key".into(),
            endpoint: "https://mail.example/send".into(),
            from_address: "   ".into(),
        };
        assert!(!config.is_configured());
    }
}
