//! HTTP mail provider client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use cp_core::services::verification::MailerTrait;
use cp_shared::config::MailConfig;
use cp_shared::utils::validation::mask_email;

#[derive(Serialize)]
struct SendMailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendMailResponse {
    id: Option<String>,
}

/// Mailer backed by an HTTP mail provider API
///
/// Sends a JSON payload to the configured endpoint with a bearer token.
/// The provider responds with a message id used for delivery tracking.
pub struct HttpMailer {
    client: Client,
    config: MailConfig,
}

impl HttpMailer {
    /// Create a mailer from explicit configuration
    pub fn new(config: MailConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }
}

#[async_trait]
impl MailerTrait for HttpMailer {
    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String> {
        let payload = SendMailRequest {
            from: &self.config.from_address,
            to,
            subject,
            html: html_body,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    to = %mask_email(to),
                    error = %e,
                    "Mail provider request failed"
                );
                format!("mail provider request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                to = %mask_email(to),
                status = %status,
                body = %body,
                "Mail provider rejected message"
            );
            return Err(format!("mail provider returned {}: {}", status, body));
        }

        let parsed: SendMailResponse = response
            .json()
            .await
            .map_err(|e| format!("malformed mail provider response: {}", e))?;

        let message_id = parsed.id.unwrap_or_default();
        tracing::info!(
            to = %mask_email(to),
            message_id = %message_id,
            "Mail accepted by provider"
        );

        Ok(message_id)
    }
}
