//! Traits for mail transport integration

use async_trait::async_trait;

/// Trait for the outbound mail transport
#[async_trait]
pub trait MailerTrait: Send + Sync {
    /// Whether the transport has everything it needs to send mail
    ///
    /// Checked before any store write on issuance, so a misconfigured
    /// deployment never issues codes it cannot deliver.
    fn is_configured(&self) -> bool;

    /// Send an HTML email, returning the provider message id
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String>;
}
