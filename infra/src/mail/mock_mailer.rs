//! Mock mail transport for development and tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use cp_core::services::verification::MailerTrait;
use cp_shared::utils::validation::mask_email;

/// A message captured by [`MockMailer`]
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// In-memory mailer that records every message instead of sending it
///
/// Used in development when no mail provider is configured and in
/// integration tests that assert on the rendered messages.
pub struct MockMailer {
    sent: Arc<RwLock<Vec<SentMail>>>,
    counter: AtomicU64,
    configured: bool,
    simulate_failure: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock with explicit behaviour flags
    pub fn with_options(configured: bool, simulate_failure: bool) -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            counter: AtomicU64::new(0),
            configured,
            simulate_failure,
        }
    }

    /// Messages captured so far
    pub fn sent_messages(&self) -> Vec<SentMail> {
        self.sent.read().map(|v| v.clone()).unwrap_or_default()
    }

    /// Number of messages captured so far
    pub fn sent_count(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    /// The most recently captured message, if any
    pub fn last_message(&self) -> Option<SentMail> {
        self.sent.read().ok().and_then(|v| v.last().cloned())
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailerTrait for MockMailer {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String> {
        if self.simulate_failure {
            return Err("simulated mail provider failure".to_string());
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let message_id = format!("mock-{}", n);

        if let Ok(mut sent) = self.sent.write() {
            sent.push(SentMail {
                to: to.to_string(),
                subject: subject.to_string(),
                html_body: html_body.to_string(),
            });
        }

        tracing::debug!(
            to = %mask_email(to),
            message_id = %message_id,
            "Mock mailer captured message"
        );

        Ok(message_id)
    }
}
