//! Mock mail transport for verification service tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::services::verification::traits::MailerTrait;

/// A sent message captured by the mock mailer
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Mock mailer that records messages instead of sending them
pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<SentMail>>>,
    send_count: AtomicU64,
    configured: bool,
    should_fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            send_count: AtomicU64::new(0),
            configured: true,
            should_fail: false,
        }
    }

    /// Mailer that reports missing transport credentials
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    /// Mailer whose sends always fail at the provider
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }

    pub fn last_sent(&self) -> Option<SentMail> {
        self.sent.lock().unwrap().last().cloned()
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
        if self.should_fail {
            return Err("provider returned 429 Too Many Requests".to_string());
        }

        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
        });
        let n = self.send_count.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("mock-msg-{}", n))
    }
}
