//! Verification code entity for email-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of verification attempts allowed
pub const MAX_ATTEMPTS: u32 = 5;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 10;

/// Verification code entity for email-based authentication
///
/// Only the SHA-256 hash of the code is ever held here; the plaintext exists
/// transiently in the issuance path and in the outbound email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Unique identifier for the verification code
    pub id: Uuid,

    /// Email address this code was sent to
    pub email: String,

    /// Hex-encoded SHA-256 hash of the 6-digit code
    pub code_hash: String,

    /// Number of failed verification attempts made
    pub attempts: u32,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Timestamp when the code was successfully used, if ever
    pub consumed_at: Option<DateTime<Utc>>,
}

impl VerificationCode {
    /// Creates a new verification code record from an already-hashed code
    pub fn new(email: String, code_hash: String, expiration_minutes: i64) -> Self {
        let now = Utc::now();
        let expires_at = now + Duration::minutes(expiration_minutes);

        Self {
            id: Uuid::new_v4(),
            email,
            code_hash,
            attempts: 0,
            created_at: now,
            expires_at,
            consumed_at: None,
        }
    }

    /// Checks if the verification code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the verification code has been successfully used
    pub fn is_consumed(&self) -> bool {
        self.consumed_at.is_some()
    }

    /// Checks if the code can still be verified
    ///
    /// A code is active if it hasn't expired, hasn't been consumed, and the
    /// maximum number of attempts hasn't been exceeded.
    pub fn is_active(&self) -> bool {
        !self.is_expired() && !self.is_consumed() && self.attempts < MAX_ATTEMPTS
    }

    /// Gets the number of remaining verification attempts
    pub fn remaining_attempts(&self, max_attempts: u32) -> u32 {
        max_attempts.saturating_sub(self.attempts)
    }

    /// Records a failed verification attempt
    pub fn record_failed_attempt(&mut self) {
        self.attempts += 1;
    }

    /// Marks the code as consumed
    ///
    /// Consuming twice does not move the timestamp; the first consumption
    /// is final.
    pub fn consume(&mut self) {
        if self.consumed_at.is_none() {
            self.consumed_at = Some(Utc::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration as StdDuration;

    fn sample(expiration_minutes: i64) -> VerificationCode {
        VerificationCode::new(
            "test@example.com".to_string(),
            "a".repeat(64),
            expiration_minutes,
        )
    }

    #[test]
    fn new_code_starts_active() {
        let code = sample(DEFAULT_EXPIRATION_MINUTES);

        assert_eq!(code.email, "test@example.com");
        assert_eq!(code.attempts, 0);
        assert!(code.consumed_at.is_none());
        assert!(!code.is_expired());
        assert!(code.is_active());
    }

    #[test]
    fn expiration_is_relative_to_creation() {
        let code = sample(25);
        assert_eq!(code.expires_at, code.created_at + Duration::minutes(25));
    }

    #[test]
    fn zero_minute_code_expires_immediately() {
        let code = sample(0);
        thread::sleep(StdDuration::from_millis(10));

        assert!(code.is_expired());
        assert!(!code.is_active());
    }

    #[test]
    fn consume_is_idempotent() {
        let mut code = sample(DEFAULT_EXPIRATION_MINUTES);

        code.consume();
        let first = code.consumed_at;
        assert!(first.is_some());

        thread::sleep(StdDuration::from_millis(10));
        code.consume();
        assert_eq!(code.consumed_at, first);
        assert!(!code.is_active());
    }

    #[test]
    fn attempts_exhaust_activity() {
        let mut code = sample(DEFAULT_EXPIRATION_MINUTES);

        for i in 1..=MAX_ATTEMPTS {
            code.record_failed_attempt();
            assert_eq!(code.attempts, i);
        }

        assert!(!code.is_active());
        assert_eq!(code.remaining_attempts(MAX_ATTEMPTS), 0);
    }

    #[test]
    fn remaining_attempts_never_underflows() {
        let mut code = sample(DEFAULT_EXPIRATION_MINUTES);
        for _ in 0..MAX_ATTEMPTS + 2 {
            code.record_failed_attempt();
        }
        assert_eq!(code.remaining_attempts(MAX_ATTEMPTS), 0);
    }

    #[test]
    fn serialization_round_trips() {
        let code = sample(DEFAULT_EXPIRATION_MINUTES);
        let json = serde_json::to_string(&code).unwrap();
        let deserialized: VerificationCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, deserialized);
    }
}
