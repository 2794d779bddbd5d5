//! Main verification service implementation

use constant_time_eq::constant_time_eq;
use std::sync::Arc;

use cp_shared::utils::validation::{is_valid_email, mask_email};

use crate::errors::{DomainError, DomainResult, ValidationError, VerificationError};
use crate::templates::EmailTemplate;

use crate::repositories::verification_code::VerificationCodeRepository;

use super::code::{generate_code, hash_code};
use super::config::VerificationServiceConfig;
use super::traits::MailerTrait;
use super::types::IssueCodeResult;

/// Verification service for issuing and checking email codes
pub struct VerificationService<M: MailerTrait, R: VerificationCodeRepository> {
    /// Mail transport for delivering codes
    mailer: Arc<M>,
    /// Persistent store for code records
    repository: Arc<R>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<M: MailerTrait, R: VerificationCodeRepository> VerificationService<M, R> {
    /// Create a new verification service
    pub fn new(mailer: Arc<M>, repository: Arc<R>, config: VerificationServiceConfig) -> Self {
        Self {
            mailer,
            repository,
            config,
        }
    }

    /// Issue a verification code and email it to the address
    ///
    /// Ordering matters here: the transport-configuration check runs before
    /// input validation and before any store write, so a misconfigured
    /// deployment fails fast and never issues codes it cannot deliver.
    ///
    /// # Arguments
    ///
    /// * `email` - Address to send the code to
    /// * `callback_url` - Where the magic link returns the user to
    ///   afterwards; defaults to `/`
    pub async fn issue_code(
        &self,
        email: &str,
        callback_url: Option<&str>,
    ) -> DomainResult<IssueCodeResult> {
        if !self.mailer.is_configured() {
            tracing::error!(
                event = "mailer_unconfigured",
                "Refusing to issue verification code: mail transport is not configured"
            );
            return Err(DomainError::ServerMisconfigured {
                detail: "mail transport credentials are missing".to_string(),
            });
        }

        if email.trim().is_empty() {
            return Err(ValidationError::EmailRequired.into());
        }
        if !is_valid_email(email) {
            tracing::warn!(
                email = %mask_email(email),
                event = "invalid_email",
                "Rejected verification request for malformed email"
            );
            return Err(ValidationError::InvalidEmailFormat.into());
        }

        let code = generate_code();
        let code_hash = hash_code(&code);

        // Replaces any previous active code for this address; the old code
        // stops verifying from this point on.
        let record = self
            .repository
            .issue(email, &code_hash, self.config.code_ttl_minutes)
            .await?;

        tracing::info!(
            email = %mask_email(email),
            record_id = %record.id,
            event = "code_issued",
            "Issued new verification code"
        );

        let template = EmailTemplate::VerificationCode {
            code,
            expires_minutes: self.config.code_ttl_minutes,
            magic_link: self.magic_link(callback_url),
        };

        let message_id = self
            .mailer
            .send(email, template.subject(), &template.render())
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "delivery_failed",
                    "Mail provider failed to send verification code"
                );
                DomainError::DeliverySendFailed { detail: e }
            })?;

        tracing::info!(
            email = %mask_email(email),
            message_id = %message_id,
            event = "code_dispatched",
            "Verification email dispatched"
        );

        Ok(IssueCodeResult {
            record_id: record.id,
            expires_at: record.expires_at,
            message_id,
        })
    }

    /// Verify a submitted code for an email address
    ///
    /// State machine per attempt: no active record, expiry, and attempt
    /// exhaustion are each checked before the code value itself is compared.
    /// A mismatch burns an attempt; a match consumes the code permanently.
    pub async fn verify_code(&self, email: &str, submitted_code: &str) -> DomainResult<()> {
        let record = match self.repository.find_active(email).await? {
            Some(record) => record,
            None => {
                tracing::warn!(
                    email = %mask_email(email),
                    event = "code_not_found",
                    "Verification attempted with no active code"
                );
                return Err(VerificationError::CodeNotFound.into());
            }
        };

        if record.is_expired() {
            tracing::warn!(
                email = %mask_email(email),
                record_id = %record.id,
                event = "code_expired",
                "Verification attempted against expired code"
            );
            return Err(VerificationError::CodeExpired.into());
        }

        if record.attempts >= self.config.max_attempts {
            tracing::warn!(
                email = %mask_email(email),
                record_id = %record.id,
                attempts = record.attempts,
                event = "attempts_exhausted",
                "Verification attempted after attempt limit"
            );
            return Err(VerificationError::TooManyAttempts.into());
        }

        let submitted_hash = hash_code(submitted_code);
        if !constant_time_eq(submitted_hash.as_bytes(), record.code_hash.as_bytes()) {
            let attempts = self.repository.record_failed_attempt(record.id).await?;
            tracing::warn!(
                email = %mask_email(email),
                record_id = %record.id,
                attempts = attempts,
                event = "code_mismatch",
                "Verification code mismatch"
            );
            return Err(VerificationError::InvalidCode.into());
        }

        self.repository.consume(record.id).await?;
        tracing::info!(
            email = %mask_email(email),
            record_id = %record.id,
            event = "code_verified",
            "Verification code accepted and consumed"
        );

        Ok(())
    }

    /// Build the magic-link URL embedding the caller's return location
    fn magic_link(&self, callback_url: Option<&str>) -> String {
        let callback = match callback_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => "/",
        };
        format!(
            "{}/verify-email?callbackUrl={}",
            self.config.base_url.trim_end_matches('/'),
            callback
        )
    }
}
