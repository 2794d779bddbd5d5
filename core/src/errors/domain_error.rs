//! Domain-specific error types for the verification flow
//!
//! Every failure mode is a distinct variant internally. How much of that
//! distinction is exposed to callers is decided at the API boundary, not
//! here.

use thiserror::Error;

use cp_shared::utils::validation::OnboardingField;

/// Input validation errors: local, user-correctable, always 400-class
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("F3 name is required")]
    F3NameRequired,

    #[error("Hospital name is required")]
    HospitalNameRequired,
}

impl From<OnboardingField> for ValidationError {
    fn from(field: OnboardingField) -> Self {
        match field {
            OnboardingField::F3Name => ValidationError::F3NameRequired,
            OnboardingField::HospitalName => ValidationError::HospitalNameRequired,
        }
    }
}

/// Verification state-machine failures
///
/// `CodeNotFound` deliberately covers never-issued, already-consumed, and
/// superseded codes identically so callers cannot tell which occurred.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationError {
    #[error("No active verification code found")]
    CodeNotFound,

    #[error("Verification code has expired")]
    CodeExpired,

    #[error("Too many attempts. Please request a new code")]
    TooManyAttempts,

    #[error("Invalid verification code")]
    InvalidCode,
}

/// Top-level domain error for the verification service
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error("Unauthorized")]
    Unauthorized,

    /// Required transport credentials or connection strings are absent.
    /// The detail stays server-side.
    #[error("Server configuration error")]
    ServerMisconfigured { detail: String },

    /// The mail provider rejected or failed the send. The provider's
    /// response stays server-side.
    #[error("Failed to send verification email")]
    DeliverySendFailed { detail: String },

    /// Database or other downstream failure
    #[error("An internal error occurred")]
    Internal { message: String },
}

impl DomainError {
    /// Server-side detail for logging; never serialized into a response
    pub fn detail(&self) -> String {
        match self {
            DomainError::ServerMisconfigured { detail } => detail.clone(),
            DomainError::DeliverySendFailed { detail } => detail.clone(),
            DomainError::Internal { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Convenience result alias used throughout the domain layer
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(ValidationError::EmailRequired.to_string(), "Email is required");
        assert_eq!(ValidationError::InvalidEmailFormat.to_string(), "Invalid email format");
    }

    #[test]
    fn sensitive_variants_display_generic_messages() {
        let err = DomainError::ServerMisconfigured {
            detail: "MAIL_API_KEY missing".to_string(),
        };
        assert_eq!(err.to_string(), "Server configuration error");
        assert_eq!(err.detail(), "MAIL_API_KEY missing");

        let err = DomainError::DeliverySendFailed {
            detail: "provider returned 429".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to send verification email");
        assert!(err.detail().contains("429"));
    }

    #[test]
    fn onboarding_fields_map_to_validation_errors() {
        use cp_shared::utils::validation::validate_onboarding;

        let err: ValidationError = validate_onboarding("", "St. Jude").unwrap_err().into();
        assert_eq!(err, ValidationError::F3NameRequired);

        let err: ValidationError = validate_onboarding("Chaser", "").unwrap_err().into();
        assert_eq!(err, ValidationError::HospitalNameRequired);
    }

    #[test]
    fn verification_errors_convert_into_domain_error() {
        let err: DomainError = VerificationError::CodeExpired.into();
        assert_eq!(err.to_string(), "Verification code has expired");
    }
}
