//! Domain error to HTTP response mapping
//!
//! Internally every failure mode is a distinct variant. Externally the
//! mapping collapses `CodeNotFound` and `InvalidCode` into one message so a
//! caller cannot probe whether a code exists for an address. All 5xx paths
//! log the underlying detail here, once, before the generic body goes out.

use actix_web::HttpResponse;

use cp_core::errors::{DomainError, VerificationError};
use cp_shared::types::response::ErrorBody;

/// Convert a domain error into the HTTP response the caller sees
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation(e) => {
            HttpResponse::BadRequest().json(ErrorBody::new(e.to_string()))
        }

        DomainError::Verification(e) => {
            let message = match e {
                // Collapsed on purpose.
                VerificationError::CodeNotFound | VerificationError::InvalidCode => {
                    "Invalid verification code"
                }
                VerificationError::CodeExpired => "Verification code has expired",
                VerificationError::TooManyAttempts => {
                    "Too many attempts. Please request a new code"
                }
            };
            HttpResponse::BadRequest().json(ErrorBody::new(message))
        }

        DomainError::Unauthorized => {
            HttpResponse::Unauthorized().json(ErrorBody::new("Unauthorized"))
        }

        DomainError::ServerMisconfigured { .. } => {
            log::error!("Server misconfiguration: {}", error.detail());
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Server configuration error"))
        }

        DomainError::DeliverySendFailed { .. } => {
            log::error!("Mail delivery failed: {}", error.detail());
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Failed to send verification email"))
        }

        DomainError::Internal { .. } => {
            log::error!("Internal error: {}", error.detail());
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("An internal error occurred"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use cp_core::errors::ValidationError;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let response = domain_error_response(&ValidationError::EmailRequired.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_and_invalid_code_share_a_status() {
        let not_found = domain_error_response(&VerificationError::CodeNotFound.into());
        let invalid = domain_error_response(&VerificationError::InvalidCode.into());
        assert_eq!(not_found.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn misconfiguration_maps_to_internal_server_error() {
        let error = DomainError::ServerMisconfigured {
            detail: "MAIL_API_KEY missing".to_string(),
        };
        let response = domain_error_response(&error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
