//! Handler for POST /api/v1/verification/verify

use actix_web::{web, HttpResponse};

use cp_core::repositories::verification_code::VerificationCodeRepository;
use cp_core::services::verification::MailerTrait;
use cp_shared::types::response::SuccessBody;
use cp_shared::utils::validation::mask_email;

use crate::dto::VerifyCodeRequest;
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Check a submitted verification code against the active one
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com",
///     "code": "123456"
/// }
/// ```
///
/// # Response
///
/// `200 {"success": true}` consumes the code. A wrong, expired, missing,
/// or locked-out code returns `400` with a message that does not say which.
pub async fn verify_code<M, R>(
    state: web::Data<AppState<M, R>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    M: MailerTrait + 'static,
    R: VerificationCodeRepository + 'static,
{
    log::info!(
        "Processing verify_code request for email: {}",
        mask_email(&request.email)
    );

    match state
        .verification_service
        .verify_code(&request.email, &request.code)
        .await
    {
        Ok(()) => {
            log::info!("Verification succeeded for {}", mask_email(&request.email));
            HttpResponse::Ok().json(SuccessBody::new())
        }
        Err(error) => {
            log::warn!(
                "Verification failed for {}: {}",
                mask_email(&request.email),
                error.detail()
            );
            domain_error_response(&error)
        }
    }
}
