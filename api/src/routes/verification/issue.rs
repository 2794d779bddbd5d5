//! Handler for POST /api/v1/verification/issue

use actix_web::{web, HttpResponse};

use cp_core::repositories::verification_code::VerificationCodeRepository;
use cp_core::services::verification::MailerTrait;
use cp_shared::types::response::SuccessBody;
use cp_shared::utils::validation::mask_email;

use crate::dto::IssueCodeRequest;
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Issue a verification code and email it to the given address
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com",
///     "callback_url": "/dashboard"
/// }
/// ```
///
/// # Response
///
/// `200 {"success": true}` on success. The body never reveals the code or
/// whether the address already had one pending.
pub async fn issue_code<M, R>(
    state: web::Data<AppState<M, R>>,
    request: web::Json<IssueCodeRequest>,
) -> HttpResponse
where
    M: MailerTrait + 'static,
    R: VerificationCodeRepository + 'static,
{
    log::info!(
        "Processing issue_code request for email: {}",
        mask_email(&request.email)
    );

    match state
        .verification_service
        .issue_code(&request.email, request.callback_url.as_deref())
        .await
    {
        Ok(result) => {
            log::info!(
                "Verification code issued for {}, message_id: {}",
                mask_email(&request.email),
                result.message_id
            );
            HttpResponse::Ok().json(SuccessBody::new())
        }
        Err(error) => {
            log::warn!(
                "Failed to issue verification code for {}: {}",
                mask_email(&request.email),
                error.detail()
            );
            domain_error_response(&error)
        }
    }
}
