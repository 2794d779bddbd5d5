//! Verification route handlers

pub mod issue;
pub mod verify;

use std::sync::Arc;

use cp_core::repositories::verification_code::VerificationCodeRepository;
use cp_core::services::verification::{MailerTrait, VerificationService};

pub use issue::issue_code;
pub use verify::verify_code;

/// Application state shared by the verification handlers
pub struct AppState<M, R>
where
    M: MailerTrait,
    R: VerificationCodeRepository,
{
    pub verification_service: Arc<VerificationService<M, R>>,
}

impl<M, R> AppState<M, R>
where
    M: MailerTrait,
    R: VerificationCodeRepository,
{
    pub fn new(verification_service: Arc<VerificationService<M, R>>) -> Self {
        Self {
            verification_service,
        }
    }
}
