//! Business services

pub mod verification;

pub use verification::{
    IssueCodeResult, MailerTrait, VerificationService, VerificationServiceConfig,
};
