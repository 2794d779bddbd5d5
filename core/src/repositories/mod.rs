//! Repository interfaces for persistent storage

pub mod verification_code;

pub use verification_code::{InMemoryVerificationCodeRepository, VerificationCodeRepository};
