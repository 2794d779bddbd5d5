//! Domain layer: entities and their lifecycle rules

pub mod entities;

pub use entities::verification_code::{
    VerificationCode, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS,
};
