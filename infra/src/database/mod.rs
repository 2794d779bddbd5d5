//! Database module - MySQL implementations using SQLx

pub mod connection;
pub mod verification_code_repository;

pub use connection::DatabasePool;
pub use verification_code_repository::MySqlVerificationCodeRepository;
