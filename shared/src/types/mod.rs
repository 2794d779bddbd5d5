//! Common type definitions shared across server crates

pub mod response;

pub use response::{ErrorBody, SuccessBody};
