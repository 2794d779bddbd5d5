//! Tests for the verification service

pub mod mocks;
