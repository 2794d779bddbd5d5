//! Minimal response body types
//!
//! The external contract is deliberately flat: success responses carry
//! `{"success": true}` plus optional data, error responses carry a single
//! user-facing `{"error": "..."}` string. Internal error detail is logged at
//! the handler boundary and never serialized into a response.

use serde::{Deserialize, Serialize};

/// Body for successful requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessBody {
    pub success: bool,
}

impl SuccessBody {
    pub fn new() -> Self {
        Self { success: true }
    }
}

impl Default for SuccessBody {
    fn default() -> Self {
        Self::new()
    }
}

/// Body for failed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// User-facing error message
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_serializes_flat() {
        let json = serde_json::to_string(&SuccessBody::new()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn error_body_serializes_flat() {
        let json = serde_json::to_string(&ErrorBody::new("Email is required")).unwrap();
        assert_eq!(json, r#"{"error":"Email is required"}"#);
    }
}
