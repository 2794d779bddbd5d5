//! Verification endpoint DTOs
//!
//! Validation of the field contents happens in the service layer; these
//! types only describe the wire shape.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/verification/issue`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueCodeRequest {
    /// Address the code is mailed to
    pub email: String,

    /// Where the magic link returns the user to after verification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

/// Request body for `POST /api/v1/verification/verify`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeRequest {
    /// Address the code was issued for
    pub email: String,

    /// The submitted six digit code
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_request_accepts_missing_callback_url() {
        let req: IssueCodeRequest =
            serde_json::from_str(r#"{"email":"user@example.com"}"#).unwrap();
        assert_eq!(req.email, "user@example.com");
        assert!(req.callback_url.is_none());
    }

    #[test]
    fn issue_request_accepts_callback_url() {
        let req: IssueCodeRequest = serde_json::from_str(
            r#"{"email":"user@example.com","callback_url":"/dashboard"}"#,
        )
        .unwrap();
        assert_eq!(req.callback_url.as_deref(), Some("/dashboard"));
    }

    #[test]
    fn verify_request_deserializes() {
        let req: VerifyCodeRequest =
            serde_json::from_str(r#"{"email":"user@example.com","code":"123456"}"#).unwrap();
        assert_eq!(req.code, "123456");
    }
}
