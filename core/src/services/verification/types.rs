//! Result types for the verification service

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Outcome of a successful code issuance
#[derive(Debug, Clone)]
pub struct IssueCodeResult {
    /// Identifier of the stored verification code record
    pub record_id: Uuid,

    /// When the issued code expires
    pub expires_at: DateTime<Utc>,

    /// Provider message id of the dispatched email
    pub message_id: String,
}
