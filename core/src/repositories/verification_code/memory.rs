//! In-memory implementation of the verification code repository
//!
//! Used by unit and endpoint tests and by local development when no MySQL
//! instance is available. Keyed by email, so the one-active-code-per-email
//! invariant holds by construction; superseded records are dropped rather
//! than retained.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::{DomainError, DomainResult};

use super::r#trait::VerificationCodeRepository;

/// In-memory verification code repository
#[derive(Default)]
pub struct InMemoryVerificationCodeRepository {
    records: Arc<RwLock<HashMap<String, VerificationCode>>>,
}

impl InMemoryVerificationCodeRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Snapshot of the stored record for an email, consumed or not
    pub async fn get(&self, email: &str) -> Option<VerificationCode> {
        self.records.read().await.get(email).cloned()
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl VerificationCodeRepository for InMemoryVerificationCodeRepository {
    async fn issue(
        &self,
        email: &str,
        code_hash: &str,
        ttl_minutes: i64,
    ) -> DomainResult<VerificationCode> {
        let record =
            VerificationCode::new(email.to_string(), code_hash.to_string(), ttl_minutes);

        let mut records = self.records.write().await;
        records.insert(email.to_string(), record.clone());
        Ok(record)
    }

    async fn find_active(&self, email: &str) -> DomainResult<Option<VerificationCode>> {
        let records = self.records.read().await;
        Ok(records
            .get(email)
            .filter(|record| !record.is_consumed())
            .cloned())
    }

    async fn record_failed_attempt(&self, id: Uuid) -> DomainResult<u32> {
        let mut records = self.records.write().await;
        let record = records
            .values_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| DomainError::Internal {
                message: format!("No verification code with id {}", id),
            })?;

        record.record_failed_attempt();
        Ok(record.attempts)
    }

    async fn consume(&self, id: Uuid) -> DomainResult<()> {
        let mut records = self.records.write().await;
        if let Some(record) = records.values_mut().find(|record| record.id == id) {
            record.consume();
        }
        Ok(())
    }

    async fn delete_expired(&self) -> DomainResult<u64> {
        let now = Utc::now();
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| record.expires_at > now);
        Ok((before - records.len()) as u64)
    }
}
