//! Verification code repository interface

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainResult;

/// Storage contract for verification codes
///
/// Implementations must uphold two concurrency guarantees:
/// - `issue` replaces atomically per email, so two concurrent issuances for
///   the same address never both leave an active record behind;
/// - `record_failed_attempt` increments atomically, so concurrent attempts
///   against the same code never lose an update.
#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Replace any active code for `email` with a fresh record
    ///
    /// The new record starts with zero attempts, no consumption marker, and
    /// expires `ttl_minutes` from now.
    async fn issue(
        &self,
        email: &str,
        code_hash: &str,
        ttl_minutes: i64,
    ) -> DomainResult<VerificationCode>;

    /// Most recent unconsumed record for `email`, if any
    ///
    /// Expired records are still returned; expiry is a service-level
    /// decision so that an expired code is reported as expired rather than
    /// missing.
    async fn find_active(&self, email: &str) -> DomainResult<Option<VerificationCode>>;

    /// Atomically increment the attempt counter, returning the new count
    async fn record_failed_attempt(&self, id: Uuid) -> DomainResult<u32>;

    /// Mark a record as consumed
    ///
    /// A second call against an already-consumed record is a no-op.
    async fn consume(&self, id: Uuid) -> DomainResult<()>;

    /// Delete expired records; maintenance operation, returns rows removed
    async fn delete_expired(&self) -> DomainResult<u64>;
}
