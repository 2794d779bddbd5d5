//! MySQL verification code repository
//!
//! Backing table:
//!
//! ```sql
//! CREATE TABLE verification_codes (
//!     id            CHAR(36)     NOT NULL PRIMARY KEY,
//!     email         VARCHAR(255) NOT NULL,
//!     code_hash     CHAR(64)     NOT NULL,
//!     attempt_count INT UNSIGNED NOT NULL DEFAULT 0,
//!     created_at    DATETIME(6)  NOT NULL,
//!     expires_at    DATETIME(6)  NOT NULL,
//!     consumed_at   DATETIME(6)  NULL,
//!     KEY idx_verification_codes_email (email)
//! );
//! ```
//!
//! `issue` runs delete-then-insert inside one transaction so concurrent
//! issuance for the same email never leaves two active rows behind.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use cp_core::domain::entities::verification_code::VerificationCode;
use cp_core::errors::{DomainError, DomainResult};
use cp_core::repositories::verification_code::VerificationCodeRepository;
use cp_shared::utils::validation::mask_email;

/// MySQL-backed verification code repository
pub struct MySqlVerificationCodeRepository {
    pool: MySqlPool,
}

impl MySqlVerificationCodeRepository {
    /// Create a new repository over an existing pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn internal(context: &str, e: impl std::fmt::Display) -> DomainError {
        DomainError::Internal {
            message: format!("{}: {}", context, e),
        }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> DomainResult<VerificationCode> {
        let id: String = row
            .try_get("id")
            .map_err(|e| Self::internal("Failed to read id", e))?;
        let id = Uuid::parse_str(&id).map_err(|e| Self::internal("Malformed record id", e))?;

        Ok(VerificationCode {
            id,
            email: row
                .try_get("email")
                .map_err(|e| Self::internal("Failed to read email", e))?,
            code_hash: row
                .try_get("code_hash")
                .map_err(|e| Self::internal("Failed to read code_hash", e))?,
            attempts: row
                .try_get::<u32, _>("attempt_count")
                .map_err(|e| Self::internal("Failed to read attempt_count", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| Self::internal("Failed to read created_at", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| Self::internal("Failed to read expires_at", e))?,
            consumed_at: row
                .try_get::<Option<DateTime<Utc>>, _>("consumed_at")
                .map_err(|e| Self::internal("Failed to read consumed_at", e))?,
        })
    }
}

#[async_trait]
impl VerificationCodeRepository for MySqlVerificationCodeRepository {
    async fn issue(
        &self,
        email: &str,
        code_hash: &str,
        ttl_minutes: i64,
    ) -> DomainResult<VerificationCode> {
        let record = VerificationCode::new(email.to_string(), code_hash.to_string(), ttl_minutes);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Self::internal("Failed to begin transaction", e))?;

        // Supersede any earlier unconsumed code for this address.
        sqlx::query("DELETE FROM verification_codes WHERE email = ? AND consumed_at IS NULL")
            .bind(email)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    "Failed to supersede previous verification codes"
                );
                Self::internal("Failed to supersede previous codes", e)
            })?;

        sqlx::query(
            r#"
            INSERT INTO verification_codes (
                id, email, code_hash, attempt_count,
                created_at, expires_at, consumed_at
            ) VALUES (?, ?, ?, ?, ?, ?, NULL)
            "#,
        )
        .bind(record.id.to_string())
        .bind(&record.email)
        .bind(&record.code_hash)
        .bind(record.attempts)
        .bind(record.created_at)
        .bind(record.expires_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!(
                email = %mask_email(email),
                error = %e,
                "Failed to store verification code"
            );
            Self::internal("Failed to store verification code", e)
        })?;

        tx.commit()
            .await
            .map_err(|e| Self::internal("Failed to commit issuance", e))?;

        tracing::debug!(
            email = %mask_email(email),
            record_id = %record.id,
            "Stored verification code"
        );

        Ok(record)
    }

    async fn find_active(&self, email: &str) -> DomainResult<Option<VerificationCode>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, code_hash, attempt_count,
                   created_at, expires_at, consumed_at
            FROM verification_codes
            WHERE email = ? AND consumed_at IS NULL
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                email = %mask_email(email),
                error = %e,
                "Failed to look up verification code"
            );
            Self::internal("Failed to look up verification code", e)
        })?;

        match row {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn record_failed_attempt(&self, id: Uuid) -> DomainResult<u32> {
        // Relative update keeps the increment atomic under concurrent
        // attempts against the same code.
        sqlx::query(
            "UPDATE verification_codes SET attempt_count = attempt_count + 1 WHERE id = ?",
        )
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| Self::internal("Failed to increment attempt count", e))?;

        let count = sqlx::query("SELECT attempt_count FROM verification_codes WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::internal("Failed to read attempt count", e))?
            .and_then(|row| row.try_get::<u32, _>("attempt_count").ok())
            .unwrap_or(1);

        Ok(count)
    }

    async fn consume(&self, id: Uuid) -> DomainResult<()> {
        // The NULL guard makes a second consume a no-op rather than moving
        // the timestamp.
        sqlx::query(
            "UPDATE verification_codes SET consumed_at = NOW(6) WHERE id = ? AND consumed_at IS NULL",
        )
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| Self::internal("Failed to consume verification code", e))?;

        Ok(())
    }

    async fn delete_expired(&self) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM verification_codes WHERE expires_at <= NOW(6)")
            .execute(&self.pool)
            .await
            .map_err(|e| Self::internal("Failed to delete expired codes", e))?;

        let deleted = result.rows_affected();
        if deleted > 0 {
            tracing::info!(deleted = deleted, "Removed expired verification codes");
        }

        Ok(deleted)
    }
}
