//! Tests for the in-memory verification code repository

use super::memory::InMemoryVerificationCodeRepository;
use super::r#trait::VerificationCodeRepository;

const HASH_A: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
const HASH_B: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

#[tokio::test]
async fn issue_creates_fresh_record() {
    let repo = InMemoryVerificationCodeRepository::new();

    let record = repo.issue("test@example.com", HASH_A, 10).await.unwrap();

    assert_eq!(record.email, "test@example.com");
    assert_eq!(record.code_hash, HASH_A);
    assert_eq!(record.attempts, 0);
    assert!(record.consumed_at.is_none());
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn issue_supersedes_previous_code() {
    let repo = InMemoryVerificationCodeRepository::new();

    let first = repo.issue("test@example.com", HASH_A, 10).await.unwrap();
    let second = repo.issue("test@example.com", HASH_B, 10).await.unwrap();

    assert_eq!(repo.len().await, 1);
    let active = repo.find_active("test@example.com").await.unwrap().unwrap();
    assert_eq!(active.id, second.id);
    assert_ne!(active.id, first.id);
    assert_eq!(active.code_hash, HASH_B);
}

#[tokio::test]
async fn find_active_skips_consumed_records() {
    let repo = InMemoryVerificationCodeRepository::new();

    let record = repo.issue("test@example.com", HASH_A, 10).await.unwrap();
    repo.consume(record.id).await.unwrap();

    assert!(repo.find_active("test@example.com").await.unwrap().is_none());
    // The consumed row is retained, just no longer active.
    assert!(repo.get("test@example.com").await.unwrap().is_consumed());
}

#[tokio::test]
async fn record_failed_attempt_returns_running_count() {
    let repo = InMemoryVerificationCodeRepository::new();
    let record = repo.issue("test@example.com", HASH_A, 10).await.unwrap();

    assert_eq!(repo.record_failed_attempt(record.id).await.unwrap(), 1);
    assert_eq!(repo.record_failed_attempt(record.id).await.unwrap(), 2);
}

#[tokio::test]
async fn consume_twice_is_a_noop() {
    let repo = InMemoryVerificationCodeRepository::new();
    let record = repo.issue("test@example.com", HASH_A, 10).await.unwrap();

    repo.consume(record.id).await.unwrap();
    let first = repo.get("test@example.com").await.unwrap().consumed_at;

    repo.consume(record.id).await.unwrap();
    let second = repo.get("test@example.com").await.unwrap().consumed_at;

    assert_eq!(first, second);
}

#[tokio::test]
async fn delete_expired_removes_only_expired_rows() {
    let repo = InMemoryVerificationCodeRepository::new();

    repo.issue("fresh@example.com", HASH_A, 10).await.unwrap();
    repo.issue("stale@example.com", HASH_B, -1).await.unwrap();

    let removed = repo.delete_expired().await.unwrap();

    assert_eq!(removed, 1);
    assert!(repo.get("fresh@example.com").await.is_some());
    assert!(repo.get("stale@example.com").await.is_none());
}
