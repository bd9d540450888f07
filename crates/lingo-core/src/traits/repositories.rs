//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{NewTranslationRecord, NewUser, TranslationRecord, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check whether a username is already registered
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Insert a new user and return the stored row.
    ///
    /// Fails with [`DomainError::UsernameTaken`] on a unique violation.
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Fetch the stored password hash for a username
    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>>;
}

// ============================================================================
// Translation History Repository
// ============================================================================

#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Insert a completed translation and return the stored row
    async fn create(&self, record: &NewTranslationRecord) -> RepoResult<TranslationRecord>;

    /// List a user's records, newest first, with offset/limit pagination
    async fn list_by_user(
        &self,
        user_id: i64,
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<TranslationRecord>>;

    /// Delete one record if it belongs to the user.
    ///
    /// Fails with [`DomainError::RecordNotFound`] when the record does not
    /// exist or belongs to another user; the two cases are indistinguishable.
    async fn delete_one(&self, user_id: i64, record_id: i64) -> RepoResult<()>;

    /// Delete every record belonging to the user, returning the count removed
    async fn delete_all(&self, user_id: i64) -> RepoResult<u64>;
}
