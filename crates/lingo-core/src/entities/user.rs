//! User entity - a registered account that owns translation history

use chrono::{DateTime, Utc};

/// User entity. The password hash is deliberately not part of the entity;
/// credential material stays behind the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a User from stored fields
    pub fn new(id: i64, username: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username,
            created_at,
        }
    }
}

/// Draft of a user to be inserted. The id and creation timestamp are assigned
/// by the database.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}
