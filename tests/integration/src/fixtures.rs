//! Test fixtures and data generators
//!
//! Provides reusable request and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        Self {
            username: format!("testuser_{}_{}", std::process::id(), unique_suffix()),
            password: "test-password-1".to_string(),
        }
    }
}

/// Login form body
#[derive(Debug, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Translate request
#[derive(Debug, Serialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: String,
}

impl TranslateRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_lang: "ja".to_string(),
        }
    }
}

/// Registered user response
#[derive(Debug, Deserialize)]
pub struct UserOut {
    pub id: i64,
    pub username: String,
    pub created_at: String,
}

/// Issued token response
#[derive(Debug, Deserialize)]
pub struct TokenOut {
    pub access_token: String,
    pub token_type: String,
}

/// Completed translation response
#[derive(Debug, Deserialize)]
pub struct TranslationOut {
    pub translated_text: String,
    pub source_lang: String,
}

/// One history entry
#[derive(Debug, Deserialize)]
pub struct HistoryEntryOut {
    pub id: i64,
    pub source_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub created_at: String,
}

/// Message response from delete endpoints
#[derive(Debug, Deserialize)]
pub struct MessageOut {
    pub message: String,
}
