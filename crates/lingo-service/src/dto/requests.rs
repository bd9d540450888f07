//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; JSON bodies also implement
//! `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request.
///
/// Arrives as `application/x-www-form-urlencoded`, the shape the original
/// web client sends.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ============================================================================
// Translation Requests
// ============================================================================

/// Translate request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TranslateRequest {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,

    #[validate(length(min = 1, max = 16, message = "Target language must be 1-16 characters"))]
    pub target_lang: String,
}
