//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Translation record not found: {0}")]
    RecordNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Username already registered")]
    UsernameTaken,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),

    // =========================================================================
    // External Provider Errors
    // =========================================================================
    #[error("Translation provider failed: {0}")]
    TranslationFailed(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::RecordNotFound(_) => "UNKNOWN_RECORD",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidLanguage(_) => "INVALID_LANGUAGE",
            Self::TranslationFailed(_) => "TRANSLATION_FAILED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::RecordNotFound(_))
    }

    /// Check if this is a validation error
    ///
    /// Duplicate usernames are classified as validation (HTTP 400), matching
    /// the registration contract.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken | Self::ValidationError(_) | Self::InvalidLanguage(_)
        )
    }

    /// Check if this is an external provider failure
    pub fn is_external(&self) -> bool {
        matches!(self, Self::TranslationFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::UsernameTaken.code(), "USERNAME_TAKEN");
        assert_eq!(DomainError::RecordNotFound(1).code(), "UNKNOWN_RECORD");
        assert_eq!(
            DomainError::TranslationFailed("boom".to_string()).code(),
            "TRANSLATION_FAILED"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound("alice".to_string()).is_not_found());
        assert!(DomainError::RecordNotFound(5).is_not_found());
        assert!(!DomainError::UsernameTaken.is_not_found());
    }

    #[test]
    fn test_duplicate_username_is_validation() {
        assert!(DomainError::UsernameTaken.is_validation());
        assert!(!DomainError::UsernameTaken.is_external());
    }

    #[test]
    fn test_provider_failure_is_external() {
        let err = DomainError::TranslationFailed("upstream 502".to_string());
        assert!(err.is_external());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::UserNotFound("bob".to_string());
        assert_eq!(err.to_string(), "User not found: bob");

        let err = DomainError::RecordNotFound(42);
        assert_eq!(err.to_string(), "Translation record not found: 42");
    }
}
