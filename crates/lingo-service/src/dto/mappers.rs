//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use lingo_core::entities::{TranslationRecord, User};

use super::responses::{HistoryEntryResponse, TranslationResponse, UserResponse};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&TranslationRecord> for TranslationResponse {
    fn from(record: &TranslationRecord) -> Self {
        Self {
            translated_text: record.translated_text.clone(),
            source_lang: record.source_lang.clone(),
        }
    }
}

impl From<&TranslationRecord> for HistoryEntryResponse {
    fn from(record: &TranslationRecord) -> Self {
        Self {
            id: record.id,
            source_text: record.source_text.clone(),
            translated_text: record.translated_text.clone(),
            source_lang: record.source_lang.clone(),
            target_lang: record.target_lang.clone(),
            created_at: record.created_at,
        }
    }
}

impl From<TranslationRecord> for HistoryEntryResponse {
    fn from(record: TranslationRecord) -> Self {
        Self::from(&record)
    }
}
