//! Translation record entity - one completed translation owned by a user

use chrono::{DateTime, Utc};

use crate::value_objects::LanguageCode;

/// A persisted log entry of one completed translation.
///
/// Records are created only after every chunk of the request translated
/// successfully, are never updated, and are deleted only by their owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    pub id: i64,
    pub user_id: i64,
    pub source_text: String,
    pub translated_text: String,
    /// Language detected on the first chunk of the request
    pub source_lang: String,
    pub target_lang: String,
    pub created_at: DateTime<Utc>,
}

/// Draft of a translation record to be inserted. The id and creation
/// timestamp are assigned by the database.
#[derive(Debug, Clone)]
pub struct NewTranslationRecord {
    pub user_id: i64,
    pub source_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl NewTranslationRecord {
    pub fn new(
        user_id: i64,
        source_text: impl Into<String>,
        translated_text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: &LanguageCode,
    ) -> Self {
        Self {
            user_id,
            source_text: source_text.into(),
            translated_text: translated_text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.as_str().to_string(),
        }
    }
}
