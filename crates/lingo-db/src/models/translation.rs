//! Translation history database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the translations table
#[derive(Debug, Clone, FromRow)]
pub struct TranslationModel {
    pub id: i64,
    pub user_id: i64,
    pub source_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub created_at: DateTime<Utc>,
}
