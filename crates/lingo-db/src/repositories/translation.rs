//! PostgreSQL implementation of TranslationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lingo_core::entities::{NewTranslationRecord, TranslationRecord};
use lingo_core::traits::{RepoResult, TranslationRepository};

use crate::models::TranslationModel;

use super::error::{map_db_error, record_not_found};

/// PostgreSQL implementation of TranslationRepository
#[derive(Clone)]
pub struct PgTranslationRepository {
    pool: PgPool,
}

impl PgTranslationRepository {
    /// Create a new PgTranslationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TranslationRepository for PgTranslationRepository {
    #[instrument(skip(self, record), fields(user_id = record.user_id))]
    async fn create(&self, record: &NewTranslationRecord) -> RepoResult<TranslationRecord> {
        let result = sqlx::query_as::<_, TranslationModel>(
            r"
            INSERT INTO translations (user_id, source_text, translated_text, source_lang, target_lang)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, source_text, translated_text, source_lang, target_lang, created_at
            ",
        )
        .bind(record.user_id)
        .bind(&record.source_text)
        .bind(&record.translated_text)
        .bind(&record.source_lang)
        .bind(&record.target_lang)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(TranslationRecord::from(result))
    }

    #[instrument(skip(self))]
    async fn list_by_user(
        &self,
        user_id: i64,
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<TranslationRecord>> {
        let results = sqlx::query_as::<_, TranslationModel>(
            r"
            SELECT id, user_id, source_text, translated_text, source_lang, target_lang, created_at
            FROM translations
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            OFFSET $2
            LIMIT $3
            ",
        )
        .bind(user_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TranslationRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_one(&self, user_id: i64, record_id: i64) -> RepoResult<()> {
        // Ownership is part of the predicate: a miss on either id or owner
        // reports the same not-found
        let result = sqlx::query(
            r"
            DELETE FROM translations
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(record_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(record_not_found(record_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self, user_id: i64) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM translations
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
