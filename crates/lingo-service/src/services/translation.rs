//! Translation service
//!
//! Splits input text into fixed-size chunks, forwards each chunk to the
//! provider sequentially, and records the completed translation in history.

use lingo_core::entities::NewTranslationRecord;
use lingo_core::value_objects::LanguageCode;
use lingo_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{TranslateRequest, TranslationResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Maximum chunk length in characters. Long inputs are partitioned into
/// contiguous, non-overlapping slices of at most this many characters.
pub const MAX_CHUNK_CHARS: usize = 500;

/// Partition text into chunks of at most `max_chars` characters, in original
/// order. Boundaries are character counts, not bytes, and make no attempt to
/// respect word or sentence breaks; a boundary falling mid-word can degrade
/// translation quality at the seam.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}

/// Translation service
pub struct TranslationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TranslationService<'a> {
    /// Create a new TranslationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Translate text for a user and append the result to their history.
    ///
    /// Chunks are translated strictly in order, one provider call at a time.
    /// If any chunk fails the whole request fails and nothing is persisted;
    /// there is no partial result and no retry. The reported `source_lang` is
    /// whatever the provider detected on the first chunk.
    #[instrument(skip(self, request), fields(chars = request.text.chars().count(), target = %request.target_lang))]
    pub async fn translate(
        &self,
        user_id: i64,
        request: TranslateRequest,
    ) -> ServiceResult<TranslationResponse> {
        let target: LanguageCode = request
            .target_lang
            .parse()
            .map_err(|_| DomainError::InvalidLanguage(request.target_lang.clone()))?;

        let chunks = split_into_chunks(&request.text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(ServiceError::validation("Text must not be empty"));
        }

        let chunk_count = chunks.len();
        let mut translated_text = String::with_capacity(request.text.len());
        let mut source_lang: Option<String> = None;

        for chunk in chunks {
            let result = self.ctx.provider().translate_chunk(chunk, &target).await?;

            if source_lang.is_none() {
                source_lang = Some(result.detected_lang);
            }
            translated_text.push_str(&result.text);
        }

        // First chunk's detection wins; chunks is non-empty so this is set
        let source_lang = source_lang.unwrap_or_else(|| "auto".to_string());

        let record = self
            .ctx
            .translation_repo()
            .create(&NewTranslationRecord::new(
                user_id,
                request.text,
                translated_text,
                source_lang,
                &target,
            ))
            .await?;

        info!(
            record_id = record.id,
            chunks = chunk_count,
            "Translation completed"
        );

        Ok(TranslationResponse::from(&record))
    }
}
