//! Translation provider port - the outbound call the domain depends on

use async_trait::async_trait;

use crate::error::DomainError;
use crate::value_objects::LanguageCode;

/// Result of translating one chunk of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedChunk {
    /// Translated text for this chunk
    pub text: String,
    /// Source language the provider detected for this chunk
    pub detected_lang: String,
}

impl TranslatedChunk {
    pub fn new(text: impl Into<String>, detected_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detected_lang: detected_lang.into(),
        }
    }
}

/// External translation provider.
///
/// One call translates one chunk. Callers issue calls sequentially and treat
/// any failure as fatal for the whole request; implementations must not retry.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate a single chunk into the target language, detecting the
    /// source language.
    async fn translate_chunk(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<TranslatedChunk, DomainError>;
}
