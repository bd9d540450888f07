//! HTTP translation provider
//!
//! Talks to a LibreTranslate-compatible endpoint:
//! `POST {base}/translate` with `{q, source: "auto", target}` returning
//! `{translatedText, detectedLanguage: {language, confidence}}`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use lingo_core::error::DomainError;
use lingo_core::traits::{TranslatedChunk, TranslationProvider};
use lingo_core::value_objects::LanguageCode;

/// Provider configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the provider API (no trailing slash required)
    pub base_url: String,
    /// Optional API key forwarded with every request
    pub api_key: Option<String>,
}

impl ProviderConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("TRANSLATOR_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
            api_key: std::env::var("TRANSLATOR_API_KEY").ok(),
        }
    }
}

impl From<&lingo_common::TranslatorConfig> for ProviderConfig {
    fn from(config: &lingo_common::TranslatorConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

/// Request body for the provider's translate endpoint
#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    /// Always "auto": the provider detects the source language
    source: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Detected-language part of the provider response
#[derive(Debug, Deserialize)]
struct DetectedLanguage {
    language: String,
    #[allow(dead_code)]
    #[serde(default)]
    confidence: f64,
}

/// Provider response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
    detected_language: Option<DetectedLanguage>,
}

/// HTTP implementation of the `TranslationProvider` port
#[derive(Clone)]
pub struct HttpTranslationProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpTranslationProvider {
    /// Create a new provider client
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    fn translate_url(&self) -> String {
        format!("{}/translate", self.base_url)
    }
}

impl std::fmt::Debug for HttpTranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTranslationProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TranslationProvider for HttpTranslationProvider {
    #[instrument(skip(self, text), fields(chars = text.chars().count(), target = %target))]
    async fn translate_chunk(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<TranslatedChunk, DomainError> {
        let body = TranslateBody {
            q: text,
            source: "auto",
            target: target.as_str(),
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(self.translate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Provider request failed");
                DomainError::TranslationFailed(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Provider returned error status");
            return Err(DomainError::TranslationFailed(format!(
                "provider returned {status}"
            )));
        }

        let payload: TranslateResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Provider response malformed");
            DomainError::TranslationFailed(e.to_string())
        })?;

        let detected = payload
            .detected_language
            .map_or_else(|| "auto".to_string(), |d| d.language);

        debug!(detected = %detected, "Chunk translated");

        Ok(TranslatedChunk::new(payload.translated_text, detected))
    }
}
