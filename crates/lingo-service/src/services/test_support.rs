//! In-memory test doubles for service tests
//!
//! Mocks implement the core ports so service behavior can be exercised
//! without a database or a live provider.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use lingo_common::auth::JwtService;
use lingo_core::entities::{NewTranslationRecord, NewUser, TranslationRecord, User};
use lingo_core::traits::{
    RepoResult, TranslatedChunk, TranslationProvider, TranslationRepository, UserRepository,
};
use lingo_core::value_objects::LanguageCode;
use lingo_core::DomainError;

use super::context::ServiceContext;

/// Build a ServiceContext wired to the given mocks
pub(crate) fn test_context(
    users: Arc<MockUserRepository>,
    translations: Arc<MockTranslationRepository>,
    provider: Arc<MockProvider>,
) -> ServiceContext {
    let jwt = Arc::new(JwtService::new("test-secret-key-that-is-long-enough", 1800));
    ServiceContext::new(users, translations, provider, jwt)
}

// ============================================================================
// Users
// ============================================================================

#[derive(Default)]
pub(crate) struct MockUserRepository {
    users: Mutex<Vec<(User, String)>>,
    next_id: AtomicI64,
}

impl MockUserRepository {
    pub(crate) fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.username == username)
            .map(|(u, _)| u.clone()))
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|(u, _)| u.username == username))
    }

    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|(u, _)| u.username == user.username) {
            return Err(DomainError::UsernameTaken);
        }
        let created = User::new(
            self.next_id.fetch_add(1, Ordering::SeqCst),
            user.username.clone(),
            Utc::now(),
        );
        users.push((created.clone(), user.password_hash.clone()));
        Ok(created)
    }

    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.username == username)
            .map(|(_, hash)| hash.clone()))
    }
}

// ============================================================================
// Translation history
// ============================================================================

#[derive(Default)]
pub(crate) struct MockTranslationRepository {
    records: Mutex<Vec<TranslationRecord>>,
    next_id: AtomicI64,
}

impl MockTranslationRepository {
    pub(crate) fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Snapshot of stored records, insertion order
    pub(crate) fn records(&self) -> Vec<TranslationRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationRepository for MockTranslationRepository {
    async fn create(&self, record: &NewTranslationRecord) -> RepoResult<TranslationRecord> {
        let stored = TranslationRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            user_id: record.user_id,
            source_text: record.source_text.clone(),
            translated_text: record.translated_text.clone(),
            source_lang: record.source_lang.clone(),
            target_lang: record.target_lang.clone(),
            created_at: Utc::now(),
        };
        self.records.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_by_user(
        &self,
        user_id: i64,
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<TranslationRecord>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| r.user_id == user_id)
            .rev() // newest first (ids are monotonic)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn delete_one(&self, user_id: i64, record_id: i64) -> RepoResult<()> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| !(r.id == record_id && r.user_id == user_id));
        if records.len() == before {
            return Err(DomainError::RecordNotFound(record_id));
        }
        Ok(())
    }

    async fn delete_all(&self, user_id: i64) -> RepoResult<u64> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.user_id != user_id);
        Ok((before - records.len()) as u64)
    }
}

// ============================================================================
// Provider
// ============================================================================

enum ProviderBehavior {
    /// Uppercase the chunk, always detecting the same language
    Uppercase { detected: String },
    /// Succeed for the first `ok_calls` chunks, then fail
    FailAfter { ok_calls: usize },
    /// Detect a different language per call (cycling the last entry)
    DetectSequence { langs: Vec<String> },
}

pub(crate) struct MockProvider {
    behavior: ProviderBehavior,
    calls: AtomicUsize,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::uppercasing("en")
    }
}

impl MockProvider {
    /// Provider that uppercases chunks and always detects `detected`
    pub(crate) fn uppercasing(detected: &str) -> Self {
        Self {
            behavior: ProviderBehavior::Uppercase {
                detected: detected.to_string(),
            },
            calls: AtomicUsize::new(0),
        }
    }

    /// Provider that fails every call after the first `ok_calls` successes
    pub(crate) fn failing_after(ok_calls: usize) -> Self {
        Self {
            behavior: ProviderBehavior::FailAfter { ok_calls },
            calls: AtomicUsize::new(0),
        }
    }

    /// Provider that reports a different detected language per call
    pub(crate) fn detecting_sequence(langs: &[&str]) -> Self {
        Self {
            behavior: ProviderBehavior::DetectSequence {
                langs: langs.iter().map(ToString::to_string).collect(),
            },
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of translate calls received
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate_chunk(
        &self,
        text: &str,
        _target: &LanguageCode,
    ) -> Result<TranslatedChunk, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            ProviderBehavior::Uppercase { detected } => {
                Ok(TranslatedChunk::new(text.to_uppercase(), detected.clone()))
            }
            ProviderBehavior::FailAfter { ok_calls } => {
                if call < *ok_calls {
                    Ok(TranslatedChunk::new(text.to_uppercase(), "en"))
                } else {
                    Err(DomainError::TranslationFailed(
                        "mock provider failure".to_string(),
                    ))
                }
            }
            ProviderBehavior::DetectSequence { langs } => {
                let lang = langs
                    .get(call)
                    .or_else(|| langs.last())
                    .cloned()
                    .unwrap_or_else(|| "auto".to_string());
                Ok(TranslatedChunk::new(text.to_uppercase(), lang))
            }
        }
    }
}
