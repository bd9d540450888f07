//! Service context - dependency container for services
//!
//! Holds the repositories, the translation provider, and the JWT service.
//! Everything is constructed at startup and passed in explicitly; there are
//! no process-wide singletons.

use std::sync::Arc;

use lingo_common::auth::JwtService;
use lingo_core::traits::{TranslationProvider, TranslationRepository, UserRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    translation_repo: Arc<dyn TranslationRepository>,
    provider: Arc<dyn TranslationProvider>,
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        translation_repo: Arc<dyn TranslationRepository>,
        provider: Arc<dyn TranslationProvider>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            user_repo,
            translation_repo,
            provider,
            jwt_service,
        }
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the translation history repository
    pub fn translation_repo(&self) -> &dyn TranslationRepository {
        self.translation_repo.as_ref()
    }

    /// Get the translation provider
    pub fn provider(&self) -> &dyn TranslationProvider {
        self.provider.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("user_repo", &"dyn UserRepository")
            .field("translation_repo", &"dyn TranslationRepository")
            .field("provider", &"dyn TranslationProvider")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}
