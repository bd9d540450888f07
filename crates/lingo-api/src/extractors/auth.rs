//! Authentication extractor
//!
//! Extracts the bearer token from the Authorization header, validates it,
//! and resolves the subject to a user record. Rejections keep the distinct
//! outcomes apart: missing header, malformed token, expired token, and a
//! subject that no longer exists each produce their own error code (all 401
//! with a bearer challenge).

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use lingo_core::entities::User;
use lingo_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user resolved from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl AuthUser {
    /// Id of the authenticated user
    pub fn id(&self) -> i64 {
        self.0.id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        // Validate the token and resolve its subject to a user row
        let service = AuthService::new(app_state.service_context());
        let user = service.current_user(bearer.token()).await.map_err(|e| {
            tracing::warn!(error = %e, "Bearer token rejected");
            ApiError::Service(e)
        })?;

        Ok(AuthUser(user))
    }
}
