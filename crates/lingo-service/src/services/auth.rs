//! Authentication service
//!
//! Handles user registration, login, and token-subject resolution.

use lingo_common::auth::{hash_password, verify_password};
use lingo_common::AppError;
use lingo_core::entities::{NewUser, User};
use lingo_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        // Check if username already exists
        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(ServiceError::Domain(DomainError::UsernameTaken));
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // Save to database; the unique constraint backstops a concurrent
        // registration racing past the existence check
        let user = self
            .ctx
            .user_repo()
            .create(&NewUser::new(request.username, password_hash))
            .await?;

        info!(user_id = user.id, "User registered successfully");

        Ok(UserResponse::from(&user))
    }

    /// Login with username and password, issuing a session token
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenResponse> {
        // Fetch stored hash; an unknown username and a wrong password are the
        // same failure from the caller's point of view
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!("Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!("User logged in successfully");

        let access_token = self
            .ctx
            .jwt_service()
            .issue_token(&request.username)
            .map_err(ServiceError::from)?;

        Ok(TokenResponse::bearer(access_token))
    }

    /// Resolve a bearer token to its user record.
    ///
    /// Decoding distinguishes malformed from expired tokens; a token whose
    /// subject no longer resolves to a user is its own outcome
    /// ([`AppError::UnknownSubject`]).
    #[instrument(skip(self, token))]
    pub async fn current_user(&self, token: &str) -> ServiceResult<User> {
        let claims = self
            .ctx
            .jwt_service()
            .decode_token(token)
            .map_err(ServiceError::from)?;

        self.ctx
            .user_repo()
            .find_by_username(claims.username())
            .await?
            .ok_or_else(|| {
                warn!("Token subject does not resolve to a user");
                ServiceError::App(AppError::UnknownSubject)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{test_context, MockUserRepository};
    use std::sync::Arc;

    fn register_request(username: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: "hunter2hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_duplicate_fails() {
        let users = Arc::new(MockUserRepository::new());
        let ctx = test_context(users, Default::default(), Default::default());
        let service = AuthService::new(&ctx);

        let created = service.register(register_request("alice")).await.unwrap();
        assert_eq!(created.username, "alice");

        let result = service.register(register_request("alice")).await;
        assert!(matches!(
            result,
            Err(ServiceError::Domain(DomainError::UsernameTaken))
        ));
    }

    #[tokio::test]
    async fn test_login_wrong_password_fails() {
        let users = Arc::new(MockUserRepository::new());
        let ctx = test_context(users, Default::default(), Default::default());
        let service = AuthService::new(&ctx);

        service.register(register_request("alice")).await.unwrap();

        let result = service
            .login(LoginRequest {
                username: "alice".to_string(),
                password: "wrong-password".to_string(),
            })
            .await;
        assert!(matches!(
            result,
            Err(ServiceError::App(AppError::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn test_login_unknown_user_fails_identically() {
        let users = Arc::new(MockUserRepository::new());
        let ctx = test_context(users, Default::default(), Default::default());
        let service = AuthService::new(&ctx);

        let result = service
            .login(LoginRequest {
                username: "nobody".to_string(),
                password: "irrelevant-pass".to_string(),
            })
            .await;
        assert!(matches!(
            result,
            Err(ServiceError::App(AppError::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn test_login_issues_token_verifier_accepts() {
        let users = Arc::new(MockUserRepository::new());
        let ctx = test_context(users, Default::default(), Default::default());
        let service = AuthService::new(&ctx);

        service.register(register_request("alice")).await.unwrap();

        let token = service
            .login(LoginRequest {
                username: "alice".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(token.token_type, "bearer");

        let user = service.current_user(&token.access_token).await.unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_current_user_distinguishes_outcomes() {
        let users = Arc::new(MockUserRepository::new());
        let ctx = test_context(users, Default::default(), Default::default());
        let service = AuthService::new(&ctx);

        // Malformed token
        let result = service.current_user("garbage.token.value").await;
        assert!(matches!(
            result,
            Err(ServiceError::App(AppError::InvalidToken))
        ));

        // Valid token whose subject was never registered
        let token = ctx.jwt_service().issue_token("ghost").unwrap();
        let result = service.current_user(&token).await;
        assert!(matches!(
            result,
            Err(ServiceError::App(AppError::UnknownSubject))
        ));
    }
}
