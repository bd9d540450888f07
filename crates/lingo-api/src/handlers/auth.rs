//! Authentication handlers
//!
//! Endpoints for user registration and login.

use axum::{extract::State, Form, Json};
use lingo_service::{AuthService, LoginRequest, RegisterRequest, TokenResponse, UserResponse};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with username and password
///
/// POST /login (form-urlencoded, the shape the web client sends)
pub async fn login(
    State(state): State<AppState>,
    Form(request): Form<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}
