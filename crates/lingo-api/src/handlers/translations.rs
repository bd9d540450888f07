//! Translation handlers
//!
//! Endpoints for translating text and managing translation history. All of
//! them require a bearer token; history operations are scoped to the
//! authenticated owner.

use axum::{
    extract::{Path, State},
    Json,
};
use lingo_service::{
    HistoryEntryResponse, HistoryService, MessageResponse, TranslateRequest, TranslationResponse,
    TranslationService,
};

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Translate text and append it to the caller's history
///
/// POST /translate
pub async fn translate(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<TranslateRequest>,
) -> ApiResult<Json<TranslationResponse>> {
    let service = TranslationService::new(state.service_context());
    let response = service.translate(auth.id(), request).await?;
    Ok(Json(response))
}

/// List the caller's translation history, newest first
///
/// GET /translations/history?skip=&limit=
pub async fn list_history(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<Vec<HistoryEntryResponse>>> {
    let service = HistoryService::new(state.service_context());
    let entries = service
        .list(auth.id(), pagination.skip, pagination.limit)
        .await?;
    Ok(Json(entries))
}

/// Delete one history record owned by the caller
///
/// DELETE /translations/history/{id}
pub async fn delete_history_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(record_id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let service = HistoryService::new(state.service_context());
    service.delete_one(auth.id(), record_id).await?;
    Ok(Json(MessageResponse::new("Translation deleted")))
}

/// Delete the caller's entire translation history
///
/// DELETE /translations/history
pub async fn clear_history(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MessageResponse>> {
    let service = HistoryService::new(state.service_context());
    let deleted = service.delete_all(auth.id()).await?;
    Ok(Json(MessageResponse::new(format!(
        "Deleted {deleted} translations"
    ))))
}
