//! Cake API handlers.
//!
//! # Purpose
//! Implements the five CRUD endpoints over the record store. PATCH and PUT
//! share the update handler; both replace the writable fields wholesale.
//!
//! # Error mapping
//! Non-integer ids and malformed JSON bodies are folded into the standard
//! 400 error body via the extractor rejections; missing records map to 404
//! with the message "Cake not found"; every store failure maps to 500.
use crate::api::error::{ApiError, api_bad_request, api_internal, api_not_found};
use crate::api::types::DeleteResponse;
use crate::app::AppState;
use crate::model::{Cake, CakeDraft, CakeSummary};
use crate::store::StoreError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

const CAKE_NOT_FOUND: &str = "Cake not found";

fn cake_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    let Path(id) = path.map_err(|_| api_bad_request("invalid cake id"))?;
    Ok(id)
}

fn draft_body(body: Result<Json<CakeDraft>, JsonRejection>) -> Result<CakeDraft, ApiError> {
    let Json(draft) = body.map_err(|rejection| api_bad_request(&rejection.body_text()))?;
    Ok(draft)
}

#[utoipa::path(
    get,
    path = "/cakes",
    tag = "cakes",
    responses(
        (status = 200, description = "List cakes", body = [CakeSummary]),
        (status = 500, description = "Store failure", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn list_cakes(
    State(state): State<AppState>,
) -> Result<Json<Vec<CakeSummary>>, ApiError> {
    let items = state
        .store
        .list_cakes()
        .await
        .map_err(|err| api_internal("failed to list cakes", &err))?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/cakes",
    tag = "cakes",
    request_body = CakeDraft,
    responses(
        (status = 201, description = "Cake created", body = Cake),
        (status = 400, description = "Malformed body", body = crate::api::types::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn create_cake(
    State(state): State<AppState>,
    body: Result<Json<CakeDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = draft_body(body)?;
    match state.store.create_cake(draft).await {
        Ok(cake) => Ok((StatusCode::CREATED, Json(cake))),
        Err(err) => Err(api_internal("failed to create cake", &err)),
    }
}

#[utoipa::path(
    get,
    path = "/cakes/{id}",
    tag = "cakes",
    params(("id" = i64, Path, description = "Cake identifier")),
    responses(
        (status = 200, description = "Fetch cake", body = Cake),
        (status = 400, description = "Non-integer id", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Cake not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_cake(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Cake>, ApiError> {
    let id = cake_id(path)?;
    match state.store.get_cake(id).await {
        Ok(cake) => Ok(Json(cake)),
        Err(StoreError::NotFound(_)) => Err(api_not_found(CAKE_NOT_FOUND)),
        Err(err) => Err(api_internal("failed to fetch cake", &err)),
    }
}

#[utoipa::path(
    patch,
    path = "/cakes/{id}",
    tag = "cakes",
    params(("id" = i64, Path, description = "Cake identifier")),
    request_body = CakeDraft,
    responses(
        (status = 200, description = "Cake updated", body = Cake),
        (status = 400, description = "Non-integer id or malformed body", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Cake not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn update_cake(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    body: Result<Json<CakeDraft>, JsonRejection>,
) -> Result<Json<Cake>, ApiError> {
    let id = cake_id(path)?;
    let draft = draft_body(body)?;
    match state.store.update_cake(id, draft).await {
        Ok(cake) => Ok(Json(cake)),
        Err(StoreError::NotFound(_)) => Err(api_not_found(CAKE_NOT_FOUND)),
        Err(err) => Err(api_internal("failed to update cake", &err)),
    }
}

#[utoipa::path(
    delete,
    path = "/cakes/{id}",
    tag = "cakes",
    params(("id" = i64, Path, description = "Cake identifier")),
    responses(
        (status = 200, description = "Cake deleted", body = DeleteResponse),
        (status = 400, description = "Non-integer id", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Cake not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn delete_cake(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = cake_id(path)?;
    match state.store.delete_cake(id).await {
        Ok(()) => Ok(Json(DeleteResponse::success())),
        Err(StoreError::NotFound(_)) => Err(api_not_found(CAKE_NOT_FOUND)),
        Err(err) => Err(api_internal("failed to delete cake", &err)),
    }
}
