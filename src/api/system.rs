//! System/health API handlers.
//!
//! # Purpose
//! Lightweight endpoints for service metadata and health checks, used by
//! probes and operators.
use crate::api::error::{ApiError, api_internal};
use crate::api::types::{HealthStatus, ServiceInfo};
use crate::app::AppState;
use axum::Json;
use axum::extract::State;

#[utoipa::path(
    get,
    path = "/system/info",
    tag = "system",
    responses(
        (status = 200, description = "Service identity and storage backend", body = ServiceInfo)
    )
)]
pub(crate) async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        api_version: state.api_version.clone(),
        backend: state.store.backend_name().to_string(),
        durable_storage: state.store.is_durable(),
    })
}

#[utoipa::path(
    get,
    path = "/system/health",
    tag = "system",
    responses(
        (status = 200, description = "Service health", body = HealthStatus),
        (status = 500, description = "Storage unavailable", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn system_health(
    State(state): State<AppState>,
) -> Result<Json<HealthStatus>, ApiError> {
    // Probe the backing store so dependency failures surface here first.
    if let Err(err) = state.store.health_check().await {
        return Err(api_internal("storage unavailable", &err));
    }
    Ok(Json(HealthStatus {
        status: "ok".to_string(),
    }))
}
