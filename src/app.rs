//! Cake store HTTP application wiring.
//!
//! # Purpose
//! Builds the axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! This module centralizes route composition to keep `main` small and
//! testable.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::store::CakeStore;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub api_version: String,
    pub store: Arc<dyn CakeStore + Send + Sync>,
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            )
        });

    Router::new()
        .route(
            "/cakes",
            axum::routing::get(api::cakes::list_cakes).post(api::cakes::create_cake),
        )
        .route(
            "/cakes/:id",
            axum::routing::get(api::cakes::get_cake)
                .patch(api::cakes::update_cake)
                .put(api::cakes::update_cake)
                .delete(api::cakes::delete_cake),
        )
        .route(
            "/system/info",
            axum::routing::get(api::system::service_info),
        )
        .route(
            "/system/health",
            axum::routing::get(api::system::system_health),
        )
        .route("/openapi.json", axum::routing::get(openapi_document))
        .layer(trace_layer)
        .with_state(state)
}

async fn openapi_document() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}
