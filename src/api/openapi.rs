//! OpenAPI schema aggregation for the cake API.
//!
//! # Purpose
//! Collects all routes and payload types into a single OpenAPI document
//! served at `/openapi.json`.
use crate::api::types::{DeleteResponse, ErrorResponse, HealthStatus, ServiceInfo};
use crate::api::{cakes, system};
use crate::model::{Cake, CakeDraft, CakeSummary};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "cakestore",
        version = "v1",
        description = "Cake store HTTP API"
    ),
    paths(
        system::service_info,
        system::system_health,
        cakes::list_cakes,
        cakes::create_cake,
        cakes::get_cake,
        cakes::update_cake,
        cakes::delete_cake
    ),
    components(schemas(
        Cake,
        CakeSummary,
        CakeDraft,
        DeleteResponse,
        ErrorResponse,
        HealthStatus,
        ServiceInfo
    )),
    tags(
        (name = "system", description = "Service metadata and health"),
        (name = "cakes", description = "Cake CRUD")
    )
)]
pub struct ApiDoc;
