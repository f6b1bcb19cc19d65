//! HTTP API request/response types.
//!
//! # Purpose
//! Defines shared payload shapes for the cake REST API and OpenAPI schema
//! generation. The cake record shapes themselves live in `crate::model`.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body returned by a successful delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub result: String,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self {
            result: "success".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ServiceInfo {
    pub api_version: String,
    pub backend: String,
    pub durable_storage: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
}
