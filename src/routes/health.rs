use axum::Json;
use utoipa::OpenApi;

use crate::models::dto::{HealthStatus, ServiceInfo};

use super::account::ACCOUNTS_PATH;

const SERVICE_NAME: &str = "Account REST API Service";
const SERVICE_VERSION: &str = "1.0";

#[derive(OpenApi)]
#[openapi(paths(health_checker_handler, index_handler))]
/// Defines the OpenAPI spec for health and index endpoints
pub struct HealthApi;

#[utoipa::path(
    get,
    path = "/health",
    tag = "HEALTH",
    responses(
        (status = OK, description = "Service is up", body = HealthStatus)
    )
)]
pub async fn health_checker_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK".to_owned(),
    })
}

#[utoipa::path(
    get,
    path = "/",
    tag = "HEALTH",
    responses(
        (status = OK, description = "Service name and version", body = ServiceInfo)
    )
)]
pub async fn index_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: SERVICE_NAME.to_owned(),
        version: SERVICE_VERSION.to_owned(),
        paths: ACCOUNTS_PATH.to_owned(),
    })
}
