//! Service-level endpoints: greeting, ping, versioned health/status/version.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use utoipa::ToSchema;

use crate::api::registry::{self, RouteGroup};
use crate::state::AppState;

pub const TAG: &str = "system";
const SERVICE_NAME: &str = "hanacaraka";
const V2_FEATURES: [&str; 3] = ["enhanced_logging", "metrics", "tracing"];

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PingResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiHealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    /// RFC 3339 time of the response
    pub timestamp: String,
    /// Time since process start, e.g. `1h2m3s`
    pub uptime: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VersionResponse {
    pub version: String,
    pub api_version: String,
    pub build: String,
    pub commit: String,
}

/// Plain-text greeting
#[utoipa::path(
    get,
    path = "/",
    tag = TAG,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn home() -> &'static str {
    "Welcome to Hanacaraka API!\n"
}

/// Liveness ping
#[utoipa::path(
    get,
    path = "/ping",
    tag = TAG,
    responses(
        (status = 200, description = "Pong", body = PingResponse)
    )
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
        status: "ok".to_string(),
    })
}

/// API v1 health
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = TAG,
    responses(
        (status = 200, description = "Service is healthy", body = ApiHealthResponse)
    )
)]
pub async fn health_v1() -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        status: "healthy".to_string(),
        version: "v1".to_string(),
        service: SERVICE_NAME.to_string(),
        features: None,
    })
}

/// API v1 operational status
#[utoipa::path(
    get,
    path = "/api/v1/status",
    tag = TAG,
    responses(
        (status = 200, description = "Operational status", body = StatusResponse)
    )
)]
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "operational".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime: format_uptime(state.started_at.elapsed()),
        version: "v1".to_string(),
    })
}

/// API v1 build information
#[utoipa::path(
    get,
    path = "/api/v1/version",
    tag = TAG,
    responses(
        (status = 200, description = "Build information", body = VersionResponse)
    )
)]
pub async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        version: state.config.app.version.to_string(),
        api_version: "v1".to_string(),
        build: state.config.environment.as_str().to_string(),
        commit: option_env!("GIT_COMMIT").unwrap_or("latest").to_string(),
    })
}

/// Registered route groups
#[utoipa::path(
    get,
    path = "/api/v1/routes",
    tag = TAG,
    responses(
        (status = 200, description = "Route groups served by this API", body = Vec<RouteGroup>)
    )
)]
pub async fn routes() -> Json<Vec<RouteGroup>> {
    Json(registry::route_groups())
}

/// API v2 health, with the enabled feature set
#[utoipa::path(
    get,
    path = "/api/v2/health",
    tag = TAG,
    responses(
        (status = 200, description = "Service is healthy", body = ApiHealthResponse)
    )
)]
pub async fn health_v2() -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        status: "healthy".to_string(),
        version: "v2".to_string(),
        service: SERVICE_NAME.to_string(),
        features: Some(V2_FEATURES.iter().map(|f| f.to_string()).collect()),
    })
}

/// Render a duration as hours/minutes/seconds, dropping leading zero units.
fn format_uptime(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}
