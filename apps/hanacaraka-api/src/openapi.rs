use utoipa::OpenApi;

use crate::api::{registry, system};

#[derive(OpenApi)]
#[openapi(
    paths(
        system::home,
        system::ping,
        system::health_v1,
        system::status,
        system::version,
        system::routes,
        system::health_v2,
    ),
    components(
        schemas(
            axum_helpers::ErrorResponse,
            system::PingResponse,
            system::ApiHealthResponse,
            system::StatusResponse,
            system::VersionResponse,
            registry::RouteGroup,
            registry::RouteEntry,
        )
    ),
    info(
        title = "Hanacaraka API",
        version = "1.0.0",
        description = "User management over an in-memory store. The user endpoints are also served under /api/v1/users."
    ),
    nest(
        (path = "/users", api = domain_users::handlers::ApiDoc)
    ),
    tags((name = system::TAG, description = "Greeting, health, status and version endpoints"))
)]
pub struct ApiDoc;
