use axum::{Router, routing::get};
use axum_helpers::server::{create_router, health_router};
use domain_users::{InMemoryUserRepository, UserService};

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod registry;
pub mod system;
pub mod users;

/// Creates the application routes.
///
/// Returns a stateless Router (all sub-routers have state already applied).
/// The user service is cloned into both user mounts, so `/users` and
/// `/api/v1/users` operate on the same store.
pub fn routes(state: &AppState, user_service: UserService<InMemoryUserRepository>) -> Router {
    let basic = Router::new()
        .route("/", get(system::home))
        .route("/ping", get(system::ping))
        .merge(health_router(state.config.app));

    let api_v1 = Router::new()
        .route("/health", get(system::health_v1))
        .route("/status", get(system::status))
        .route("/version", get(system::version))
        .route("/routes", get(system::routes))
        .with_state(state.clone())
        .nest("/users", users::router(user_service.clone()));

    let api_v2 = Router::new().route("/health", get(system::health_v2));

    basic
        .nest("/users", users::router(user_service))
        .nest("/api/v1", api_v1)
        .nest("/api/v2", api_v2)
}

/// Full application: routes plus docs, fallbacks and middleware.
pub fn app(
    state: &AppState,
    user_service: UserService<InMemoryUserRepository>,
) -> eyre::Result<Router> {
    let cors = state.config.cors_layer()?;
    Ok(create_router::<ApiDoc>(routes(state, user_service), cors))
}
