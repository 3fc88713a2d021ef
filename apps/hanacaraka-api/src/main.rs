use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let user_service = api::users::service(config.seed_sample_users);
    info!(
        seeded = config.seed_sample_users,
        environment = config.environment.as_str(),
        "User store initialized"
    );

    let state = AppState::new(config);
    let app = api::app(&state, user_service)?;

    info!(
        "Starting {} v{} (shutdown timeout {:?})",
        state.config.app.name, state.config.app.version, state.config.server.shutdown_timeout
    );

    create_production_app(app, &state.config.server, async {
        info!("Shutting down: in-memory user store is discarded");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Hanacaraka API shutdown complete");
    Ok(())
}
