use axum_helpers::{create_cors_layer, create_permissive_cors_layer};
use core_config::{AppInfo, FromEnv, app_info, env_bool, env_list, server::ServerConfig};
use tower_http::cors::CorsLayer;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Origins from CORS_ALLOWED_ORIGIN (comma-separated)
    pub cors_allowed_origins: Vec<String>,
    /// Whether the user store starts with the three sample users
    pub seed_sample_users: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let seed_sample_users = env_bool("SEED_SAMPLE_USERS", true)?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            cors_allowed_origins: env_list("CORS_ALLOWED_ORIGIN"),
            seed_sample_users,
        })
    }

    /// Explicit origins always win. Without any, development is permissive
    /// and production allows no cross-origin callers.
    pub fn cors_layer(&self) -> eyre::Result<CorsLayer> {
        if self.cors_allowed_origins.is_empty() && self.environment.is_development() {
            return Ok(create_permissive_cors_layer());
        }

        Ok(create_cors_layer(&self.cors_allowed_origins)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const VARS: [&str; 6] = [
        "APP_ENV",
        "HOST",
        "PORT",
        "CORS_ALLOWED_ORIGIN",
        "SEED_SAMPLE_USERS",
        "SHUTDOWN_TIMEOUT_SECS",
    ];

    fn with_env<F: FnOnce()>(overrides: &[(&str, &str)], f: F) {
        let vars: Vec<(&str, Option<&str>)> = VARS
            .iter()
            .map(|key| {
                let value = overrides.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
                (*key, value)
            })
            .collect();
        temp_env::with_vars(vars, f);
    }

    #[test]
    fn test_defaults() {
        with_env(&[], || {
            let config = Config::from_env().unwrap();

            assert_eq!(config.app.name, "hanacaraka_api");
            assert_eq!(config.server.address(), "0.0.0.0:8080");
            assert_eq!(config.server.shutdown_timeout, Duration::from_secs(30));
            assert_eq!(config.environment, Environment::Development);
            assert!(config.cors_allowed_origins.is_empty());
            assert!(config.seed_sample_users);
        });
    }

    #[test]
    fn test_overrides() {
        with_env(
            &[
                ("APP_ENV", "production"),
                ("HOST", "127.0.0.1"),
                ("PORT", "9090"),
                (
                    "CORS_ALLOWED_ORIGIN",
                    "http://localhost:3000, https://example.com",
                ),
                ("SEED_SAMPLE_USERS", "false"),
                ("SHUTDOWN_TIMEOUT_SECS", "5"),
            ],
            || {
                let config = Config::from_env().unwrap();

                assert_eq!(config.server.address(), "127.0.0.1:9090");
                assert_eq!(config.server.shutdown_timeout, Duration::from_secs(5));
                assert!(config.environment.is_production());
                assert_eq!(
                    config.cors_allowed_origins,
                    ["http://localhost:3000", "https://example.com"]
                );
                assert!(!config.seed_sample_users);
                assert!(config.cors_layer().is_ok());
            },
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        with_env(&[("PORT", "not-a-port")], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }

    #[test]
    fn test_invalid_seed_flag_is_rejected() {
        with_env(&[("SEED_SAMPLE_USERS", "maybe")], || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_invalid_cors_origin_is_rejected() {
        with_env(&[("CORS_ALLOWED_ORIGIN", "http://bad\norigin")], || {
            let config = Config::from_env().unwrap();
            assert!(config.cors_layer().is_err());
        });
    }
}
