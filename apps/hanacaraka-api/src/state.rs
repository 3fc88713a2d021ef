//! Application state management.
//!
//! Shared state for the system endpoints. The user store is not part of it:
//! the users router carries its own service state.

use std::time::Instant;

/// Shared application state.
///
/// Cloned into each system handler; all fields are cheap to copy.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Process start, used to report uptime
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            started_at: Instant::now(),
        }
    }
}
