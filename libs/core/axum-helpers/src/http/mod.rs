//! HTTP middleware module.
//!
//! This module provides HTTP-level middleware for:
//! - CORS configuration
//! - Security headers
//! - Per-request access logging
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{create_cors_layer, log_requests, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(log_requests))
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(create_cors_layer(&origins)?);
//! ```

pub mod cors;
pub mod request_log;
pub mod security;

pub use cors::{create_cors_layer, create_permissive_cors_layer};
pub use request_log::{log_requests, request_line};
pub use security::security_headers;
