//! One access-log line per request.
//!
//! Complements `TraceLayer` (which records spans and latency) with a flat
//! `<remote> <METHOD> <uri>` line that is easy to grep.

use axum::{
    extract::{ConnectInfo, Request},
    http::{Method, Uri},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

/// Format the access-log line for a request.
///
/// The remote address is `-` when the server was not started with connect
/// info (e.g. in `oneshot` tests).
pub fn request_line(remote: Option<SocketAddr>, method: &Method, uri: &Uri) -> String {
    match remote {
        Some(addr) => format!("{} {} {}", addr, method, uri),
        None => format!("- {} {}", method, uri),
    }
}

/// Middleware that logs every request before it reaches the handler.
///
/// Requires `into_make_service_with_connect_info::<SocketAddr>()` to report
/// the peer address.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    tracing::info!(
        target: "http_access",
        "{}",
        request_line(remote, request.method(), request.uri())
    );

    next.run(request).await
}
