use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// Request logging middleware. Always forwards the request, then records method,
/// path, caller, status and latency of whatever the inner stack produced.
pub async fn log_request(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let client = client_address(&request);

    let response = next.run(request).await;

    let status = response.status();
    let latency = started.elapsed();
    if status.is_server_error() {
        tracing::warn!(%method, %path, %client, status = status.as_u16(), ?latency, "request failed");
    } else {
        tracing::info!(%method, %path, %client, status = status.as_u16(), ?latency, "request completed");
    }

    response
}

/// First hop from proxy headers, then the socket peer.
fn client_address(request: &Request) -> String {
    forwarded_for(request.headers())
        .or_else(|| {
            request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
        .unwrap_or_else(|| "-".to_string())
}

fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    let from_header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };
    from_header("x-forwarded-for").or_else(|| from_header("x-real-ip"))
}
