//! # Request/Response Logging Middleware
//!
//! One structured line per request and one per response, correlated by the
//! request ID from [`stamp_req`](super::stamp_req). Asset hits log at
//! `debug` so a page load does not drown the document requests.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use super::mw_req_stamp::RequestStamp;
use super::mw_security::is_asset_path;

/// Headers that are never logged verbatim
const SENSITIVE_HEADERS: &[&str] = &["authorization", "cookie", "x-api-key", "x-auth-token"];

pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_asset = is_asset_path(&path);

    let request_id = req
        .extensions()
        .get::<RequestStamp>()
        .map(|s| s.id.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            if SENSITIVE_HEADERS.contains(&name.as_str()) {
                Some((name.to_string(), "***REDACTED***".to_string()))
            } else {
                value.to_str().ok().map(|v| (name.to_string(), v.to_string()))
            }
        })
        .collect();

    if is_asset {
        debug!(request_id = %request_id, method = %method, path = %path, "[REQUEST] asset");
    } else {
        let user_agent = req
            .headers()
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            user_agent = ?user_agent,
            "[REQUEST] {} {}",
            method,
            path
        );
    }
    debug!(request_id = %request_id, headers = ?headers, "[REQUEST HEADERS]");

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();
    let status_code = status.as_u16();

    if status.is_server_error() {
        error!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status_code,
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} [SERVER ERROR]",
            method,
            path,
            status_code
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status_code,
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} [CLIENT ERROR]",
            method,
            path,
            status_code
        );
    } else if is_asset {
        debug!(request_id = %request_id, path = %path, status = status_code, "[RESPONSE] asset");
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status_code,
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms)",
            method,
            path,
            status_code,
            duration.as_millis()
        );
    }

    response
}
