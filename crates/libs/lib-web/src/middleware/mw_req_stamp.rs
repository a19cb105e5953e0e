//! # Request Stamping Middleware
//!
//! Gives every request an ID, stores it in the request extensions and echoes
//! it as `X-Request-ID`. An ID supplied by a fronting proxy is kept when it
//! looks sane, so log lines on both sides correlate.
//!
//! The stamp is available to inner layers via `Extension<RequestStamp>`:
//!
//! ```rust,no_run
//! use axum::extract::Extension;
//! use lib_web::middleware::RequestStamp;
//!
//! async fn handler(Extension(stamp): Extension<RequestStamp>) -> String {
//!     format!("Request ID: {}", stamp.id)
//! }
//! ```

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_FORWARDED_ID_LEN: usize = 128;

/// Request metadata for tracing and debugging.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    /// Unique request identifier
    pub id: String,
}

impl RequestStamp {
    fn from_headers(headers: &HeaderMap) -> Self {
        let forwarded = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|id| is_acceptable_id(id))
            .map(str::to_string);

        Self {
            id: forwarded.unwrap_or_else(|| Uuid::new_v4().to_string()),
        }
    }
}

fn is_acceptable_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_FORWARDED_ID_LEN
        && id.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Request stamping middleware.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp::from_headers(req.headers());
    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&stamp.id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_uuid_without_forwarded_id() {
        let stamp = RequestStamp::from_headers(&HeaderMap::new());
        assert!(Uuid::parse_str(&stamp.id).is_ok());
    }

    #[test]
    fn test_keeps_sane_forwarded_id() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("edge-42.a_b"));
        assert_eq!(RequestStamp::from_headers(&headers).id, "edge-42.a_b");
    }

    #[test]
    fn test_replaces_suspicious_forwarded_id() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("a b<script>"));
        assert_ne!(RequestStamp::from_headers(&headers).id, "a b<script>");
    }
}
