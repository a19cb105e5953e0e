//! # Security Headers Middleware
//!
//! Attaches the `Content-Security-Policy` to document responses. Static
//! assets (`/assets/`, `/pkg/`, `/favicon.ico`, anything with a file
//! extension) are served without it; the policy only matters for documents.
//!
//! Inline scripts are only allowed by hash. Trunk starts the wasm module
//! from an inline `<script type="module">`, so the host hashes the inline
//! scripts of the built `index.html` ([`inline_script_hashes`]) and lists
//! them in `script-src`.
//!
//! ```rust,no_run
//! use axum::{middleware, Router};
//! use lib_web::middleware::{apply_csp, SecurityPolicy};
//!
//! let policy = SecurityPolicy::new(&[], &[]);
//! let app: Router = Router::new()
//!     .layer(middleware::from_fn_with_state(policy, apply_csp));
//! ```

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::warn;

const ASSET_PREFIXES: &[&str] = &["/assets/", "/pkg/"];

const STATIC_EXTENSIONS: &[&str] = &[
    "js", "mjs", "wasm", "css", "map", "json", "png", "jpg", "jpeg", "gif", "svg", "webp", "ico",
    "woff", "woff2", "ttf", "otf", "txt", "webmanifest",
];

/// Whether `path` names a static asset rather than an application route.
pub fn is_asset_path(path: &str) -> bool {
    if ASSET_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) || path == "/favicon.ico" {
        return true;
    }
    let file_name = path.rsplit('/').next().unwrap_or_default();
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| {
            !stem.is_empty() && STATIC_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
        })
}

/// `'sha256-…'` sources for every inline `<script>` of `html`, in document
/// order. Scripts with a `src` attribute are skipped.
pub fn inline_script_hashes(html: &str) -> Vec<String> {
    // ASCII lowercasing keeps byte offsets aligned with `html`.
    let lower = html.to_ascii_lowercase();
    let mut hashes = Vec::new();
    let mut pos = 0;

    while let Some(found) = lower[pos..].find("<script") {
        let tag_start = pos + found;
        let Some(tag_len) = lower[tag_start..].find('>') else {
            break;
        };
        let body_start = tag_start + tag_len + 1;
        let Some(body_len) = lower[body_start..].find("</script") else {
            break;
        };
        let body_end = body_start + body_len;

        if !has_src_attribute(&lower[tag_start..body_start]) {
            hashes.push(script_hash_source(&html[body_start..body_end]));
        }
        pos = body_end;
    }

    hashes
}

fn has_src_attribute(tag: &str) -> bool {
    tag.split(|c: char| c.is_ascii_whitespace())
        .any(|attr| attr == "src" || attr.starts_with("src="))
}

fn script_hash_source(script: &str) -> String {
    format!("'sha256-{}'", STANDARD.encode(Sha256::digest(script.as_bytes())))
}

/// The policy string, with `connect_src` appended to `connect-src 'self'`
/// and `script_hashes` to `script-src`.
pub fn content_security_policy(connect_src: &[String], script_hashes: &[String]) -> String {
    let mut connect = String::from("'self'");
    for src in connect_src {
        connect.push(' ');
        connect.push_str(src);
    }

    let mut script = String::from("'self' 'wasm-unsafe-eval'");
    for hash in script_hashes {
        script.push(' ');
        script.push_str(hash);
    }

    [
        "default-src 'self'".to_string(),
        format!("script-src {}", script),
        "style-src 'self' 'unsafe-inline'".to_string(),
        "img-src 'self' data: https:".to_string(),
        format!("connect-src {}", connect),
        "font-src 'self' data:".to_string(),
        "frame-ancestors 'none'".to_string(),
    ]
    .join("; ")
}

/// Pre-rendered policy header, shared by all requests.
#[derive(Debug, Clone)]
pub struct SecurityPolicy {
    csp: Arc<HeaderValue>,
}

impl SecurityPolicy {
    pub fn new(connect_src: &[String], script_hashes: &[String]) -> Self {
        let policy = content_security_policy(connect_src, script_hashes);
        let csp = HeaderValue::from_str(&policy).unwrap_or_else(|err| {
            // Sources are validated by ServerConfig; this only triggers for
            // hand-built configs.
            warn!(error = %err, "[CSP] invalid connect-src, falling back to 'self' only");
            HeaderValue::from_static(
                "default-src 'self'; script-src 'self' 'wasm-unsafe-eval'; \
                 style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; \
                 connect-src 'self'; font-src 'self' data:; frame-ancestors 'none'",
            )
        });
        Self { csp: Arc::new(csp) }
    }

    pub fn header_value(&self) -> &HeaderValue {
        &self.csp
    }
}

/// CSP middleware.
pub async fn apply_csp(State(policy): State<SecurityPolicy>, req: Request, next: Next) -> Response {
    let is_asset = is_asset_path(req.uri().path());
    let mut res = next.run(req).await;

    if !is_asset {
        res.headers_mut()
            .insert(header::CONTENT_SECURITY_POLICY, policy.header_value().clone());
    }

    res
}
