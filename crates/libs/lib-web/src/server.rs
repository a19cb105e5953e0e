//! # Server Setup
//!
//! Tracing initialization, router construction and HTTP server startup.
//!
//! The router has a single `/health` route; everything else is resolved
//! against the dist directory. Unknown non-asset paths get `index.html` so
//! the client-side router can take over, while a missing asset stays a 404.
//!
//! The inline bootstrap scripts of `index.html` are hashed when the router is
//! built; rebuilding the front-end needs a restart of the host.

// region: --- Imports
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;
use crate::middleware::{
    apply_csp, inline_script_hashes, is_asset_path, log_requests, stamp_req, RequestStamp,
    SecurityPolicy,
};
// endregion: --- Imports

// region: --- Tracing
/// Install the global subscriber. The filter comes from `LOG_LEVEL`
/// (`trace`…`error`, or a full `EnvFilter` directive), defaulting to `info`.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = tracing_subscriber::EnvFilter::try_new(&log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        warn!("tracing subscriber already installed");
    }
}
// endregion: --- Tracing

// region: --- Server Setup
#[derive(Clone)]
struct SiteState {
    dist_dir: Arc<PathBuf>,
}

/// Initialize and start the HTTP server
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration is invalid
/// - The server cannot bind to the configured address
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing();
    config.validate()?;

    info!("XFORCE YIELD STATIC HOST STARTING");
    info!(dist_dir = %config.dist_dir.display(), "Serving front-end");
    if !config.dist_dir.join("index.html").is_file() {
        warn!(
            dist_dir = %config.dist_dir.display(),
            "index.html not found, build the web app first (trunk build)"
        );
    }
    if !config.connect_src.is_empty() {
        info!(connect_src = ?config.connect_src, "Extra CSP connect-src origins");
    }

    let app = create_router(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("SERVER READY: http://{}", config.bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the router with all layers applied.
pub fn create_router(config: &ServerConfig) -> Router {
    let site = SiteState {
        dist_dir: Arc::new(config.dist_dir.clone()),
    };
    let policy = SecurityPolicy::new(&config.connect_src, &index_script_hashes(&config.dist_dir));

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .fallback(serve_site)
        .with_state(site)
        .layer(middleware::from_fn_with_state(policy, apply_csp))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                },
            ),
        )
        .layer(middleware::from_fn(log_requests))
        // Outermost, so every inner layer sees the stamp
        .layer(middleware::from_fn(stamp_req))
}

/// Hashes of the inline scripts of the built `index.html`; none when it is
/// missing.
fn index_script_hashes(dist_dir: &Path) -> Vec<String> {
    let index = dist_dir.join("index.html");
    match std::fs::read_to_string(&index) {
        Ok(html) => {
            let hashes = inline_script_hashes(&html);
            debug!(count = hashes.len(), "[CSP] inline scripts allowed by hash");
            hashes
        }
        Err(err) => {
            warn!(path = %index.display(), error = %err, "[CSP] index.html unreadable, no inline scripts allowed");
            Vec::new()
        }
    }
}

async fn serve_site(State(site): State<SiteState>, req: Request) -> Response {
    let path = req.uri().path().to_string();

    let res = match ServeDir::new(&*site.dist_dir).oneshot(req).await {
        Ok(res) => res.map(Body::new),
        Err(never) => match never {},
    };

    if res.status() != StatusCode::NOT_FOUND || is_asset_path(&path) {
        return res;
    }

    let index = site.dist_dir.join("index.html");
    match tokio::fs::read(&index).await {
        Ok(bytes) => Html(bytes).into_response(),
        Err(err) => {
            error!(path = %index.display(), error = %err, "[SPA] index.html unavailable");
            (StatusCode::NOT_FOUND, "Front-end not built").into_response()
        }
    }
}
// endregion: --- Server Setup

// endregion: --- Tests
