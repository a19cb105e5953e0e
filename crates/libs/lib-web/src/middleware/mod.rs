//! # Middleware
//!
//! Axum middleware applied to every response of the static host.
//!
//! ## Modules
//!
//! - **[`mw_req_stamp`]**: Request ID stamping (`X-Request-ID`)
//! - **[`mw_logging`]**: Structured request/response logging
//! - **[`mw_security`]**: Content-Security-Policy for document routes

// region: --- Modules
pub mod mw_logging;
pub mod mw_req_stamp;
pub mod mw_security;
// endregion: --- Modules

// region: --- Re-exports
pub use mw_logging::log_requests;
pub use mw_req_stamp::{stamp_req, RequestStamp, REQUEST_ID_HEADER};
pub use mw_security::{
    apply_csp, content_security_policy, inline_script_hashes, is_asset_path, SecurityPolicy,
};
// endregion: --- Re-exports
