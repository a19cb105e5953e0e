//! # Web Library
//!
//! Static host for the compiled front-end: serves `dist/`, falls back to
//! `index.html` for client-side routes and stamps every response with the
//! security headers the app relies on.

pub mod config;
pub mod middleware;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use server::{create_router, init_tracing, start_server};
