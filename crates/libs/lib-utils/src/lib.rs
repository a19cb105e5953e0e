//! # Utilities Library
//!
//! Shared helpers for environment variables, number formatting and numeric
//! input sanitising.

pub mod envs;
pub mod format;
pub mod input;

// Re-export commonly used functions
pub use envs::{get_env_list, get_env_or};
pub use format::{format_fixed, format_number, format_usd_compact};
pub use input::{sanitize_decimal, strip_thousands};
