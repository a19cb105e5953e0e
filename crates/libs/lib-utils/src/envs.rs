//! # Environment Variables
//!
//! Utilities for reading environment variables with defaults.

use std::env;

/// Get an environment variable, falling back to `default` when unset or blank.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    match env::var(name) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => default.to_string(),
    }
}

/// Get a whitespace or comma separated list. Unset means empty.
pub fn get_env_list(name: &'static str) -> Vec<String> {
    env::var(name)
        .map(|val| split_list(&val))
        .unwrap_or_default()
}

fn split_list(val: &str) -> Vec<String> {
    val.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
