//! # Centralized Error Handling
//!
//! This module defines the crate-wide error type [`CoreError`] used by the
//! storage layer, the dataset loader and the session helpers.
//!
//! Most UI-facing operations deliberately do not fail: the swap calculator
//! clears a field on bad input and storage reads fall back to a default.
//! `CoreError` covers what is left:
//!
//! - [`Storage`](CoreError::Storage) - the backing key-value store refused a write
//! - [`Serialization`](CoreError::Serialization) - a value could not be (de)serialized
//! - [`Dataset`](CoreError::Dataset) - a bundled dataset violates its invariants
//! - [`InvalidInput`](CoreError::InvalidInput) - a caller passed an unusable value
//!
//! ```rust
//! use lib_core::error::{CoreError, Result};
//!
//! fn require_pair(len: usize) -> Result<()> {
//!     if len < 2 {
//!         return Err(CoreError::InvalidInput("need two tokens".to_string()));
//!     }
//!     Ok(())
//! }
//! assert!(require_pair(1).is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, CoreError>`.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CoreError {
    /// Message safe to show in the error boundary.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::InvalidInput(msg) => msg.clone(),
            CoreError::Storage(_) => "Your browser refused to save this change".to_string(),
            CoreError::Serialization(_) | CoreError::Dataset(_) => {
                "Something went wrong while loading data".to_string()
            }
        }
    }
}

/// Convert `serde_json::Error` to `CoreError`.
impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization(format!("JSON error: {}", err))
    }
}
