//! Browser-facing services
//!
//! - **[`storage`]**: `localStorage` adapter and change notifications
//! - **[`wallet`]**: mocked wallet connection and network switching

pub mod storage;
pub mod wallet;
