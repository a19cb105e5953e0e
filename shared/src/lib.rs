//! # Shared Data Transfer Objects Library
//!
//! This library defines the data contract between the core logic, the static
//! host and the Leptos front-end. All DTOs use `serde` and double as the shape
//! of the bundled datasets and of the entries persisted in browser storage.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::market`]**: Asset groups, markets, categories
//!   - **[`dto::network`]**: Supported networks
//!   - **[`dto::token`]**: Swap tokens
//!   - **[`dto::wallet`]**: Wallet and network session state
//! - **[`links`]**: Explorer and share-intent URL builders
//! - **[`utils`]**: Address formatting
//!
//! ## Usage
//!
//! ```rust
//! use shared::{market_key, Network, WalletState};
//! use shared::utils::truncate_address;
//!
//! let wallet = WalletState::connected("0x1f9c6a55b3d1a1e2c40c5f9d3b7e8a4c2d6be2a0".to_string());
//! let display = truncate_address(wallet.address().unwrap_or_default());
//! assert_eq!(display, "0x1f9c...e2a0");
//! assert_eq!(Network::Base.chain_id(), 8453);
//! ```

pub mod dto;
pub mod links;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
