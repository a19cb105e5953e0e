//! # Data Transfer Objects (DTOs)
//!
//! Data structures shared by the core logic, the static host and the web app.
//! They are also the on-disk shape of the bundled datasets and of the entries
//! persisted in browser storage.
//!
//! ## Module Organization
//!
//! - [`market`] - Asset groups, markets, categories and the composite market key
//! - [`network`] - Supported networks with chain ids and explorers
//! - [`token`] - Swap tokens and their icons
//! - [`wallet`] - Persisted wallet and network session state
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase (`#[serde(rename_all = "camelCase")]`), matching
//!   the storage entries written by the front-end
//! - **Enums**: serialize to their display names (`"BNB Chain"`, `"Liquid Staking"`)
//! - **Optional numbers**: omitted when `None`
//!
//! ```text
//! walletState      {"isConnected":true,"address":"0x1f9c...e2a0"}
//! networkState     {"network":"Arbitrum","chainId":42161}
//! favoritedMarkets ["stETH-PT-stETH-Ethereum"]
//! ```

pub mod market;
pub mod network;
pub mod token;
pub mod wallet;

pub use market::*;
pub use network::*;
pub use token::*;
pub use wallet::*;
