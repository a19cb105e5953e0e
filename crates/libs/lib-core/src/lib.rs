//! # Core Library
//!
//! Client-side domain logic: market aggregation, the swap calculator, the
//! persisted wallet/network/favorites state and the background particle
//! field. Nothing here depends on the browser; the web app supplies a
//! [`store::KeyValueStore`] backed by `localStorage`.

pub mod data;
pub mod error;
pub mod favorites;
pub mod market;
pub mod particles;
pub mod session;
pub mod store;
pub mod swap;
pub mod value;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use favorites::FavoriteSet;
pub use market::MarketAggregator;
pub use swap::SwapCalculator;
