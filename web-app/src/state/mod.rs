//! Application-wide state
//!
//! Each context is provided once by the root `App` and read with its
//! `use_*_context()` accessor, which panics outside the provider.

pub mod background;
pub mod favorites;
pub mod network;
pub mod wallet;
