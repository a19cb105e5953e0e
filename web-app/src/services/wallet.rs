//! Mock wallet service
//!
//! Nothing leaves the browser: connecting waits a moment and invents an
//! address, switching networks waits and records the choice. Results are
//! persisted through [`LocalStorage`].

use gloo_timers::future::TimeoutFuture;
use lib_core::session;
use lib_core::Result;
use rand::{rngs::SmallRng, SeedableRng};
use shared::{Network, NetworkState, WalletState};

use crate::services::storage::LocalStorage;
use crate::utils::constants::{CONNECT_DELAY_MS, SWITCH_NETWORK_DELAY_MS};

/// Seed for the non-cryptographic generators used by the mocks and the
/// background.
pub fn random_seed() -> u64 {
    let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let low = js_sys::Date::now() as u64;
    (high << 32) ^ low
}

pub async fn connect() -> Result<WalletState> {
    TimeoutFuture::new(CONNECT_DELAY_MS).await;
    let address = session::mock_address(&mut SmallRng::seed_from_u64(random_seed()));
    session::connect_wallet(&LocalStorage, &address)
}

pub fn disconnect() -> Result<WalletState> {
    session::disconnect_wallet(&LocalStorage)
}

pub async fn switch_network(network: Network) -> Result<NetworkState> {
    TimeoutFuture::new(SWITCH_NETWORK_DELAY_MS).await;
    session::switch_network(&LocalStorage, network)
}
