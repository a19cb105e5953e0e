//! Mock wallet and network session.
//!
//! Nothing here talks to a chain: connecting assigns a random address and
//! switching networks only records the choice. Both states are persisted
//! (`walletState`, `networkState`) so a reload keeps the session. The
//! artificial latency lives with the caller, which owns the timers.

use rand::RngCore;
use shared::{is_evm_address, Network, NetworkState, WalletState};
use tracing::info;

use crate::error::{CoreError, Result};
use crate::store::{read_json, write_json, KeyValueStore, StorageKey};

/// `0x` followed by 40 random hex digits.
pub fn mock_address<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 20];
    rng.fill_bytes(&mut bytes);
    format!("0x{}", hex::encode(bytes))
}

pub fn load_wallet<S: KeyValueStore + ?Sized>(store: &S) -> WalletState {
    read_json(store, StorageKey::WalletState, WalletState::default())
}

pub fn load_network<S: KeyValueStore + ?Sized>(store: &S) -> NetworkState {
    read_json(store, StorageKey::NetworkState, NetworkState::default())
}

/// Mark the wallet connected to `address` and persist it.
pub fn connect_wallet<S: KeyValueStore + ?Sized>(store: &S, address: &str) -> Result<WalletState> {
    if !is_evm_address(address) {
        return Err(CoreError::InvalidInput(format!("not a wallet address: {}", address)));
    }
    let state = WalletState::connected(address.to_string());
    write_json(store, StorageKey::WalletState, &state)?;
    info!(address, "[SESSION] wallet connected");
    Ok(state)
}

pub fn disconnect_wallet<S: KeyValueStore + ?Sized>(store: &S) -> Result<WalletState> {
    let state = WalletState::default();
    write_json(store, StorageKey::WalletState, &state)?;
    info!("[SESSION] wallet disconnected");
    Ok(state)
}

pub fn switch_network<S: KeyValueStore + ?Sized>(store: &S, network: Network) -> Result<NetworkState> {
    let state = NetworkState::new(network);
    write_json(store, StorageKey::NetworkState, &state)?;
    info!(network = network.name(), chain_id = state.chain_id, "[SESSION] network switched");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_mock_address_shape() {
        let mut rng = SmallRng::seed_from_u64(7);
        let address = mock_address(&mut rng);
        assert!(is_evm_address(&address), "{address}");
        assert_ne!(address, mock_address(&mut rng));
    }

    #[test]
    fn test_session_survives_reload() {
        let store = MemoryStore::new();
        let address = mock_address(&mut SmallRng::seed_from_u64(1));
        connect_wallet(&store, &address).unwrap();
        switch_network(&store, Network::Arbitrum).unwrap();

        assert_eq!(load_wallet(&store).address(), Some(address.as_str()));
        assert_eq!(load_network(&store), NetworkState::new(Network::Arbitrum));

        disconnect_wallet(&store).unwrap();
        assert!(!load_wallet(&store).is_connected);
    }

    #[test]
    fn test_defaults_when_nothing_stored() {
        let store = MemoryStore::new();
        assert_eq!(load_wallet(&store), WalletState::default());
        assert_eq!(load_network(&store).network, Network::Ethereum);
    }

    #[test]
    fn test_rejects_non_address() {
        let store = MemoryStore::new();
        assert!(connect_wallet(&store, "vitalik.eth").is_err());
        assert!(store.is_empty());
    }
}
