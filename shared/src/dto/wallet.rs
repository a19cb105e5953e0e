use serde::{Deserialize, Serialize};

use super::network::Network;

/// Persisted wallet session (`walletState` storage entry).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    pub is_connected: bool,
    #[serde(default)]
    pub address: Option<String>,
}

impl WalletState {
    pub fn connected(address: String) -> Self {
        Self {
            is_connected: true,
            address: Some(address),
        }
    }

    pub fn address(&self) -> Option<&str> {
        if self.is_connected {
            self.address.as_deref()
        } else {
            None
        }
    }
}

/// Persisted network selection (`networkState` storage entry).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkState {
    pub network: Network,
    pub chain_id: u64,
}

impl NetworkState {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            chain_id: network.chain_id(),
        }
    }
}

impl Default for NetworkState {
    fn default() -> Self {
        Self::new(Network::Ethereum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_state_json() {
        let state = WalletState::connected("0xabc".to_string());
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"isConnected":true,"address":"0xabc"}"#);
    }

    #[test]
    fn test_disconnected_hides_stale_address() {
        let state = WalletState {
            is_connected: false,
            address: Some("0xabc".to_string()),
        };
        assert_eq!(state.address(), None);
    }

    #[test]
    fn test_network_state_json() {
        let json = serde_json::to_string(&NetworkState::new(Network::Base)).unwrap();
        assert_eq!(json, r#"{"network":"Base","chainId":8453}"#);
    }
}
