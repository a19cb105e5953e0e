use serde::{Deserialize, Serialize};
use std::fmt;

/// Networks a market can be listed on.
///
/// The serialized form is the display name used by the bundled datasets and
/// by the persisted `networkState` entry (e.g. `"BNB Chain"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Network {
    #[serde(rename = "Ethereum")]
    Ethereum,
    #[serde(rename = "Arbitrum")]
    Arbitrum,
    #[serde(rename = "Base")]
    Base,
    #[serde(rename = "BNB Chain")]
    BnbChain,
    #[serde(rename = "Blast")]
    Blast,
}

impl Network {
    /// Every network offered by the network filter, in menu order.
    pub const ALL: [Network; 5] = [
        Network::Ethereum,
        Network::Arbitrum,
        Network::Base,
        Network::BnbChain,
        Network::Blast,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Network::Ethereum => "Ethereum",
            Network::Arbitrum => "Arbitrum",
            Network::Base => "Base",
            Network::BnbChain => "BNB Chain",
            Network::Blast => "Blast",
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Ethereum => 1,
            Network::Arbitrum => 42161,
            Network::Base => 8453,
            Network::BnbChain => 56,
            Network::Blast => 81457,
        }
    }

    /// Block explorer base URL, without trailing slash.
    pub fn explorer_url(&self) -> &'static str {
        match self {
            Network::Ethereum => "https://etherscan.io",
            Network::Arbitrum => "https://arbiscan.io",
            Network::Base => "https://basescan.org",
            Network::BnbChain => "https://bscscan.com",
            Network::Blast => "https://blastscan.io",
        }
    }

    /// Look a network up by its display name.
    pub fn from_name(name: &str) -> Option<Network> {
        Network::ALL.into_iter().find(|n| n.name() == name)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Network::BnbChain).unwrap();
        assert_eq!(json, "\"BNB Chain\"");
        let parsed: Network = serde_json::from_str("\"Arbitrum\"").unwrap();
        assert_eq!(parsed, Network::Arbitrum);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Network::from_name("Base"), Some(Network::Base));
        assert_eq!(Network::from_name("Solana"), None);
    }
}
