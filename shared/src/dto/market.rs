use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::network::Network;

/// Fixed category tags an asset group can carry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    #[serde(rename = "Stablecoin")]
    Stablecoin,
    #[serde(rename = "Liquid Staking")]
    LiquidStaking,
    #[serde(rename = "Restaking")]
    Restaking,
    #[serde(rename = "RWA")]
    Rwa,
    #[serde(rename = "Points")]
    Points,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Stablecoin,
        Category::LiquidStaking,
        Category::Restaking,
        Category::Rwa,
        Category::Points,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Stablecoin => "Stablecoin",
            Category::LiquidStaking => "Liquid Staking",
            Category::Restaking => "Restaking",
            Category::Rwa => "RWA",
            Category::Points => "Points",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One tradable market of an asset on one network.
///
/// Numeric display fields are kept as the strings shown in the UI
/// (`"$3,269,906"`, `"$1.2M"`, `"10.05%"`); ordering parses them on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub token: String,
    pub network: Network,
    pub tvl: String,
    pub volume_24h: String,
    pub anchor_apy: String,
    pub real_apy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yt_total_supply: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_redeemable_value: Option<f64>,
    #[serde(
        default,
        rename = "syTokenPriceUSD",
        skip_serializing_if = "Option::is_none"
    )]
    pub sy_token_price_usd: Option<f64>,
}

/// An underlying yield-bearing asset and all of its markets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetGroup {
    pub asset: String,
    pub categories: BTreeSet<Category>,
    pub total_tvl: String,
    pub markets: Vec<Market>,
}

/// Composite identity of a market: `"{asset}-{token}-{network}"`.
///
/// Used for favorites and for list-view deduplication.
pub fn market_key(asset: &str, market: &Market) -> String {
    format!("{}-{}-{}", asset, market.token, market.network)
}
