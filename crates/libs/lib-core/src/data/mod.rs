//! # Bundled Datasets
//!
//! The market and token lists are compiled into the binary and parsed on
//! first use. They are never written back; every screen derives views from
//! the cached slices.
//!
//! Parsing validates what the views rely on:
//!
//! - asset names are unique and every TVL figure is a `$…[M|B]` string
//! - composite market keys are unique
//! - token symbols are unique and there are at least two tokens to swap

use shared::{market_key, AssetGroup, Token};
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::value::is_tvl_display;

const MARKETS_JSON: &str = include_str!("markets.json");
const TOKENS_JSON: &str = include_str!("tokens.json");

static ASSET_GROUPS: OnceLock<Vec<AssetGroup>> = OnceLock::new();
static SWAP_TOKENS: OnceLock<Vec<Token>> = OnceLock::new();

/// The bundled asset → market dataset.
pub fn asset_groups() -> Result<&'static [AssetGroup]> {
    if let Some(groups) = ASSET_GROUPS.get() {
        return Ok(groups);
    }
    let parsed = parse_asset_groups(MARKETS_JSON)?;
    debug!(groups = parsed.len(), "[DATA] asset groups loaded");
    Ok(ASSET_GROUPS.get_or_init(|| parsed))
}

/// Tokens offered by the swap screen, in display order.
pub fn swap_tokens() -> Result<&'static [Token]> {
    if let Some(tokens) = SWAP_TOKENS.get() {
        return Ok(tokens);
    }
    let parsed = parse_tokens(TOKENS_JSON)?;
    debug!(tokens = parsed.len(), "[DATA] swap tokens loaded");
    Ok(SWAP_TOKENS.get_or_init(|| parsed))
}

pub fn parse_asset_groups(json: &str) -> Result<Vec<AssetGroup>> {
    let groups: Vec<AssetGroup> = serde_json::from_str(json)?;

    let mut assets = HashSet::new();
    let mut keys = HashSet::new();
    for group in &groups {
        if !assets.insert(group.asset.as_str()) {
            return Err(CoreError::Dataset(format!("duplicate asset {}", group.asset)));
        }
        if !is_tvl_display(&group.total_tvl) {
            return Err(CoreError::Dataset(format!(
                "{}: malformed total TVL {:?}",
                group.asset, group.total_tvl
            )));
        }
        for market in &group.markets {
            let key = market_key(&group.asset, market);
            if !is_tvl_display(&market.tvl) {
                return Err(CoreError::Dataset(format!("{}: malformed TVL {:?}", key, market.tvl)));
            }
            if !keys.insert(key.clone()) {
                return Err(CoreError::Dataset(format!("duplicate market {}", key)));
            }
        }
    }

    Ok(groups)
}

pub fn parse_tokens(json: &str) -> Result<Vec<Token>> {
    let tokens: Vec<Token> = serde_json::from_str(json)?;

    let mut symbols = HashSet::new();
    if let Some(dup) = tokens.iter().find(|t| !symbols.insert(t.symbol.as_str())) {
        return Err(CoreError::Dataset(format!("duplicate token {}", dup.symbol)));
    }
    if tokens.len() < 2 {
        return Err(CoreError::Dataset("at least two swap tokens are required".to_string()));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Network;

    #[test]
    fn test_bundled_datasets_are_valid() {
        let groups = asset_groups().unwrap();
        assert!(!groups.is_empty());
        for network in Network::ALL {
            assert!(
                groups.iter().flat_map(|g| &g.markets).any(|m| m.network == network),
                "no market on {network}"
            );
        }

        let tokens = swap_tokens().unwrap();
        assert!(tokens.len() >= 2);
        assert!(tokens[0].usable_price().is_some() && tokens[1].usable_price().is_some());
    }

    #[test]
    fn test_cached_slice_is_reused() {
        let a = asset_groups().unwrap().as_ptr();
        let b = asset_groups().unwrap().as_ptr();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_duplicate_market_key() {
        let json = r#"[{
            "asset": "X", "categories": [], "totalTvl": "$1M",
            "markets": [
                {"token": "PT-X", "network": "Base", "tvl": "$1M", "volume24h": "$0",
                 "anchorApy": "1%", "realApy": "1%"},
                {"token": "PT-X", "network": "Base", "tvl": "$2M", "volume24h": "$0",
                 "anchorApy": "1%", "realApy": "1%"}
            ]
        }]"#;
        let err = parse_asset_groups(json).unwrap_err();
        assert!(matches!(err, CoreError::Dataset(ref msg) if msg.contains("PT-X-Base")), "{err}");
    }

    #[test]
    fn test_rejects_malformed_tvl() {
        let json = r#"[{"asset": "X", "categories": [], "totalTvl": "about 3M", "markets": []}]"#;
        assert!(matches!(parse_asset_groups(json), Err(CoreError::Dataset(_))));
    }

    #[test]
    fn test_rejects_unknown_network() {
        let json = r#"[{"asset": "X", "categories": [], "totalTvl": "$1M", "markets": [
            {"token": "PT-X", "network": "Solana", "tvl": "$1M", "volume24h": "$0",
             "anchorApy": "1%", "realApy": "1%"}]}]"#;
        assert!(matches!(parse_asset_groups(json), Err(CoreError::Serialization(_))));
    }

    #[test]
    fn test_rejects_duplicate_token() {
        let json = r#"[
            {"symbol": "ETH", "name": "Ethereum", "balance": "1"},
            {"symbol": "ETH", "name": "Ether", "balance": "2"}
        ]"#;
        assert!(matches!(parse_tokens(json), Err(CoreError::Dataset(_))));
        assert!(parse_tokens(r#"[{"symbol": "ETH", "name": "Ethereum", "balance": "1"}]"#).is_err());
    }
}
