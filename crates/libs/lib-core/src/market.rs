//! # Market Data Aggregator
//!
//! Filters and orders the static asset → market dataset for the two market
//! screens:
//!
//! - the **grouped view** ([`filter_markets`]): asset groups narrowed by
//!   network, favorites and category, ordered by total TVL (largest first);
//! - the **flat list** ([`flatten_markets`] + [`sort_rows`]): one row per
//!   market with derived fields, ordered by any column.
//!
//! Every derivation is a pure function of its inputs and never mutates the
//! dataset. [`MarketAggregator`] bundles the filter and sort selections the
//! UI edits, and derives both views on demand.
//!
//! ```rust
//! use lib_core::favorites::FavoriteSet;
//! use lib_core::market::{MarketAggregator, SortColumn};
//!
//! let groups = lib_core::data::asset_groups()?;
//! let mut aggregator = MarketAggregator::new(groups);
//! aggregator.sort_by(SortColumn::RealApy);
//!
//! let rows = aggregator.rows(&FavoriteSet::new());
//! assert!(!rows.is_empty());
//! # Ok::<(), lib_core::CoreError>(())
//! ```

use serde::Serialize;
use shared::{market_key, AssetGroup, Category, Market, Network};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::favorites::FavoriteSet;
use crate::value::display_value;

// region: --- Selections

/// Market screen tab. Only `Favorites` filters anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarketTab {
    #[default]
    All,
    Favorites,
}

/// Category menu selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(category) => category.name(),
        }
    }

    fn admits(&self, categories: &BTreeSet<Category>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => categories.contains(category),
        }
    }
}

/// Columns of the flat market list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Asset,
    Token,
    Network,
    Tvl,
    Volume24h,
    AnchorApy,
    RealApy,
    /// Orders by the derived YT redeemable value rather than a display string.
    YtRedeemableValue,
}

impl SortColumn {
    pub const ALL: [SortColumn; 8] = [
        SortColumn::Asset,
        SortColumn::Token,
        SortColumn::Network,
        SortColumn::Tvl,
        SortColumn::Volume24h,
        SortColumn::AnchorApy,
        SortColumn::RealApy,
        SortColumn::YtRedeemableValue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Asset => "Asset",
            SortColumn::Token => "Token",
            SortColumn::Network => "Network",
            SortColumn::Tvl => "TVL",
            SortColumn::Volume24h => "24h Volume",
            SortColumn::AnchorApy => "Anchor APY",
            SortColumn::RealApy => "Real APY",
            SortColumn::YtRedeemableValue => "YT Redeemable",
        }
    }

    fn compare(&self, a: &MarketRow, b: &MarketRow) -> Ordering {
        match self {
            SortColumn::Asset => a.asset.cmp(&b.asset),
            SortColumn::Token => a.market.token.cmp(&b.market.token),
            SortColumn::Network => a.market.network.name().cmp(b.market.network.name()),
            SortColumn::Tvl => by_value(&a.market.tvl, &b.market.tvl),
            SortColumn::Volume24h => by_value(&a.market.volume_24h, &b.market.volume_24h),
            SortColumn::AnchorApy => by_value(&a.market.anchor_apy, &b.market.anchor_apy),
            SortColumn::RealApy => by_value(&a.market.real_apy, &b.market.real_apy),
            SortColumn::YtRedeemableValue => a
                .yt_redeemable_value_usd
                .total_cmp(&b.yt_redeemable_value_usd),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        })
    }
}

/// Filter inputs of the grouped view. Favorites are passed separately since
/// they live in durable storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketFilters {
    pub networks: BTreeSet<Network>,
    pub tab: MarketTab,
    pub category: CategoryFilter,
}

impl Default for MarketFilters {
    fn default() -> Self {
        Self {
            networks: Network::ALL.into_iter().collect(),
            tab: MarketTab::All,
            category: CategoryFilter::All,
        }
    }
}

fn by_value(a: &str, b: &str) -> Ordering {
    display_value(a).total_cmp(&display_value(b))
}

// endregion: --- Selections

// region: --- Derivations

/// One row of the flat market list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRow {
    /// Composite `"{asset}-{token}-{network}"` key.
    pub key: String,
    pub asset: String,
    pub market: Market,
    pub yt_redeemable_value_usd: f64,
}

/// `totalRedeemableValue × syTokenPriceUSD / ytTotalSupply`, or `0` when any
/// operand is missing or non-finite, or the supply is zero.
pub fn yt_redeemable_value_usd(market: &Market) -> f64 {
    let operands = (
        market.total_redeemable_value.filter(|v| v.is_finite()),
        market.sy_token_price_usd.filter(|v| v.is_finite()),
        market.yt_total_supply.filter(|v| v.is_finite() && *v != 0.0),
    );
    match operands {
        (Some(redeemable), Some(price), Some(supply)) => {
            let value = redeemable * price / supply;
            if value.is_finite() {
                value
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

/// Grouped view: narrow each group's markets by network and (on the
/// Favorites tab) by favorite key, drop emptied groups, apply the category
/// filter and order groups by total TVL, largest first.
///
/// The sort is stable, so groups with equal TVL keep dataset order.
pub fn filter_markets(
    groups: &[AssetGroup],
    filters: &MarketFilters,
    favorites: &FavoriteSet,
) -> Vec<AssetGroup> {
    let mut filtered: Vec<AssetGroup> = groups
        .iter()
        .filter_map(|group| {
            let markets: Vec<Market> = group
                .markets
                .iter()
                .filter(|m| filters.networks.contains(&m.network))
                .filter(|m| match filters.tab {
                    MarketTab::All => true,
                    MarketTab::Favorites => favorites.contains(&market_key(&group.asset, m)),
                })
                .cloned()
                .collect();

            if markets.is_empty() {
                return None;
            }
            Some(AssetGroup {
                markets,
                ..group.clone()
            })
        })
        .filter(|group| filters.category.admits(&group.categories))
        .collect();

    filtered.sort_by(|a, b| display_value(&b.total_tvl).total_cmp(&display_value(&a.total_tvl)));
    filtered
}

/// Expand groups into one row per market, in group order. A composite key
/// seen twice keeps its first row.
pub fn flatten_markets(groups: &[AssetGroup]) -> Vec<MarketRow> {
    let mut seen = HashSet::new();
    groups
        .iter()
        .flat_map(|group| {
            group.markets.iter().map(move |market| MarketRow {
                key: market_key(&group.asset, market),
                asset: group.asset.clone(),
                market: market.clone(),
                yt_redeemable_value_usd: yt_redeemable_value_usd(market),
            })
        })
        .filter(|row| seen.insert(row.key.clone()))
        .collect()
}

/// Stable sort of list rows. Ties keep their incoming order in both
/// directions, so flipping the direction reverses every non-tied pair.
pub fn sort_rows(rows: &mut [MarketRow], column: SortColumn, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = column.compare(a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

// endregion: --- Derivations

// region: --- MarketAggregator

/// Filter and sort selections of the market screens over a borrowed dataset.
#[derive(Debug, Clone)]
pub struct MarketAggregator<'a> {
    dataset: &'a [AssetGroup],
    filters: MarketFilters,
    sort_column: SortColumn,
    sort_direction: SortDirection,
}

impl<'a> MarketAggregator<'a> {
    /// All networks, no tab or category filter, TVL descending.
    pub fn new(dataset: &'a [AssetGroup]) -> Self {
        Self {
            dataset,
            filters: MarketFilters::default(),
            sort_column: SortColumn::Tvl,
            sort_direction: SortDirection::Desc,
        }
    }

    pub fn filters(&self) -> &MarketFilters {
        &self.filters
    }

    pub fn sort_column(&self) -> SortColumn {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn is_network_selected(&self, network: Network) -> bool {
        self.filters.networks.contains(&network)
    }

    /// Add or remove one network. Removing the last one is allowed and
    /// empties both views.
    pub fn toggle_network(&mut self, network: Network) {
        if !self.filters.networks.remove(&network) {
            self.filters.networks.insert(network);
        }
    }

    pub fn select_all_networks(&mut self) {
        self.filters.networks = Network::ALL.into_iter().collect();
    }

    pub fn set_tab(&mut self, tab: MarketTab) {
        self.filters.tab = tab;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filters.category = category;
    }

    /// Header click: the active column flips direction, a new column starts
    /// descending.
    pub fn sort_by(&mut self, column: SortColumn) {
        if self.sort_column == column {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_column = column;
            self.sort_direction = SortDirection::Desc;
        }
    }

    pub fn set_sort(&mut self, column: SortColumn, direction: SortDirection) {
        self.sort_column = column;
        self.sort_direction = direction;
    }

    /// Grouped (menu) view.
    pub fn grouped(&self, favorites: &FavoriteSet) -> Vec<AssetGroup> {
        filter_markets(self.dataset, &self.filters, favorites)
    }

    /// Flat (list) view, ordered by the current sort selection.
    pub fn rows(&self, favorites: &FavoriteSet) -> Vec<MarketRow> {
        let mut rows = flatten_markets(&self.grouped(favorites));
        sort_rows(&mut rows, self.sort_column, self.sort_direction);
        rows
    }
}

// endregion: --- MarketAggregator

#[cfg(test)]
mod tests {
    use super::*;

    fn market(token: &str, network: Network, tvl: &str, real_apy: &str) -> Market {
        Market {
            token: token.to_string(),
            network,
            tvl: tvl.to_string(),
            volume_24h: "$10,000".to_string(),
            anchor_apy: "5%".to_string(),
            real_apy: real_apy.to_string(),
            yt_total_supply: Some(100.0),
            total_redeemable_value: Some(10.0),
            sy_token_price_usd: Some(2.0),
        }
    }

    fn group(asset: &str, categories: &[Category], total_tvl: &str, markets: Vec<Market>) -> AssetGroup {
        AssetGroup {
            asset: asset.to_string(),
            categories: categories.iter().copied().collect(),
            total_tvl: total_tvl.to_string(),
            markets,
        }
    }

    fn dataset() -> Vec<AssetGroup> {
        vec![
            group(
                "sUSDe",
                &[Category::Stablecoin],
                "$950,000",
                vec![
                    market("PT-sUSDe", Network::Ethereum, "$600,000", "12%"),
                    market("PT-sUSDe", Network::Arbitrum, "$350,000", "14%"),
                ],
            ),
            group(
                "stETH",
                &[Category::LiquidStaking],
                "$3.27M",
                vec![
                    market("PT-stETH", Network::Ethereum, "$2.5M", "3.5%"),
                    market("PT-stETH", Network::Base, "$770,000", "4.1%"),
                ],
            ),
            group(
                "ezETH",
                &[Category::Restaking, Category::Points],
                "$1.1B",
                vec![market("PT-ezETH", Network::Blast, "$1.1B", "8%")],
            ),
        ]
    }

    fn assets(groups: &[AssetGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.asset.as_str()).collect()
    }

    #[test]
    fn test_groups_sorted_by_total_tvl_desc() {
        let data = dataset();
        let groups = filter_markets(&data, &MarketFilters::default(), &FavoriteSet::new());
        assert_eq!(assets(&groups), vec!["ezETH", "stETH", "sUSDe"]);
    }

    #[test]
    fn test_network_filter_drops_empty_groups() {
        let data = dataset();
        let filters = MarketFilters {
            networks: [Network::Ethereum].into_iter().collect(),
            ..MarketFilters::default()
        };
        let groups = filter_markets(&data, &filters, &FavoriteSet::new());
        assert_eq!(assets(&groups), vec!["stETH", "sUSDe"]);
        assert!(groups
            .iter()
            .all(|g| g.markets.iter().all(|m| m.network == Network::Ethereum)));
        // Source untouched.
        assert_eq!(data[0].markets.len(), 2);
    }

    #[test]
    fn test_category_filter() {
        let data = dataset();
        let filters = MarketFilters {
            category: CategoryFilter::Only(Category::Points),
            ..MarketFilters::default()
        };
        let groups = filter_markets(&data, &filters, &FavoriteSet::new());
        assert_eq!(assets(&groups), vec!["ezETH"]);
    }

    #[test]
    fn test_favorites_tab() {
        let data = dataset();
        let favorites: FavoriteSet = ["sUSDe-PT-sUSDe-Arbitrum"].into_iter().collect();
        let filters = MarketFilters {
            tab: MarketTab::Favorites,
            ..MarketFilters::default()
        };
        let groups = filter_markets(&data, &filters, &favorites);
        assert_eq!(assets(&groups), vec!["sUSDe"]);
        assert_eq!(groups[0].markets.len(), 1);
        assert_eq!(groups[0].markets[0].network, Network::Arbitrum);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let data = dataset();
        let filters = MarketFilters {
            networks: [Network::Ethereum, Network::Blast].into_iter().collect(),
            ..MarketFilters::default()
        };
        let once = filter_markets(&data, &filters, &FavoriteSet::new());
        let twice = filter_markets(&once, &filters, &FavoriteSet::new());
        assert_eq!(once, twice);
        assert_eq!(once, filter_markets(&data, &filters, &FavoriteSet::new()));
    }

    #[test]
    fn test_flatten_carries_key_and_derived_value() {
        let rows = flatten_markets(&dataset());
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].key, "sUSDe-PT-sUSDe-Ethereum");
        assert_eq!(rows[0].asset, "sUSDe");
        assert!((rows[0].yt_redeemable_value_usd - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_flatten_dedups_by_key() {
        let mut data = dataset();
        let duplicate = data[0].markets[0].clone();
        data[0].markets.push(duplicate);
        assert_eq!(flatten_markets(&data).len(), 5);
    }

    #[test]
    fn test_toggled_direction_reverses_order() {
        let mut asc = flatten_markets(&dataset());
        sort_rows(&mut asc, SortColumn::Tvl, SortDirection::Asc);
        let mut desc = asc.clone();
        sort_rows(&mut desc, SortColumn::Tvl, SortDirection::Desc);

        let asc_keys: Vec<_> = asc.iter().map(|r| r.key.clone()).collect();
        let mut desc_keys: Vec<_> = desc.iter().map(|r| r.key.clone()).collect();
        desc_keys.reverse();
        assert_eq!(asc_keys, desc_keys);
        assert_eq!(asc[0].market.tvl, "$350,000");
        assert_eq!(asc[4].market.tvl, "$1.1B");
    }

    #[test]
    fn test_sort_percent_column() {
        let mut rows = flatten_markets(&dataset());
        sort_rows(&mut rows, SortColumn::RealApy, SortDirection::Desc);
        let apys: Vec<_> = rows.iter().map(|r| r.market.real_apy.as_str()).collect();
        assert_eq!(apys, vec!["14%", "12%", "8%", "4.1%", "3.5%"]);
    }

    #[test]
    fn test_sort_ties_are_stable() {
        // Every row has the same 24h volume.
        let mut rows = flatten_markets(&dataset());
        let original: Vec<_> = rows.iter().map(|r| r.key.clone()).collect();
        sort_rows(&mut rows, SortColumn::Volume24h, SortDirection::Desc);
        let sorted: Vec<_> = rows.iter().map(|r| r.key.clone()).collect();
        assert_eq!(original, sorted);
    }

    #[test]
    fn test_sort_by_derived_yt_value() {
        let mut data = dataset();
        data[2].markets[0].total_redeemable_value = Some(1_000.0);
        data[1].markets[1].yt_total_supply = Some(0.0);
        let mut rows = flatten_markets(&data);
        sort_rows(&mut rows, SortColumn::YtRedeemableValue, SortDirection::Desc);
        assert_eq!(rows[0].key, "ezETH-PT-ezETH-Blast");
        assert_eq!(rows[4].key, "stETH-PT-stETH-Base");
        assert_eq!(rows[4].yt_redeemable_value_usd, 0.0);
    }

    #[test]
    fn test_yt_value_guards() {
        let mut m = market("YT", Network::Base, "$1", "1%");
        assert!((yt_redeemable_value_usd(&m) - 0.2).abs() < 1e-12);
        m.sy_token_price_usd = None;
        assert_eq!(yt_redeemable_value_usd(&m), 0.0);
        m.sy_token_price_usd = Some(f64::NAN);
        assert_eq!(yt_redeemable_value_usd(&m), 0.0);
        m.sy_token_price_usd = Some(2.0);
        m.yt_total_supply = Some(0.0);
        assert_eq!(yt_redeemable_value_usd(&m), 0.0);
    }

    #[test]
    fn test_header_click_semantics() {
        let data = dataset();
        let mut aggregator = MarketAggregator::new(&data);
        assert_eq!(aggregator.sort_column(), SortColumn::Tvl);
        aggregator.sort_by(SortColumn::Tvl);
        assert_eq!(aggregator.sort_direction(), SortDirection::Asc);
        aggregator.sort_by(SortColumn::RealApy);
        assert_eq!(aggregator.sort_column(), SortColumn::RealApy);
        assert_eq!(aggregator.sort_direction(), SortDirection::Desc);
    }

    #[test]
    fn test_explicit_sort_drives_rows() {
        let data = dataset();
        let mut aggregator = MarketAggregator::new(&data);
        aggregator.set_sort(SortColumn::RealApy, SortDirection::Asc);
        let rows = aggregator.rows(&FavoriteSet::new());
        assert_eq!(rows[0].market.real_apy, "3.5%");
        assert_eq!(rows[4].market.real_apy, "14%");
    }

    #[test]
    fn test_toggle_network_and_reset() {
        let data = dataset();
        let mut aggregator = MarketAggregator::new(&data);
        for network in Network::ALL {
            aggregator.toggle_network(network);
        }
        assert!(aggregator.grouped(&FavoriteSet::new()).is_empty());
        aggregator.toggle_network(Network::Blast);
        assert_eq!(aggregator.rows(&FavoriteSet::new()).len(), 1);
        aggregator.select_all_networks();
        assert_eq!(aggregator.rows(&FavoriteSet::new()).len(), 5);
    }
}
