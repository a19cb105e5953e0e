//! # Favorites Flow
//!
//! A favorite toggled on the list view must survive a reload and drive the
//! Favorites tab of both market views.

use lib_core::data::asset_groups;
use lib_core::market::{MarketAggregator, MarketTab};
use lib_core::store::MemoryStore;
use lib_core::FavoriteSet;

#[test]
fn test_favorite_survives_reload_and_filters_tab() {
    // Arrange
    let store = MemoryStore::new();
    let groups = asset_groups().unwrap();
    let all_rows = MarketAggregator::new(groups).rows(&FavoriteSet::new());
    let picked = all_rows[all_rows.len() / 2].key.clone();

    // Act
    FavoriteSet::new().toggle_and_save(&store, &picked).unwrap();
    let reloaded = FavoriteSet::load(&store);
    let mut aggregator = MarketAggregator::new(groups);
    aggregator.set_tab(MarketTab::Favorites);

    // Assert
    let rows = aggregator.rows(&reloaded);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].key, picked);

    let grouped = aggregator.grouped(&reloaded);
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].markets.len(), 1);
}

#[test]
fn test_unfavorite_empties_tab() {
    let store = MemoryStore::new();
    let groups = asset_groups().unwrap();
    let key = MarketAggregator::new(groups).rows(&FavoriteSet::new())[0].key.clone();

    let mut favorites = FavoriteSet::load(&store);
    favorites.toggle_and_save(&store, &key).unwrap();
    favorites.toggle_and_save(&store, &key).unwrap();

    let mut aggregator = MarketAggregator::new(groups);
    aggregator.set_tab(MarketTab::Favorites);
    assert!(aggregator.rows(&FavoriteSet::load(&store)).is_empty());
    assert!(aggregator.grouped(&FavoriteSet::load(&store)).is_empty());
}
