//! Favorited markets, persisted under `favoritedMarkets` as a JSON array of
//! composite market keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::error::Result;
use crate::store::{read_json, write_json, KeyValueStore, StorageKey};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    keys: BTreeSet<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from storage; missing or malformed entries yield an empty set.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        read_json(store, StorageKey::FavoritedMarkets, Self::default())
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<()> {
        write_json(store, StorageKey::FavoritedMarkets, self)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Flip membership of `key`. Returns whether it is now a favorite.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.keys.remove(key) {
            false
        } else {
            self.keys.insert(key.to_string());
            true
        }
    }

    /// Toggle `key` and write the whole set back. Returns whether it is now
    /// a favorite.
    ///
    /// The in-memory set stays toggled when the write fails, and the next
    /// successful save carries it. Writes from other tabs reach this set
    /// through storage events before the user can toggle again.
    pub fn toggle_and_save<S: KeyValueStore + ?Sized>(&mut self, store: &S, key: &str) -> Result<bool> {
        let now_favorite = self.toggle(key);
        self.save(store)?;
        debug!(key, now_favorite, count = self.len(), "[FAVORITES] toggled");
        Ok(now_favorite)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<K: Into<String>> FromIterator<K> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::store::MemoryStore;
    use std::cell::Cell;

    /// Refuses writes while `full` is set.
    #[derive(Default)]
    struct QuotaStore {
        inner: MemoryStore,
        full: Cell<bool>,
    }

    impl KeyValueStore for QuotaStore {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            if self.full.get() {
                return Err(CoreError::Storage("quota exceeded".to_string()));
            }
            self.inner.set_item(key, value)
        }

        fn remove_item(&self, key: &str) -> Result<()> {
            self.inner.remove_item(key)
        }
    }

    #[test]
    fn test_toggle() {
        let mut favorites = FavoriteSet::new();
        assert!(favorites.toggle("stETH-PT-stETH-Ethereum"));
        assert!(favorites.contains("stETH-PT-stETH-Ethereum"));
        assert!(!favorites.toggle("stETH-PT-stETH-Ethereum"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_persists_as_json_array() {
        let store = MemoryStore::new();
        let mut favorites = FavoriteSet::new();
        favorites.toggle_and_save(&store, "b-key").unwrap();
        favorites.toggle_and_save(&store, "a-key").unwrap();
        assert_eq!(
            store.get_item("favoritedMarkets").unwrap().as_deref(),
            Some(r#"["a-key","b-key"]"#)
        );
    }

    #[test]
    fn test_load_tolerates_garbage() {
        let store = MemoryStore::new();
        store.set_item("favoritedMarkets", "[1, 2").unwrap();
        assert!(FavoriteSet::load(&store).is_empty());
    }

    #[test]
    fn test_failed_save_is_carried_by_next_save() {
        let store = QuotaStore::default();
        let mut favorites = FavoriteSet::new();

        store.full.set(true);
        assert!(favorites.toggle_and_save(&store, "a-key").is_err());
        assert!(favorites.contains("a-key"));
        assert!(FavoriteSet::load(&store).is_empty());

        store.full.set(false);
        favorites.toggle_and_save(&store, "b-key").unwrap();
        let reloaded = FavoriteSet::load(&store);
        assert!(reloaded.contains("a-key"));
        assert!(reloaded.contains("b-key"));
    }
}
