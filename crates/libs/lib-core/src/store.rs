//! # Durable Key-Value Storage
//!
//! A small abstraction over browser `localStorage`: string keys, string
//! values, JSON on top. The web app implements [`KeyValueStore`] for
//! `window.localStorage`; native code and tests use [`MemoryStore`].
//!
//! ## Failure policy
//!
//! Reads never fail. A missing entry, an unreadable store or malformed JSON
//! all yield the caller's default (the last two are logged at `warn`).
//! Writes return [`CoreError::Storage`](crate::error::CoreError::Storage) so callers can decide whether a lost
//! write matters. There is no transaction or conflict handling: last writer
//! wins.

use serde::{de::DeserializeOwned, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::error::Result;

/// Name of the custom DOM event dispatched after every write, so that other
/// consumers mounted in the same page can re-read their entry.
pub const STORAGE_CHANGE_EVENT: &str = "local-storage";

/// The entries this application persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    WalletState,
    NetworkState,
    FavoritedMarkets,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [
        StorageKey::WalletState,
        StorageKey::NetworkState,
        StorageKey::FavoritedMarkets,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::WalletState => "walletState",
            StorageKey::NetworkState => "networkState",
            StorageKey::FavoritedMarkets => "favoritedMarkets",
        }
    }

    pub fn from_name(key: &str) -> Option<StorageKey> {
        StorageKey::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

/// String key-value store with the shape of the Web Storage API.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Read and deserialize `key`, falling back to `default`.
pub fn read_json<T, S>(store: &S, key: StorageKey, default: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get_item(key.as_str()) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(err) => {
            warn!(key = key.as_str(), error = %err, "[STORAGE] read failed, using default");
            return default;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(key = key.as_str(), error = %err, "[STORAGE] malformed entry, using default");
            default
        }
    }
}

/// Serialize `value` and store it under `key`.
pub fn write_json<T, S>(store: &S, key: StorageKey, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set_item(key.as_str(), &raw)?;
    debug!(key = key.as_str(), bytes = raw.len(), "[STORAGE] wrote entry");
    Ok(())
}

/// In-process store for native use and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
