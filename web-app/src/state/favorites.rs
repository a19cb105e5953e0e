//! Favorited markets

use leptos::prelude::*;
use lib_core::store::StorageKey;
use lib_core::FavoriteSet;

use crate::services::storage::{watch_key, LocalStorage};

#[derive(Clone, Copy)]
pub struct FavoritesContext {
    pub favorites: RwSignal<FavoriteSet>,
}

impl FavoritesContext {
    pub fn new() -> Self {
        Self {
            favorites: RwSignal::new(FavoriteSet::load(&LocalStorage)),
        }
    }

    pub fn is_favorite(&self, key: &str) -> bool {
        self.favorites.with(|f| f.contains(key))
    }

    pub fn toggle(&self, key: &str) {
        // Saving dispatches the change event, which re-reads this signal;
        // toggle a copy so no borrow is held across the write.
        let mut favorites = self.favorites.get_untracked();
        if let Err(err) = favorites.toggle_and_save(&LocalStorage, key) {
            // Written out with the next successful toggle
            log::warn!("[FAVORITES] not persisted: {}", err);
        }
        self.favorites.set(favorites);
    }

    fn reload(&self) {
        let stored = FavoriteSet::load(&LocalStorage);
        if self.favorites.with_untracked(|current| current != &stored) {
            self.favorites.set(stored);
        }
    }
}

impl Default for FavoritesContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_favorites_context() -> FavoritesContext {
    let context = FavoritesContext::new();
    watch_key(StorageKey::FavoritedMarkets, move || context.reload());
    provide_context(context);
    context
}

pub fn use_favorites_context() -> FavoritesContext {
    expect_context::<FavoritesContext>()
}
