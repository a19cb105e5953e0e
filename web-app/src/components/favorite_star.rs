use leptos::prelude::*;

use crate::state::favorites::use_favorites_context;

/// Star toggling one market in the favorites set.
#[component]
pub fn FavoriteStar(market_key: String) -> impl IntoView {
    let favorites = use_favorites_context();
    let is_favorite = {
        let key = market_key.clone();
        move || favorites.is_favorite(&key)
    };
    let is_favorite_label = is_favorite.clone();
    let is_favorite_class = is_favorite.clone();

    view! {
        <button
            class="favorite-star"
            class:active=is_favorite_class
            title=move || if is_favorite_label() { "Remove from favorites" } else { "Add to favorites" }
            on:click=move |ev| {
                ev.stop_propagation();
                favorites.toggle(&market_key);
            }
        >
            {move || if is_favorite() { "★" } else { "☆" }}
        </button>
    }
}
