//! Token picker and badge for the swap form

use leptos::prelude::*;
use shared::Token;

/// Token icon, falling back to the token's glyph when the image is missing.
#[component]
pub fn TokenBadge(token: Token) -> impl IntoView {
    let failed = RwSignal::new(false);
    let src = format!("/assets/tokens/{}.svg", token.symbol.to_lowercase());
    let glyph = token.icon.glyph();
    let alt = token.symbol.clone();

    view! {
        <span class="token-badge">
            <Show
                when=move || !failed.get()
                fallback=move || view! { <span class="token-glyph">{glyph}</span> }
            >
                <img src=src.clone() alt=alt.clone() on:error=move |_| failed.set(true)/>
            </Show>
        </span>
    }
}

/// `<select>` over `tokens`, reporting the picked token.
#[component]
pub fn TokenSelect(
    tokens: &'static [Token],
    #[prop(into)] selected: Signal<String>,
    on_select: Callback<Token>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let symbol = event_target_value(&ev);
        match tokens.iter().find(|t| t.symbol == symbol) {
            Some(token) => on_select.run(token.clone()),
            None => log::warn!("[SWAP] unknown token {}", symbol),
        }
    };

    view! {
        <select class="token-select" on:change=on_change>
            {tokens
                .iter()
                .map(|token| {
                    let symbol = token.symbol.clone();
                    let is_selected = {
                        let symbol = symbol.clone();
                        move || selected.with(|s| s == &symbol)
                    };
                    view! {
                        <option value=symbol.clone() prop:selected=is_selected>
                            {format!("{} - {}", token.symbol, token.name)}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
