//! Navigation Bar Component - Space Theme

use leptos::prelude::*;
use leptos_router::components::A;
use shared::{truncate_address, Network};

use crate::state::background::use_background_context;
use crate::state::network::use_network_context;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">
                        <span class="xf-red">"XF"</span><span class="xf-white">"Yield"</span>
                    </span>
                </A>
                <div class="nav-links">
                    <A href="/markets">"Markets"</A>
                    <A href="/swap">"Swap"</A>
                    <A href="/wallet">"Wallet"</A>
                    <A href="/staking" attr:class="nav-muted">"Staking"</A>
                    <A href="/referral" attr:class="nav-muted">"Referral"</A>
                    <A href="/memeverse" attr:class="nav-muted">"Memeverse"</A>
                </div>
                <div class="nav-actions">
                    <BackgroundToggle/>
                    <NetworkSelect/>
                    <WalletButton/>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NetworkSelect() -> impl IntoView {
    let network = use_network_context();

    let on_change = move |ev: web_sys::Event| {
        if let Some(target) = Network::from_name(&event_target_value(&ev)) {
            network.switch_to(target);
        }
    };

    view! {
        <select
            class="network-select"
            disabled=move || network.switching.get().is_some()
            on:change=on_change
        >
            {Network::ALL
                .into_iter()
                .map(|n| {
                    view! {
                        <option value=n.name() prop:selected=move || network.current() == n>
                            {n.name()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
        <Show when=move || network.switching.get().is_some()>
            <span class="nav-hint">
                {move || {
                    network
                        .switching
                        .get()
                        .map(|n| format!("Switching to {}...", n))
                        .unwrap_or_default()
                }}
            </span>
        </Show>
    }
}

#[component]
fn WalletButton() -> impl IntoView {
    let wallet = use_wallet_context();

    let label = move || {
        if wallet.connecting.get() {
            "Connecting...".to_string()
        } else {
            wallet
                .address()
                .map(|a| truncate_address(&a))
                .unwrap_or_else(|| "Connect Wallet".to_string())
        }
    };

    let on_click = move |_| {
        if !wallet.is_connected() {
            wallet.connect();
        }
    };

    view! {
        <button
            class="btn wallet-button"
            class:connected=move || wallet.is_connected()
            disabled=move || wallet.connecting.get()
            on:click=on_click
        >
            {label}
        </button>
    }
}

#[component]
fn BackgroundToggle() -> impl IntoView {
    let background = use_background_context();

    view! {
        <button
            class="btn-icon"
            title="Toggle background"
            on:click=move |_| background.toggle_visible()
        >
            {move || if background.visible.get() { "✦" } else { "✧" }}
        </button>
    }
}
