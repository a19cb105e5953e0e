//! Wallet Page - mocked session status, network choice and link-outs

use leptos::prelude::*;
use shared::links::{explorer_address_url, share_url, ShareTarget};
use shared::{truncate_address, Network};

use crate::state::network::use_network_context;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::SHARE_TEXT;

#[component]
pub fn WalletPage() -> impl IntoView {
    let wallet = use_wallet_context();

    view! {
        <div class="page wallet-page">
            <div class="card wallet-card">
                <h1 class="card-title">"Wallet"</h1>

                {move || match wallet.address() {
                    Some(address) => view! { <ConnectedWallet address=address/> }.into_any(),
                    None => view! { <DisconnectedWallet/> }.into_any(),
                }}

                <NetworkList/>
                <SharePanel/>
            </div>
        </div>
    }
}

#[component]
fn ConnectedWallet(address: String) -> impl IntoView {
    let wallet = use_wallet_context();
    let network = use_network_context();

    let short = truncate_address(&address);
    let explorer = {
        let address = address.clone();
        move || explorer_address_url(network.current(), &address)
    };

    view! {
        <div class="wallet-status">
            <p class="label">"Status"</p>
            <p class="status connected">"Connected"</p>

            <p class="label">"Wallet Address"</p>
            <p class="address" title=address.clone()>{short}</p>
            <p class="address-full">{address}</p>

            <a class="btn-link" href=explorer target="_blank" rel="noopener noreferrer">
                {move || format!("View on {} explorer", network.current())}
            </a>
        </div>

        <button class="btn btn-danger" on:click=move |_| wallet.disconnect()>
            "Disconnect Wallet"
        </button>
    }
}

#[component]
fn DisconnectedWallet() -> impl IntoView {
    let wallet = use_wallet_context();

    view! {
        <div class="wallet-status">
            <p class="status">"No wallet connected"</p>
            {move || wallet.error.get().map(|message| view! { <p class="error">{message}</p> })}
        </div>

        <button
            class="btn"
            disabled=move || wallet.connecting.get()
            on:click=move |_| wallet.connect()
        >
            {move || if wallet.connecting.get() { "Connecting..." } else { "Connect Wallet" }}
        </button>
    }
}

#[component]
fn NetworkList() -> impl IntoView {
    let network = use_network_context();

    view! {
        <div class="network-list">
            <p class="label">"Network"</p>
            {Network::ALL
                .into_iter()
                .map(|n| {
                    view! {
                        <button
                            class="network-option"
                            class:active=move || network.current() == n
                            class:pending=move || network.switching.get() == Some(n)
                            disabled=move || network.switching.get().is_some()
                            on:click=move |_| network.switch_to(n)
                        >
                            <span>{n.name()}</span>
                            <span class="chain-id">{format!("Chain ID {}", n.chain_id())}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SharePanel() -> impl IntoView {
    let page_url = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();

    view! {
        <div class="share-panel">
            <p class="label">"Share"</p>
            {ShareTarget::ALL
                .into_iter()
                .map(|target| {
                    view! {
                        <a
                            class="share-link"
                            href=share_url(target, SHARE_TEXT, &page_url)
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {target.label()}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
