//! Swap Page - token swap form over the mocked price table

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_core::data::swap_tokens;
use lib_core::SwapCalculator;
use shared::Token;

use crate::components::{TokenBadge, TokenSelect};
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{DEFAULT_SLIPPAGE_PERCENT, SLIPPAGE_OPTIONS, SWAP_DELAY_MS};

#[derive(Debug, Clone, PartialEq)]
enum SwapStatus {
    Idle,
    Pending,
    Done(String),
}

#[component]
pub fn SwapPage() -> impl IntoView {
    swap_tokens()
        .and_then(|tokens| SwapCalculator::with_defaults(tokens).map(|calculator| (tokens, calculator)))
        .map(|(tokens, calculator)| view! { <SwapForm tokens=tokens calculator=calculator/> })
}

#[component]
fn SwapForm(tokens: &'static [Token], calculator: SwapCalculator) -> impl IntoView {
    let wallet = use_wallet_context();
    let swap = RwSignal::new(calculator);
    let slippage = RwSignal::new(DEFAULT_SLIPPAGE_PERCENT);
    let status = RwSignal::new(SwapStatus::Idle);

    let from_symbol = Signal::derive(move || swap.with(|s| s.from_token().symbol.clone()));
    let to_symbol = Signal::derive(move || swap.with(|s| s.to_token().symbol.clone()));

    // Picking the token on the other side flips the pair instead of
    // producing a same-token swap.
    let on_from_select = Callback::new(move |token: Token| {
        swap.update(|s| {
            if token.symbol == s.to_token().symbol {
                s.handle_swap_tokens();
            } else {
                s.set_from_token(token);
                s.recalculate();
            }
        });
        status.set(SwapStatus::Idle);
    });
    let on_to_select = Callback::new(move |token: Token| {
        swap.update(|s| {
            if token.symbol == s.from_token().symbol {
                s.handle_swap_tokens();
            } else {
                s.set_to_token(token);
                s.recalculate();
            }
        });
        status.set(SwapStatus::Idle);
    });

    let can_swap = move || {
        swap.with(|s| s.to_amount().parse::<f64>().is_ok_and(|v| v > 0.0))
            && status.get() != SwapStatus::Pending
    };

    let on_submit = move |_| {
        if !wallet.is_connected() {
            wallet.connect();
            return;
        }
        if !can_swap() {
            return;
        }
        let summary = swap.with_untracked(|s| {
            format!(
                "Swapped {} {} for {} {}",
                s.from_amount(),
                s.from_token().symbol,
                s.to_amount(),
                s.to_token().symbol
            )
        });
        status.set(SwapStatus::Pending);
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(SWAP_DELAY_MS).await;
            log::info!("[SWAP] {}", summary);
            status.set(SwapStatus::Done(summary));
        });
    };

    let submit_label = move || {
        if !wallet.is_connected() {
            "Connect Wallet"
        } else if status.get() == SwapStatus::Pending {
            "Swapping..."
        } else if swap.with(|s| s.from_amount().is_empty()) {
            "Enter an amount"
        } else {
            "Swap"
        }
    };

    view! {
        <div class="page swap-page">
            <div class="card swap-card">
                <h1 class="card-title">"Swap"</h1>

                <div class="swap-field">
                    <div class="swap-field-header">
                        <span>"From"</span>
                        <span class="balance">
                            {move || swap.with(|s| format!("Balance: {}", s.from_token().balance))}
                            <button class="btn-link" on:click=move |_| swap.update(|s| s.handle_max_click())>
                                "MAX"
                            </button>
                        </span>
                    </div>
                    <div class="swap-field-body">
                        {move || view! { <TokenBadge token=swap.with(|s| s.from_token().clone())/> }}
                        <TokenSelect tokens=tokens selected=from_symbol on_select=on_from_select/>
                        <input
                            type="text"
                            inputmode="decimal"
                            placeholder="0.0"
                            prop:value=move || swap.with(|s| s.from_amount().to_string())
                            on:input=move |ev| {
                                swap.update(|s| s.handle_from_amount_change(&event_target_value(&ev)));
                                status.set(SwapStatus::Idle);
                            }
                        />
                    </div>
                </div>

                <button
                    class="swap-direction"
                    title="Switch tokens"
                    on:click=move |_| swap.update(|s| s.handle_swap_tokens())
                >
                    "⇅"
                </button>

                <div class="swap-field">
                    <div class="swap-field-header">
                        <span>"To"</span>
                        <span class="balance">
                            {move || swap.with(|s| format!("Balance: {}", s.to_token().balance))}
                        </span>
                    </div>
                    <div class="swap-field-body">
                        {move || view! { <TokenBadge token=swap.with(|s| s.to_token().clone())/> }}
                        <TokenSelect tokens=tokens selected=to_symbol on_select=on_to_select/>
                        <input
                            type="text"
                            inputmode="decimal"
                            placeholder="0.0"
                            prop:value=move || swap.with(|s| s.to_amount().to_string())
                            on:input=move |ev| {
                                swap.update(|s| s.handle_to_amount_change(&event_target_value(&ev)));
                                status.set(SwapStatus::Idle);
                            }
                        />
                    </div>
                </div>

                <div class="swap-details">
                    <div class="detail-row">
                        <span>"Rate"</span>
                        <button class="btn-link" on:click=move |_| swap.update(|s| s.toggle_rate_direction())>
                            {move || swap.with(|s| s.rate_label())}
                        </button>
                    </div>
                    <div class="detail-row">
                        <span>"Slippage"</span>
                        <div class="segmented">
                            {SLIPPAGE_OPTIONS
                                .iter()
                                .map(|&option| {
                                    view! {
                                        <button
                                            class:active=move || slippage.get() == option
                                            on:click=move |_| slippage.set(option)
                                        >
                                            {format!("{}%", option)}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="detail-row">
                        <span>"Minimum received"</span>
                        <span>
                            {move || {
                                swap.with(|s| format!("{} {}", s.min_received(slippage.get()), s.to_token().symbol))
                            }}
                        </span>
                    </div>
                </div>

                <button
                    class="btn swap-submit"
                    disabled=move || wallet.is_connected() && !can_swap()
                    on:click=on_submit
                >
                    {submit_label}
                </button>

                {move || match status.get() {
                    SwapStatus::Done(summary) => {
                        view! { <p class="swap-result">{summary}</p> }.into_any()
                    }
                    _ => ().into_any(),
                }}
            </div>
        </div>
    }
}
