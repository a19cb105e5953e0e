//! XForce Yield Web App - root component
//!
//! Provides every application context once, then routes between pages
//! inside a single error boundary.

use leptos::error::Errors;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{Navbar, Starfield};
use crate::pages::{ComingSoonPage, MarketsPage, SwapPage, WalletPage};
use crate::state::background::provide_background_context;
use crate::state::favorites::provide_favorites_context;
use crate::state::network::provide_network_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    provide_wallet_context();
    provide_network_context();
    provide_favorites_context();
    provide_background_context();

    view! {
        <Router>
            <div class="app-container">
                <Starfield/>
                <Navbar/>
                <main>
                    <ErrorBoundary fallback=|errors| view! { <ErrorPanel errors=errors/> }>
                        <Routes fallback=|| view! { <NotFound/> }>
                            <Route path=path!("/") view=MarketsPage/>
                            <Route path=path!("/markets") view=MarketsPage/>
                            <Route path=path!("/swap") view=SwapPage/>
                            <Route path=path!("/wallet") view=WalletPage/>
                            <Route path=path!("/staking") view=|| view! { <ComingSoonPage title="Staking"/> }/>
                            <Route path=path!("/referral") view=|| view! { <ComingSoonPage title="Referral"/> }/>
                            <Route path=path!("/memeverse") view=|| view! { <ComingSoonPage title="Memeverse"/> }/>
                        </Routes>
                    </ErrorBoundary>
                </main>
            </div>
        </Router>
    }
}

/// Error boundary fallback. "Try again" clears the errors and re-renders
/// the page.
#[component]
fn ErrorPanel(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let messages = errors.clone();
    let list = move || {
        messages
            .get()
            .into_iter()
            .map(|(_, err)| {
                log::error!("[APP] {}", err);
                view! { <li>{err.to_string()}</li> }
            })
            .collect_view()
    };

    view! {
        <div class="card error-card">
            <h1 class="card-title">"Something went wrong"</h1>
            <ul>{list}</ul>
            <button class="btn" on:click=move |_| errors.set(Default::default())>
                "Try again"
            </button>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="card placeholder-card">
                <h1 class="card-title">"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Go to Markets"</span>
                </A>
            </div>
        </div>
    }
}
