//! Placeholder for screens that only exist as navigation entries

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ComingSoonPage(title: &'static str) -> impl IntoView {
    view! {
        <div class="page">
            <div class="card placeholder-card">
                <h1 class="card-title">{title}</h1>
                <p>"This screen is not available yet."</p>
                <A href="/markets">
                    <span class="btn">"Browse Markets"</span>
                </A>
            </div>
        </div>
    }
}
