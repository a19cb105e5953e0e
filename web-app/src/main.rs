//! XForce Yield Web App - Leptos Frontend
//!
//! Yield markets, a token swap form and a mocked wallet session, all running
//! client-side on top of `lib-core`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("XForce Yield starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen shipped in `index.html`.
fn hide_loading_screen() {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("leptos-loading"))
    else {
        log::debug!("loading screen not present");
        return;
    };

    if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
        if let Err(err) = html_element.class_list().add_1("hidden") {
            log::warn!("could not hide loading screen: {:?}", err);
        }
    }
}
