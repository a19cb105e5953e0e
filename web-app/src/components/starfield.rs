//! Starfield Background Component
//!
//! Renders the shared particle field and drives its animation.

use leptos::prelude::*;
use std::time::Duration;

use crate::state::background::use_background_context;
use crate::utils::constants::FRAME_INTERVAL_MS;

#[component]
pub fn Starfield() -> impl IntoView {
    let background = use_background_context();

    let frame = Duration::from_millis(FRAME_INTERVAL_MS);
    match set_interval_with_handle(move || background.step(frame.as_secs_f64()), frame) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => log::warn!("[BACKGROUND] animation disabled: {:?}", err),
    }

    let stars = (0..background.particle_count())
        .map(|index| {
            view! {
                <div
                    class="stars"
                    class:bright=background.is_bright(index)
                    style=move || background.particle_style(index)
                ></div>
            }
        })
        .collect_view();

    view! {
        <div class="starfield" class:hidden=move || !background.visible.get()>
            {stars}
        </div>
    }
}
