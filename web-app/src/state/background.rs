//! Background particle field
//!
//! The field is owned here, by the root context, so it keeps animating
//! across page navigations. Pages may hide it through `visible` without
//! resetting its state.

use leptos::prelude::*;
use lib_core::particles::{Particle, ParticleField, DEFAULT_PARTICLE_COUNT};

use crate::services::wallet::random_seed;

#[derive(Clone, Copy)]
pub struct BackgroundContext {
    field: StoredValue<ParticleField>,
    /// Bumped after every step so particle styles re-render
    tick: RwSignal<u64>,
    pub visible: RwSignal<bool>,
}

impl BackgroundContext {
    pub fn new(field: ParticleField) -> Self {
        Self {
            field: StoredValue::new(field),
            tick: RwSignal::new(0),
            visible: RwSignal::new(true),
        }
    }

    pub fn particle_count(&self) -> usize {
        self.field.with_value(|f| f.len())
    }

    pub fn is_bright(&self, index: usize) -> bool {
        self.field
            .with_value(|f| f.particles().get(index).is_some_and(|p| p.bright))
    }

    /// Advance the animation. Paused while hidden.
    pub fn step(&self, dt: f64) {
        if !self.visible.get_untracked() {
            return;
        }
        self.field.update_value(|f| f.step(dt));
        self.tick.update(|t| *t = t.wrapping_add(1));
    }

    pub fn toggle_visible(&self) {
        self.visible.update(|v| *v = !*v);
    }

    /// Inline style of particle `index`, tracking animation frames.
    pub fn particle_style(&self, index: usize) -> String {
        self.tick.track();
        self.field
            .with_value(|f| f.particles().get(index).map(particle_style).unwrap_or_default())
    }
}

pub fn particle_style(p: &Particle) -> String {
    format!(
        "left: {:.3}%; top: {:.3}%; width: {:.1}px; height: {:.1}px; opacity: {:.3};",
        p.x * 100.0,
        p.y * 100.0,
        p.size,
        p.size,
        p.opacity
    )
}

pub fn provide_background_context() -> BackgroundContext {
    let context = BackgroundContext::new(ParticleField::new(DEFAULT_PARTICLE_COUNT, random_seed()));
    provide_context(context);
    context
}

pub fn use_background_context() -> BackgroundContext {
    expect_context::<BackgroundContext>()
}
