//! Animation state of the twinkling background.
//!
//! A [`ParticleField`] is owned by whichever component hosts the background
//! and handed to renderers by reference, so navigating between pages keeps
//! the same field instead of re-seeding it.

use rand::{rngs::SmallRng, Rng, SeedableRng};

pub const DEFAULT_PARTICLE_COUNT: usize = 150;

const MIN_OPACITY: f64 = 0.2;
const MAX_OPACITY: f64 = 1.0;

/// One particle. Positions are fractions of the viewport in `[0, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Diameter in CSS pixels.
    pub size: f64,
    pub opacity: f64,
    /// Roughly one in five particles is drawn larger and tinted.
    pub bright: bool,
    phase: f64,
    twinkle_speed: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Seeded so that a field can be reproduced in tests.
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| {
                let bright = rng.random::<f64>() > 0.8;
                let size = if bright {
                    rng.random_range(2.0..5.0)
                } else {
                    rng.random_range(1.0..3.0)
                };
                let phase = rng.random_range(0.0..std::f64::consts::TAU);
                Particle {
                    x: rng.random::<f64>(),
                    y: rng.random::<f64>(),
                    vx: rng.random_range(-0.004..0.004),
                    vy: rng.random_range(0.001..0.006),
                    size,
                    opacity: twinkle(phase),
                    bright,
                    phase,
                    twinkle_speed: rng.random_range(0.5..2.0),
                }
            })
            .collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance by `dt` seconds: drift with wrap-around and twinkle.
    pub fn step(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        for p in &mut self.particles {
            p.x = wrap_unit(p.x + p.vx * dt);
            p.y = wrap_unit(p.y + p.vy * dt);
            p.phase = (p.phase + p.twinkle_speed * dt) % std::f64::consts::TAU;
            p.opacity = twinkle(p.phase);
        }
    }
}

fn twinkle(phase: f64) -> f64 {
    let mid = (MIN_OPACITY + MAX_OPACITY) / 2.0;
    let amplitude = (MAX_OPACITY - MIN_OPACITY) / 2.0;
    (mid + amplitude * phase.sin()).clamp(MIN_OPACITY, MAX_OPACITY)
}

fn wrap_unit(v: f64) -> f64 {
    let wrapped = v.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_bounds(field: &ParticleField) -> bool {
        field.particles().iter().all(|p| {
            (0.0..1.0).contains(&p.x)
                && (0.0..1.0).contains(&p.y)
                && (MIN_OPACITY..=MAX_OPACITY).contains(&p.opacity)
        })
    }

    #[test]
    fn test_new_field() {
        let field = ParticleField::new(DEFAULT_PARTICLE_COUNT, 42);
        assert_eq!(field.len(), DEFAULT_PARTICLE_COUNT);
        assert!(in_bounds(&field));
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = ParticleField::new(10, 9);
        let b = ParticleField::new(10, 9);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_step_stays_in_bounds() {
        let mut field = ParticleField::new(50, 3);
        for _ in 0..2_000 {
            field.step(1.0 / 60.0);
        }
        field.step(500.0);
        assert!(in_bounds(&field));
    }

    #[test]
    fn test_invalid_dt_is_ignored() {
        let mut field = ParticleField::new(5, 1);
        let before = field.particles().to_vec();
        field.step(-1.0);
        field.step(f64::NAN);
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn test_wrap_unit() {
        assert_eq!(wrap_unit(1.25), 0.25);
        assert_eq!(wrap_unit(-0.25), 0.75);
        assert_eq!(wrap_unit(-1e-20), 0.0);
    }
}
