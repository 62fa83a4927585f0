//! Procedural confetti bursts.
//!
//! A burst is only a description: spawn point, per-piece animation parameters
//! and a removal deadline. Motion itself is left to the stylesheet.

use super::constants::*;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal drift, `[-1, 1]`.
    pub dx: f32,
    /// Vertical drift, `[-1.5, -0.5]` (upward).
    pub dy: f32,
    /// Rotation in degrees, `[-360, 360]`.
    pub rot: f32,
    /// Declared animation lifetime in seconds, `[0.7, 1.4]`.
    pub life: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            dx: rng.gen_range(CONFETTI_DX_RANGE.0..=CONFETTI_DX_RANGE.1),
            dy: rng.gen_range(CONFETTI_DY_RANGE.0..=CONFETTI_DY_RANGE.1),
            rot: rng.gen_range(CONFETTI_ROT_RANGE_DEG.0..=CONFETTI_ROT_RANGE_DEG.1),
            life: rng.gen_range(CONFETTI_LIFE_RANGE_SEC.0..=CONFETTI_LIFE_RANGE_SEC.1),
        }
    }

    /// CSS custom properties as `(name, value)` pairs, formatted the way the
    /// stylesheet expects them.
    pub fn style_vars(&self) -> [(&'static str, String); 4] {
        [
            ("--dx", format!("{:.3}", self.dx)),
            ("--dy", format!("{:.3}", self.dy)),
            ("--rot", format!("{:.1}", self.rot)),
            ("--life", format!("{:.2}", self.life)),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct ConfettiBurst {
    /// Spawn point relative to the effects layer, in CSS pixels.
    pub origin: Vec2,
    pub particles: Vec<Particle>,
    /// Every piece is removed this long after spawn, whatever its `life`.
    pub remove_after_ms: i32,
}

impl ConfettiBurst {
    pub fn spawn<R: Rng + ?Sized>(origin: Vec2, rng: &mut R) -> Self {
        let count = rng.gen_range(CONFETTI_MIN_PIECES..=CONFETTI_MAX_PIECES);
        let particles = (0..count).map(|_| Particle::random(rng)).collect();
        Self {
            origin,
            particles,
            remove_after_ms: CONFETTI_REMOVE_AFTER_MS,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
