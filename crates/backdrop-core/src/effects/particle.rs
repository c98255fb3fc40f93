use crate::color::Rgba;
use crate::geom::Bounds;
use glam::Vec2;
use rand::prelude::*;

/// Point mass used by the gravity field and the particle network.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
    pub opacity: f32,
    pub color: Rgba,
}

impl Particle {
    /// Mass follows the radius; radius is forced positive and opacity into [0, 1].
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, opacity: f32, color: Rgba) -> Self {
        let radius = radius.max(f32::EPSILON);
        Self {
            pos,
            vel,
            radius,
            mass: radius,
            opacity: opacity.clamp(0.0, 1.0),
            color,
        }
    }

    /// Uniformly placed particle with a random velocity in `±spawn.speed_max`.
    pub(crate) fn scatter(rng: &mut StdRng, bounds: Bounds, spawn: &Spawn, color: Rgba) -> Self {
        let pos = Vec2::new(
            rng.gen::<f32>() * bounds.width(),
            rng.gen::<f32>() * bounds.height(),
        );
        let vel = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * spawn.speed_max,
            (rng.gen::<f32>() - 0.5) * 2.0 * spawn.speed_max,
        );
        let radius = spawn.radius_min + rng.gen::<f32>() * spawn.radius_span;
        let opacity = spawn.opacity_min + rng.gen::<f32>() * spawn.opacity_span;
        Self::new(pos, vel, radius, opacity, color)
    }

    /// F = m a, applied as an instantaneous velocity change.
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.vel += force / self.mass;
    }
}

/// Ranges particles are seeded from.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Spawn {
    pub speed_max: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    pub opacity_min: f32,
    pub opacity_span: f32,
}
