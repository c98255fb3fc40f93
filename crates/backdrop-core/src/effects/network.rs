//! Drifting particles linked by proximity lines and drawn toward the pointer.

use super::particle::{Particle, Spawn};
use crate::color::Rgba;
use crate::constants::*;
use crate::effect::{Effect, EffectKind, FrameInput};
use crate::geom::{reflect_axis, Bounds};
use crate::surface::Surface;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct NetworkParams {
    pub count: usize,
    pub link_distance: f32,
    pub attract_radius: f32,
    pub attract_strength: f32,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            count: NETWORK_PARTICLE_COUNT,
            link_distance: NETWORK_LINK_DISTANCE,
            attract_radius: NETWORK_ATTRACT_RADIUS,
            attract_strength: NETWORK_ATTRACT_STRENGTH,
        }
    }
}

pub struct ParticleNetwork {
    params: NetworkParams,
    particles: Vec<Particle>,
    bounds: Bounds,
    rng: StdRng,
    seeded: bool,
}

impl ParticleNetwork {
    pub fn new(seed: u64) -> Self {
        Self::with_params(NetworkParams::default(), seed)
    }

    pub fn with_params(params: NetworkParams, seed: u64) -> Self {
        Self {
            params,
            particles: Vec::new(),
            bounds: Bounds::default(),
            rng: StdRng::seed_from_u64(seed),
            seeded: false,
        }
    }

    pub fn from_particles(particles: Vec<Particle>, params: NetworkParams) -> Self {
        Self {
            params,
            particles,
            bounds: Bounds::default(),
            rng: StdRng::seed_from_u64(0),
            seeded: true,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn params(&self) -> &NetworkParams {
        &self.params
    }

    /// Opacity of the link between two particles `d` apart, if they are linked.
    #[inline]
    pub fn link_opacity(&self, d: f32) -> Option<f32> {
        let max = self.params.link_distance;
        (d < max).then(|| (1.0 - d / max) * NETWORK_LINK_MAX_OPACITY)
    }

    /// Every linked unordered pair with its opacity, rebuilt on each call.
    pub fn links(&self) -> Vec<(usize, usize, f32)> {
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                if let Some(opacity) = self.link_opacity(a.pos.distance(b.pos)) {
                    out.push((i, j, opacity));
                }
            }
        }
        out
    }
}

impl Effect for ParticleNetwork {
    fn kind(&self) -> EffectKind {
        EffectKind::ParticleNetwork
    }

    fn init(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        if self.seeded {
            return;
        }
        let spawn = Spawn {
            speed_max: NETWORK_SPEED_MAX,
            radius_min: NETWORK_RADIUS_MIN,
            radius_span: NETWORK_RADIUS_SPAN,
            opacity_min: PARTICLE_OPACITY_MIN,
            opacity_span: PARTICLE_OPACITY_SPAN,
        };
        let color = Rgba::from_rgb(BLUE, 1.0);
        self.particles = (0..self.params.count)
            .map(|_| Particle::scatter(&mut self.rng, bounds, &spawn, color))
            .collect();
        self.seeded = true;
    }

    fn step(&mut self, input: &FrameInput) {
        let (w, h) = (self.bounds.width(), self.bounds.height());
        let radius = self.params.attract_radius;
        let strength = self.params.attract_strength;
        for p in &mut self.particles {
            p.pos += p.vel;
            // Plain reflection: no energy lost on the walls.
            reflect_axis(&mut p.pos.x, &mut p.vel.x, 0.0, w, 1.0);
            reflect_axis(&mut p.pos.y, &mut p.vel.y, 0.0, h, 1.0);

            if let Some((toward, d)) = input.cursor.within(p.pos, radius) {
                if d > f32::EPSILON {
                    let falloff = (radius - d) / radius;
                    p.vel += toward / d * falloff * strength;
                }
            }
        }
    }

    fn render(&self, surface: &mut dyn Surface, input: &FrameInput) {
        let (dot_alpha, line_alpha) = if input.dark {
            (NETWORK_DOT_ALPHA_DARK, NETWORK_LINE_ALPHA_DARK)
        } else {
            (NETWORK_DOT_ALPHA_LIGHT, NETWORK_LINE_ALPHA_LIGHT)
        };
        let line = Rgba::from_rgb(BLUE, line_alpha);
        for (i, j, opacity) in self.links() {
            let (a, b) = (&self.particles[i], &self.particles[j]);
            surface.stroke_line(a.pos, b.pos, line, NETWORK_LINK_WIDTH, opacity);
        }
        for p in &self.particles {
            let color = p.color.with_alpha(dot_alpha * p.opacity);
            surface.fill_circle(p.pos, p.radius, color, None);
        }
    }

    fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn dispose(&mut self) {
        self.particles.clear();
    }
}
