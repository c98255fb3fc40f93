//! Falling, bouncing particles that scatter away from the pointer.

use super::particle::{Particle, Spawn};
use crate::color::Rgba;
use crate::constants::*;
use crate::effect::{Effect, EffectKind, FrameInput};
use crate::geom::{reflect_axis, Bounds};
use crate::input::CursorState;
use crate::surface::{Glow, Surface};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct GravityParams {
    pub count: usize,
    pub gravity: f32,
    pub bounce_damping: f32,
    pub drag: f32,
    pub contact_correction: f32,
    pub repel_radius: f32,
    pub repel_strength: f32,
    pub pressed_multiplier: f32,
    pub explosion_radius: f32,
    pub explosion_strength: f32,
}

impl Default for GravityParams {
    fn default() -> Self {
        Self {
            count: GRAVITY_PARTICLE_COUNT,
            gravity: GRAVITY_ACCEL,
            bounce_damping: GRAVITY_BOUNCE_DAMPING,
            drag: GRAVITY_DRAG,
            contact_correction: GRAVITY_CONTACT_CORRECTION,
            repel_radius: GRAVITY_REPEL_RADIUS,
            repel_strength: GRAVITY_REPEL_STRENGTH,
            pressed_multiplier: GRAVITY_PRESSED_MULTIPLIER,
            explosion_radius: GRAVITY_EXPLOSION_RADIUS,
            explosion_strength: GRAVITY_EXPLOSION_STRENGTH,
        }
    }
}

pub struct GravityField {
    params: GravityParams,
    particles: Vec<Particle>,
    // Overlapping pairs found by the last step; drawn as faint links.
    contacts: Vec<(usize, usize)>,
    bounds: Bounds,
    rng: StdRng,
    seeded: bool,
}

impl GravityField {
    pub fn new(seed: u64) -> Self {
        Self::with_params(GravityParams::default(), seed)
    }

    pub fn with_params(params: GravityParams, seed: u64) -> Self {
        Self {
            params,
            particles: Vec::new(),
            contacts: Vec::new(),
            bounds: Bounds::default(),
            rng: StdRng::seed_from_u64(seed),
            seeded: false,
        }
    }

    /// Field with a fixed particle set; `init` will not add any more.
    pub fn from_particles(particles: Vec<Particle>, params: GravityParams) -> Self {
        Self {
            params,
            particles,
            contacts: Vec::new(),
            bounds: Bounds::default(),
            rng: StdRng::seed_from_u64(0),
            seeded: true,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn contacts(&self) -> &[(usize, usize)] {
        &self.contacts
    }

    pub fn params(&self) -> &GravityParams {
        &self.params
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn seed(&mut self) {
        let spawn = Spawn {
            speed_max: GRAVITY_SPEED_MAX,
            radius_min: GRAVITY_RADIUS_MIN,
            radius_span: GRAVITY_RADIUS_SPAN,
            opacity_min: PARTICLE_OPACITY_MIN,
            opacity_span: PARTICLE_OPACITY_SPAN,
        };
        self.particles = (0..self.params.count)
            .map(|_| {
                let rgb = *PALETTE.choose(&mut self.rng).unwrap_or(&BLUE);
                Particle::scatter(&mut self.rng, self.bounds, &spawn, Rgba::from_rgb(rgb, 1.0))
            })
            .collect();
        self.seeded = true;
    }

    fn repel(&mut self, cursor: &CursorState) {
        let radius = self.params.repel_radius;
        let strength = if cursor.pressed {
            self.params.repel_strength * self.params.pressed_multiplier
        } else {
            self.params.repel_strength
        };
        for p in &mut self.particles {
            let Some((toward, d)) = cursor.within(p.pos, radius) else {
                continue;
            };
            if d <= f32::EPSILON {
                continue;
            }
            let falloff = (radius - d) / radius;
            p.apply_force(-toward / d * falloff * strength);
        }
    }

    fn explode(&mut self, at: Vec2) {
        let radius = self.params.explosion_radius;
        let strength = self.params.explosion_strength;
        for p in &mut self.particles {
            let away = p.pos - at;
            let d = away.length();
            if d < radius {
                let falloff = (radius - d) / radius;
                p.apply_force(away * falloff * strength);
            }
        }
    }

    fn resolve_contacts(&mut self) {
        self.contacts.clear();
        let k = self.params.contact_correction * 0.5;
        let n = self.particles.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (self.particles[i], self.particles[j]);
                let delta = b.pos - a.pos;
                let d = delta.length();
                let min_dist = a.radius + b.radius;
                if d >= min_dist {
                    continue;
                }
                let dir = if d > f32::EPSILON { delta / d } else { Vec2::X };
                let push = dir * (min_dist - d) * k;
                self.particles[i].pos -= push;
                self.particles[j].pos += push;
                self.contacts.push((i, j));
            }
        }
    }

    fn integrate(&mut self) {
        let GravityParams {
            gravity,
            bounce_damping,
            drag,
            ..
        } = self.params;
        let (w, h) = (self.bounds.width(), self.bounds.height());
        for p in &mut self.particles {
            p.vel.y += gravity;
            p.pos += p.vel;
            let r = p.radius;
            reflect_axis(&mut p.pos.x, &mut p.vel.x, r, w - r, bounce_damping);
            reflect_axis(&mut p.pos.y, &mut p.vel.y, r, h - r, bounce_damping);
            p.vel *= drag;
        }
    }
}

impl Effect for GravityField {
    fn kind(&self) -> EffectKind {
        EffectKind::GravityField
    }

    fn init(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        if !self.seeded {
            self.seed();
            log::debug!("[gravity] seeded {} particles", self.particles.len());
        }
    }

    fn step(&mut self, input: &FrameInput) {
        self.repel(&input.cursor);
        if let Some(at) = input.cursor.click {
            self.explode(at);
        }
        self.resolve_contacts();
        self.integrate();
    }

    fn render(&self, surface: &mut dyn Surface, _input: &FrameInput) {
        let link = Rgba::from_rgb(BLUE, GRAVITY_CONTACT_LINE_ALPHA);
        for &(i, j) in &self.contacts {
            if let (Some(a), Some(b)) = (self.particles.get(i), self.particles.get(j)) {
                surface.stroke_line(a.pos, b.pos, link, 1.0, 1.0);
            }
        }
        for p in &self.particles {
            let glow = Glow {
                blur: GRAVITY_GLOW_BLUR,
                color: p.color.with_alpha(GRAVITY_GLOW_ALPHA),
            };
            surface.fill_circle(p.pos, p.radius, p.color.with_alpha(p.opacity), Some(glow));
        }
    }

    fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn dispose(&mut self) {
        self.particles.clear();
        self.contacts.clear();
    }
}
