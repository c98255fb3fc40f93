//! Regular dot grid that swells and brightens around the pointer.

use crate::color::Rgba;
use crate::constants::*;
use crate::effect::{Effect, EffectKind, FrameInput};
use crate::geom::{lerp_toward, Bounds};
use crate::input::CursorState;
use crate::surface::Surface;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct DotGridParams {
    pub spacing: f32,
    pub influence_radius: f32,
    pub smoothing: f32,
}

impl Default for DotGridParams {
    fn default() -> Self {
        Self {
            spacing: DOT_SPACING,
            influence_radius: DOT_INFLUENCE_RADIUS,
            smoothing: DOT_SMOOTHING,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub pos: Vec2,
    pub size: f32,
    pub target_size: f32,
    pub opacity: f32,
    pub target_opacity: f32,
}

impl Dot {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            size: DOT_BASE_SIZE,
            target_size: DOT_BASE_SIZE,
            opacity: DOT_BASE_OPACITY,
            target_opacity: DOT_BASE_OPACITY,
        }
    }

    /// Baseline targets, boosted linearly by cursor proximity.
    fn retarget(&mut self, cursor: &CursorState, radius: f32) {
        let factor = cursor
            .within(self.pos, radius)
            .map(|(_, d)| 1.0 - d / radius)
            .unwrap_or(0.0);
        self.target_size = DOT_BASE_SIZE + factor * DOT_SIZE_BOOST;
        self.target_opacity = DOT_BASE_OPACITY + factor * DOT_OPACITY_BOOST;
    }

    fn approach(&mut self, smoothing: f32) {
        self.size = lerp_toward(self.size, self.target_size, smoothing);
        self.opacity = lerp_toward(self.opacity, self.target_opacity, smoothing);
    }
}

pub struct DotGrid {
    params: DotGridParams,
    dots: Vec<Dot>,
    bounds: Bounds,
    seeded: bool,
}

impl DotGrid {
    pub fn new() -> Self {
        Self::with_params(DotGridParams::default())
    }

    pub fn with_params(params: DotGridParams) -> Self {
        Self {
            params,
            dots: Vec::new(),
            bounds: Bounds::default(),
            seeded: false,
        }
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn params(&self) -> &DotGridParams {
        &self.params
    }

    /// Nearest dot to `p`, handy for hit tests.
    pub fn dot_near(&self, p: Vec2) -> Option<&Dot> {
        self.dots
            .iter()
            .min_by(|a, b| a.pos.distance_squared(p).total_cmp(&b.pos.distance_squared(p)))
    }
}

impl Default for DotGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for DotGrid {
    fn kind(&self) -> EffectKind {
        EffectKind::DotGrid
    }

    fn init(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        if self.seeded {
            return;
        }
        let spacing = self.params.spacing.max(1.0);
        let cols = (bounds.width() / spacing).ceil() as usize;
        let rows = (bounds.height() / spacing).ceil() as usize;
        self.dots = (0..cols)
            .flat_map(|c| {
                (0..rows).map(move |r| Dot::at(Vec2::new(c as f32, r as f32) * spacing))
            })
            .collect();
        self.seeded = true;
        log::debug!("[dots] grid {cols}x{rows}");
    }

    fn step(&mut self, input: &FrameInput) {
        let radius = self.params.influence_radius;
        let smoothing = self.params.smoothing;
        for dot in &mut self.dots {
            dot.retarget(&input.cursor, radius);
            dot.approach(smoothing);
        }
    }

    fn render(&self, surface: &mut dyn Surface, _input: &FrameInput) {
        for dot in &self.dots {
            surface.fill_circle(dot.pos, dot.size, Rgba::from_rgb(BLUE, dot.opacity), None);
        }
    }

    fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn dispose(&mut self) {
        self.dots.clear();
    }
}
