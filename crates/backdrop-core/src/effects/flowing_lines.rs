//! Soft glowing curves undulating through the middle of the page.

use crate::color::{hsl_to_rgb, Rgba};
use crate::constants::*;
use crate::effect::{Effect, EffectKind, FrameInput};
use crate::geom::Bounds;
use crate::surface::{Glow, Path, Stroke, Surface};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoint {
    pub pos: Vec2,
    pub drift: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WaveCurve {
    pub points: Vec<ControlPoint>,
    pub hue: f32,
    pub width: f32,
}

impl WaveCurve {
    pub fn color(&self) -> Rgba {
        Rgba::from_rgb(hsl_to_rgb(self.hue, LINE_SATURATION, LINE_LIGHTNESS), LINE_ALPHA)
    }

    /// Quadratic segments through the midpoints of consecutive points, closed
    /// off with a straight run to the last point.
    pub fn path(&self) -> Path {
        let mut path = Path::with_capacity(self.points.len() + 1);
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return path;
        };
        path.move_to(first.pos);
        for pair in self.points.windows(2) {
            let (cur, next) = (pair[0].pos, pair[1].pos);
            path.quad_to(cur, (cur + next) * 0.5);
        }
        path.line_to(last.pos);
        path
    }
}

/// Vertical band the control points must stay in.
#[inline]
pub fn band(bounds: Bounds) -> (f32, f32) {
    (
        bounds.height() * LINE_BAND_TOP,
        bounds.height() * LINE_BAND_BOTTOM,
    )
}

/// Each step moves every control point vertically by
/// `sin(t + 0.5 j + i) × 0.5` for point `j` of curve `i`, plus a slow drift
/// of `drift.y × 0.1`. Points are clamped into [`band`]; hitting an edge
/// turns the drift back inward.
pub struct FlowingLines {
    curves: Vec<WaveCurve>,
    bounds: Bounds,
    time: f32,
    rng: StdRng,
    seeded: bool,
}

impl FlowingLines {
    pub fn new(seed: u64) -> Self {
        Self {
            curves: Vec::new(),
            bounds: Bounds::default(),
            time: 0.0,
            rng: StdRng::seed_from_u64(seed),
            seeded: false,
        }
    }

    /// Start from fixed curves; `init` then keeps them instead of seeding.
    pub fn with_curves(curves: Vec<WaveCurve>) -> Self {
        Self {
            curves,
            seeded: true,
            ..Self::new(0)
        }
    }

    pub fn curves(&self) -> &[WaveCurve] {
        &self.curves
    }

    fn seed(&mut self) {
        let (w, h) = (self.bounds.width(), self.bounds.height());
        let gap = w / (LINE_POINTS - 1) as f32;
        let rng = &mut self.rng;
        self.curves = (0..LINE_CURVES)
            .map(|i| {
                let points = (0..LINE_POINTS)
                    .map(|j| ControlPoint {
                        pos: Vec2::new(
                            gap * j as f32,
                            h * (LINE_SEED_TOP + rng.gen::<f32>() * LINE_SEED_SPAN),
                        ),
                        drift: Vec2::new(
                            (rng.gen::<f32>() - 0.5) * 2.0 * LINE_DRIFT_MAX,
                            (rng.gen::<f32>() - 0.5) * 2.0 * LINE_DRIFT_MAX,
                        ),
                    })
                    .collect();
                WaveCurve {
                    points,
                    hue: LINE_HUE_BASE + i as f32 * LINE_HUE_STEP,
                    width: LINE_WIDTH_MIN + rng.gen::<f32>() * LINE_WIDTH_SPAN,
                }
            })
            .collect();
        self.seeded = true;
    }
}

impl Effect for FlowingLines {
    fn kind(&self) -> EffectKind {
        EffectKind::FlowingLines
    }

    fn init(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        if !self.seeded {
            self.seed();
        }
    }

    fn step(&mut self, input: &FrameInput) {
        self.time = input.elapsed * LINE_TIME_RATE;
        let (top, bottom) = band(self.bounds);
        for (ci, curve) in self.curves.iter_mut().enumerate() {
            for (pi, point) in curve.points.iter_mut().enumerate() {
                let wave = (self.time + pi as f32 * LINE_POINT_PHASE + ci as f32).sin();
                point.pos.y += wave * LINE_WAVE_AMPLITUDE + point.drift.y * LINE_DRIFT_SCALE;
                if point.pos.y < top {
                    point.pos.y = top;
                    point.drift.y = point.drift.y.abs();
                } else if point.pos.y > bottom {
                    point.pos.y = bottom;
                    point.drift.y = -point.drift.y.abs();
                }
            }
        }
    }

    fn render(&self, surface: &mut dyn Surface, _input: &FrameInput) {
        for curve in &self.curves {
            let path = curve.path();
            let color = curve.color();
            let glow = Stroke {
                color,
                width: curve.width * LINE_GLOW_WIDTH_SCALE,
                round_cap: true,
                glow: Some(Glow {
                    blur: LINE_GLOW_BLUR,
                    color,
                }),
            };
            let crisp = Stroke {
                color,
                width: curve.width,
                round_cap: true,
                glow: None,
            };
            surface.stroke_path(&path, &glow);
            surface.stroke_path(&path, &crisp);
        }
    }

    fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn dispose(&mut self) {
        self.curves.clear();
    }
}
