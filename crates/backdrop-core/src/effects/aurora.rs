//! Three translucent sine bands rolling across the lower part of the page.

use crate::color::Rgba;
use crate::constants::*;
use crate::effect::{Effect, EffectKind, FrameInput};
use crate::geom::Bounds;
use crate::surface::{ColorStop, Fill, Path, Stops, Surface};
use glam::Vec2;
use smallvec::smallvec;

/// Closed-form parameters of one band at a given time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuroraLayer {
    pub index: usize,
    pub baseline: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub phase: f32,
}

impl AuroraLayer {
    pub fn at(index: usize, time: f32, bounds: Bounds) -> Self {
        let i = index as f32;
        Self {
            index,
            baseline: bounds.height() * (AURORA_BASELINE + i * AURORA_BASELINE_STEP),
            amplitude: AURORA_AMPLITUDE + i * AURORA_AMPLITUDE_STEP,
            frequency: AURORA_FREQUENCY - i * AURORA_FREQUENCY_STEP,
            phase: time + i * AURORA_PHASE_STEP,
        }
    }

    /// Crest height at `x`: a base wave plus a half-amplitude overtone.
    #[inline]
    pub fn sample(&self, x: f32) -> f32 {
        let f = self.frequency;
        self.baseline
            + (x * f + self.phase).sin() * self.amplitude
            + (x * f * 2.0 + self.phase * 1.5).sin() * (self.amplitude / 2.0)
    }

    /// Band outline: the crest sampled across the width, then down to the
    /// bottom corners.
    pub fn outline(&self, bounds: Bounds) -> Path {
        let (w, h) = (bounds.width(), bounds.height());
        let samples = (w / AURORA_SAMPLE_STEP) as usize + 1;
        let mut path = Path::with_capacity(samples + 4);
        path.move_to(Vec2::new(0.0, self.sample(0.0)));
        for k in 1..samples {
            let x = k as f32 * AURORA_SAMPLE_STEP;
            path.line_to(Vec2::new(x, self.sample(x)));
        }
        path.line_to(Vec2::new(w, h)).line_to(Vec2::new(0.0, h)).close();
        path
    }

    /// Vertical gradient spanning the crest's swing, fading to transparent.
    pub fn fill(&self, dark: bool) -> Fill {
        let rgb = PALETTE[self.index % PALETTE.len()];
        let (tops, mids) = if dark {
            (AURORA_ALPHA_DARK, AURORA_MID_ALPHA_DARK)
        } else {
            (AURORA_ALPHA_LIGHT, AURORA_MID_ALPHA_LIGHT)
        };
        let layer = self.index % AURORA_LAYERS;
        let stops: Stops = smallvec![
            ColorStop {
                offset: 0.0,
                color: Rgba::from_rgb(rgb, tops[layer]),
            },
            ColorStop {
                offset: 0.5,
                color: Rgba::from_rgb(rgb, mids[layer]),
            },
            ColorStop {
                offset: 1.0,
                color: Rgba::from_rgb(rgb, 0.0),
            },
        ];
        Fill::Linear {
            from: Vec2::new(0.0, self.baseline - self.amplitude),
            to: Vec2::new(0.0, self.baseline + self.amplitude),
            stops,
        }
    }
}

/// Only elapsed time persists between frames.
#[derive(Debug, Default)]
pub struct AuroraWave {
    bounds: Bounds,
    time: f32,
}

impl AuroraWave {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn layers(&self) -> impl Iterator<Item = AuroraLayer> + '_ {
        (0..AURORA_LAYERS).map(move |i| AuroraLayer::at(i, self.time, self.bounds))
    }
}

impl Effect for AuroraWave {
    fn kind(&self) -> EffectKind {
        EffectKind::AuroraWave
    }

    fn init(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn step(&mut self, input: &FrameInput) {
        self.time = input.elapsed * AURORA_TIME_RATE;
    }

    fn render(&self, surface: &mut dyn Surface, input: &FrameInput) {
        for layer in self.layers() {
            surface.fill_path(&layer.outline(self.bounds), &layer.fill(input.dark));
        }
    }

    fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn dispose(&mut self) {
        self.time = 0.0;
    }
}
