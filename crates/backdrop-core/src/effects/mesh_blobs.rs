//! Large soft color blobs drifting and bouncing, blended additively.

use crate::color::Rgba;
use crate::constants::*;
use crate::effect::{Effect, EffectKind, FrameInput};
use crate::geom::Bounds;
use crate::surface::{Blend, ColorStop, Fill, Stops, Surface};
use glam::Vec2;
use smallvec::smallvec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blob {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl Blob {
    /// Distance kept between the center and a wall. Capped so a blob wider
    /// than the canvas still has room to travel instead of flipping every frame.
    #[inline]
    pub fn margin(&self, extent: f32) -> f32 {
        self.radius.min(extent * BLOB_MARGIN_FRACTION)
    }

    /// Advance one frame. Returns how many velocity components flipped.
    pub fn advance(&mut self, bounds: Bounds) -> u32 {
        self.pos += self.vel;
        let mx = self.margin(bounds.width());
        let my = self.margin(bounds.height());
        let mut flips = 0;
        // Only flip while heading into the wall, so one contact flips once.
        if (self.pos.x < mx && self.vel.x < 0.0)
            || (self.pos.x > bounds.width() - mx && self.vel.x > 0.0)
        {
            self.vel.x = -self.vel.x;
            flips += 1;
        }
        if (self.pos.y < my && self.vel.y < 0.0)
            || (self.pos.y > bounds.height() - my && self.vel.y > 0.0)
        {
            self.vel.y = -self.vel.y;
            flips += 1;
        }
        flips
    }

    pub fn fill(&self) -> Fill {
        let stops: Stops = smallvec![
            ColorStop {
                offset: 0.0,
                color: self.color,
            },
            ColorStop {
                offset: 1.0,
                color: Rgba::TRANSPARENT,
            },
        ];
        Fill::Radial {
            center: self.pos,
            radius: self.radius,
            stops,
        }
    }
}

#[derive(Debug, Default)]
pub struct MeshBlobs {
    blobs: Vec<Blob>,
    bounds: Bounds,
}

impl MeshBlobs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blobs(blobs: Vec<Blob>) -> Self {
        Self {
            blobs,
            bounds: Bounds::default(),
        }
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }
}

impl Effect for MeshBlobs {
    fn kind(&self) -> EffectKind {
        EffectKind::MeshBlobs
    }

    fn init(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        if !self.blobs.is_empty() {
            return;
        }
        self.blobs = BLOB_LAYOUT
            .iter()
            .zip(PALETTE.iter().zip(BLOB_ALPHA))
            .map(|(&[fx, fy, radius, vx, vy], (&rgb, alpha))| Blob {
                pos: Vec2::new(bounds.width() * fx, bounds.height() * fy),
                vel: Vec2::new(vx, vy),
                radius,
                color: Rgba::from_rgb(rgb, alpha),
            })
            .collect();
    }

    fn step(&mut self, _input: &FrameInput) {
        let bounds = self.bounds;
        for blob in &mut self.blobs {
            blob.advance(bounds);
        }
    }

    fn render(&self, surface: &mut dyn Surface, _input: &FrameInput) {
        surface.set_blur(BLOB_BLUR);
        for blob in &self.blobs {
            surface.fill_rect(self.bounds, &blob.fill(), Blend::Additive);
        }
        surface.set_blur(0.0);
    }

    fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn dispose(&mut self) {
        self.blobs.clear();
    }
}
