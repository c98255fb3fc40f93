//! Drawing model shared by all effects.
//!
//! Effects only talk to the [`Surface`] trait, a small subset of what a 2D
//! canvas context offers. The web front-end implements it over
//! `CanvasRenderingContext2d`; [`Recorder`] captures the calls instead, which
//! is what tests and headless hosts use.

use crate::color::Rgba;
use crate::geom::Bounds;
use glam::Vec2;
use smallvec::SmallVec;

/// How a fill combines with what is already on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Blend {
    #[default]
    SourceOver,
    /// Canvas "lighter": overlapping fills brighten instead of occluding.
    Additive,
}

/// Blurred halo painted underneath a fill or stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Gradient stops; every effect uses at most three.
pub type Stops = SmallVec<[ColorStop; 3]>;

#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Solid(Rgba),
    Linear { from: Vec2, to: Vec2, stops: Stops },
    Radial { center: Vec2, radius: f32, stops: Stops },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSeg {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    Close,
}

/// Minimal path builder mirroring canvas path calls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segs: Vec<PathSeg>,
}

impl Path {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            segs: Vec::with_capacity(n),
        }
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.segs.push(PathSeg::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        self.segs.push(PathSeg::LineTo(p));
        self
    }

    pub fn quad_to(&mut self, ctrl: Vec2, to: Vec2) -> &mut Self {
        self.segs.push(PathSeg::QuadTo { ctrl, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segs.push(PathSeg::Close);
        self
    }

    pub fn segments(&self) -> &[PathSeg] {
        &self.segs
    }

    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }
}

/// Stroke settings for [`Surface::stroke_path`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
    pub round_cap: bool,
    pub glow: Option<Glow>,
}

pub trait Surface {
    /// Wipe the whole area to transparent.
    fn clear(&mut self, bounds: Bounds);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: Option<Glow>);
    /// Straight segment; `opacity` multiplies the color alpha (canvas globalAlpha).
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32, opacity: f32);
    fn fill_path(&mut self, path: &Path, fill: &Fill);
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);
    fn fill_rect(&mut self, bounds: Bounds, fill: &Fill, blend: Blend);
    /// Gaussian blur applied to everything drawn after it; `0` turns it off.
    /// `clear` also turns it off.
    fn set_blur(&mut self, px: f32);
}

/// One captured [`Surface`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear(Bounds),
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        glow: Option<Glow>,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
        opacity: f32,
    },
    FillPath {
        path: Path,
        fill: Fill,
    },
    StrokePath {
        path: Path,
        stroke: Stroke,
    },
    FillRect {
        bounds: Bounds,
        fill: Fill,
        blend: Blend,
    },
    Blur(f32),
}

/// Surface that records calls instead of rasterizing them.
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCmd>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Circle { .. }))
    }
}

impl Surface for Recorder {
    fn clear(&mut self, bounds: Bounds) {
        self.commands.push(DrawCmd::Clear(bounds));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: Option<Glow>) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            color,
            glow,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32, opacity: f32) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            color,
            width,
            opacity,
        });
    }

    fn fill_path(&mut self, path: &Path, fill: &Fill) {
        self.commands.push(DrawCmd::FillPath {
            path: path.clone(),
            fill: fill.clone(),
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.commands.push(DrawCmd::StrokePath {
            path: path.clone(),
            stroke: *stroke,
        });
    }

    fn fill_rect(&mut self, bounds: Bounds, fill: &Fill, blend: Blend) {
        self.commands.push(DrawCmd::FillRect {
            bounds,
            fill: fill.clone(),
            blend,
        });
    }

    fn set_blur(&mut self, px: f32) {
        self.commands.push(DrawCmd::Blur(px));
    }
}
