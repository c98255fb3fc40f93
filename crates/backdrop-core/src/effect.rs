//! Effect lifecycle contract and the stage that hosts one effect.

use crate::effects::{AuroraWave, DotGrid, FlowingLines, GravityField, MeshBlobs, ParticleNetwork};
use crate::error::{EffectError, Result};
use crate::geom::Bounds;
use crate::input::CursorState;
use crate::surface::Surface;
use std::fmt;
use std::str::FromStr;

/// Everything an effect may read during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the first frame after mount.
    pub elapsed: f32,
    pub frame: u64,
    pub cursor: CursorState,
    pub dark: bool,
}

/// One background animation.
///
/// `init` may be called again after a resize: effects that already own
/// entities keep them and only adopt the new bounds. `render` takes `&self`,
/// so painting can never disturb the simulation.
pub trait Effect {
    fn kind(&self) -> EffectKind;
    fn init(&mut self, bounds: Bounds);
    fn step(&mut self, input: &FrameInput);
    fn render(&self, surface: &mut dyn Surface, input: &FrameInput);
    fn resize(&mut self, bounds: Bounds);
    /// Drop simulation entities. Repeated calls are no-ops.
    fn dispose(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    GravityField,
    AuroraWave,
    DotGrid,
    FlowingLines,
    MeshBlobs,
    ParticleNetwork,
}

impl EffectKind {
    pub const ALL: [EffectKind; 6] = [
        EffectKind::GravityField,
        EffectKind::AuroraWave,
        EffectKind::DotGrid,
        EffectKind::FlowingLines,
        EffectKind::MeshBlobs,
        EffectKind::ParticleNetwork,
    ];

    /// Short name used in `data-backdrop` attributes.
    pub fn name(&self) -> &'static str {
        match self {
            EffectKind::GravityField => "gravity",
            EffectKind::AuroraWave => "aurora",
            EffectKind::DotGrid => "dots",
            EffectKind::FlowingLines => "lines",
            EffectKind::MeshBlobs => "mesh",
            EffectKind::ParticleNetwork => "network",
        }
    }

    /// Build a fresh, uninitialized effect. `None` seeds from entropy.
    pub fn build(&self, seed: Option<u64>) -> Box<dyn Effect> {
        let seed = seed.unwrap_or_else(rand::random);
        match self {
            EffectKind::GravityField => Box::new(GravityField::new(seed)),
            EffectKind::AuroraWave => Box::new(AuroraWave::new()),
            EffectKind::DotGrid => Box::new(DotGrid::new()),
            EffectKind::FlowingLines => Box::new(FlowingLines::new(seed)),
            EffectKind::MeshBlobs => Box::new(MeshBlobs::new()),
            EffectKind::ParticleNetwork => Box::new(ParticleNetwork::new(seed)),
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EffectKind {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gravity" | "anti-gravity" | "antigravity" => Ok(EffectKind::GravityField),
            "aurora" => Ok(EffectKind::AuroraWave),
            "dots" | "dot-grid" | "dot-matrix" => Ok(EffectKind::DotGrid),
            "lines" | "flowing-lines" => Ok(EffectKind::FlowingLines),
            "mesh" | "mesh-gradient" | "blobs" => Ok(EffectKind::MeshBlobs),
            "network" | "particle-wave" | "particles" => Ok(EffectKind::ParticleNetwork),
            _ => Err(EffectError::UnknownEffect(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageState {
    Pending,
    Live,
    /// Surface unusable; every call is a no-op from here on.
    Inert,
    Disposed,
}

/// An effect bound to the surface it paints into.
pub struct Stage<S> {
    effect: Box<dyn Effect>,
    surface: Option<S>,
    bounds: Bounds,
    state: StageState,
}

impl<S: Surface> Stage<S> {
    /// `surface` is `None` when the host could not obtain a drawing context.
    pub fn new(effect: Box<dyn Effect>, surface: Option<S>) -> Self {
        Self {
            effect,
            surface,
            bounds: Bounds::default(),
            state: StageState::Pending,
        }
    }

    pub fn init(&mut self, width: f32, height: f32) -> Result<()> {
        match self.state {
            StageState::Inert => return Err(EffectError::UnsupportedSurface),
            StageState::Disposed => return Ok(()),
            StageState::Pending | StageState::Live => {}
        }
        if self.surface.is_none() {
            self.state = StageState::Inert;
            return Err(EffectError::UnsupportedSurface);
        }
        self.bounds = Bounds::clamped(width, height);
        self.effect.init(self.bounds);
        self.state = StageState::Live;
        log::info!(
            "[stage] {} live at {}x{}",
            self.effect.kind(),
            self.bounds.width(),
            self.bounds.height()
        );
        Ok(())
    }

    pub fn resize(&mut self, bounds: Bounds) {
        if self.state != StageState::Live || bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        self.effect.resize(bounds);
    }

    pub fn step(&mut self, input: &FrameInput) {
        if self.state == StageState::Live {
            self.effect.step(input);
        }
    }

    pub fn render(&mut self, input: &FrameInput) {
        if self.state != StageState::Live {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.clear(self.bounds);
            self.effect.render(surface, input);
        }
    }

    pub fn dispose(&mut self) {
        if self.state == StageState::Disposed {
            return;
        }
        self.effect.dispose();
        self.surface = None;
        self.state = StageState::Disposed;
        log::info!("[stage] {} disposed", self.effect.kind());
    }

    pub fn state(&self) -> StageState {
        self.state
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn kind(&self) -> EffectKind {
        self.effect.kind()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }
}
