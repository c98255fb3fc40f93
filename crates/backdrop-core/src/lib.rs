//! Platform-free core of the animated page backgrounds.
//!
//! Effects advance their own state in [`Effect::step`] and paint through the
//! [`Surface`] trait in [`Effect::render`]. A [`Stage`] binds one effect to a
//! surface and a [`Scheduler`] drives it frame by frame until cancelled.

pub mod color;
pub mod constants;
pub mod effect;
pub mod effects;
pub mod error;
pub mod geom;
pub mod input;
pub mod options;
pub mod scheduler;
pub mod surface;
pub mod theme;

pub use color::{hsl_to_rgb, Rgba};
pub use effect::{Effect, EffectKind, FrameInput, Stage, StageState};
pub use error::{EffectError, Result};
pub use geom::Bounds;
pub use input::{CursorState, InputBridge};
pub use options::MountOptions;
pub use scheduler::{CancellationToken, FrameClock, FramePacer, Scheduler, Viewport};
pub use surface::{DrawCmd, Recorder, Surface};
pub use theme::{FixedTheme, SharedTheme, ThemeSource};
