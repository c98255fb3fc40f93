use thiserror::Error;

/// Conditions an effect host can run into. None of them are fatal to the page:
/// the host logs them and the affected backdrop stops drawing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EffectError {
    #[error("drawing surface has no usable 2D context")]
    UnsupportedSurface,
    #[error("degenerate surface bounds {width}x{height}")]
    DegenerateBounds { width: f32, height: f32 },
    #[error("unknown effect `{0}`")]
    UnknownEffect(String),
}

pub type Result<T> = std::result::Result<T, EffectError>;
