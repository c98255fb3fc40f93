use crate::constants::MIN_EXTENT;
use crate::error::{EffectError, Result};
use glam::Vec2;

/// Width/height of the drawable area in CSS pixels. Both extents are always
/// at least [`MIN_EXTENT`], so normalizing by them is safe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    width: f32,
    height: f32,
}

impl Bounds {
    /// Validate raw extents coming from layout.
    pub fn checked(width: f32, height: f32) -> Result<Self> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self {
                width: width.max(MIN_EXTENT),
                height: height.max(MIN_EXTENT),
            })
        } else {
            Err(EffectError::DegenerateBounds { width, height })
        }
    }

    /// Like [`Bounds::checked`] but never fails: bad extents fall back to the
    /// minimum. Layout thrash can briefly report 0x0.
    pub fn clamped(width: f32, height: f32) -> Self {
        Self::checked(width, height).unwrap_or_else(|e| {
            log::debug!("[bounds] {e}; clamping");
            let fix = |v: f32| if v.is_finite() { v.max(MIN_EXTENT) } else { MIN_EXTENT };
            Self {
                width: fix(width),
                height: fix(height),
            }
        })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: MIN_EXTENT,
            height: MIN_EXTENT,
        }
    }
}

/// Outcome of resolving one axis against a pair of walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wall {
    None,
    Low,
    High,
}

/// Keep `pos` inside `[lo, hi]`, reflecting `vel` with `damping` on contact.
/// When the range is inverted (entity wider than the surface) the low wall wins.
#[inline]
pub fn reflect_axis(pos: &mut f32, vel: &mut f32, lo: f32, hi: f32, damping: f32) -> Wall {
    if *pos < lo {
        *vel *= -damping;
        *pos = lo;
        Wall::Low
    } else if *pos > hi {
        *vel *= -damping;
        *pos = hi.max(lo);
        Wall::High
    } else {
        Wall::None
    }
}

/// Exponential approach of `current` toward `target` by `factor` in (0, 1).
#[inline]
pub fn lerp_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Frames a lerp with `factor` needs to shrink `gap` below `epsilon`.
pub fn frames_to_converge(gap: f32, epsilon: f32, factor: f32) -> u32 {
    let gap = gap.abs();
    if gap < epsilon || epsilon <= 0.0 || !(0.0..1.0).contains(&factor) || factor == 0.0 {
        return 0;
    }
    ((epsilon / gap).ln() / (1.0 - factor).ln()).ceil() as u32
}
