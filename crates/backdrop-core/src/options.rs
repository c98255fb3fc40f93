//! Host-side mount configuration.

use crate::effect::EffectKind;
use crate::error::Result;

/// What to mount and how to seed it, usually read from `data-*` attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountOptions {
    pub kind: EffectKind,
    /// Fixed seed for a reproducible layout; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            kind: EffectKind::ParticleNetwork,
            seed: None,
        }
    }
}

impl MountOptions {
    /// An unknown effect name is an error; a malformed seed is only logged.
    pub fn parse(effect: Option<&str>, seed: Option<&str>) -> Result<Self> {
        let kind = match effect.map(str::trim).filter(|s| !s.is_empty()) {
            Some(name) => name.parse()?,
            None => Self::default().kind,
        };
        let seed = seed
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| match s.parse::<u64>() {
                Ok(v) => Some(v),
                Err(e) => {
                    log::warn!("[options] ignoring seed {s:?}: {e}");
                    None
                }
            });
        Ok(Self { kind, seed })
    }
}
