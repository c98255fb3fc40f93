mod aurora;
mod dot_grid;
mod flowing_lines;
mod gravity;
mod mesh_blobs;
mod network;
mod particle;

pub use aurora::{AuroraLayer, AuroraWave};
pub use dot_grid::{Dot, DotGrid, DotGridParams};
pub use flowing_lines::{band, ControlPoint, FlowingLines, WaveCurve};
pub use gravity::{GravityField, GravityParams};
pub use mesh_blobs::{Blob, MeshBlobs};
pub use network::{NetworkParams, ParticleNetwork};
pub use particle::Particle;
