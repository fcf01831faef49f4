//! Animated "data plexus" background: a lattice of points riding a traveling
//! sine wave, joined by edges that fade as they stretch.

mod grid;
mod lifecycle;
mod render;
mod wave;

pub use grid::Viewport;
pub use lifecycle::{Controller, FrameId, FrameScheduler, LatticeSettings, Phase};
pub use render::Canvas;
pub use wave::WaveParams;
