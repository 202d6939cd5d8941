//! Two dancing rag-doll robots.
//!
//! Each robot is a figure of Verlet mass points held together by iteratively
//! relaxed distance constraints. A fixed-step stage drives both figures,
//! relays pointer input, and talks to abstract rendering and audio
//! collaborators. There is no parallelism anywhere: one `Stage::tick` per
//! display refresh, strictly sequential and deterministic.

use glam::Vec2;

pub mod audio;
pub mod cast;
pub mod error;
pub mod figure;
pub mod pointer;
pub mod renderer;
pub mod stage;

pub use audio::AudioSink;
pub use error::RigError;
pub use figure::Figure;
pub use pointer::{DragTarget, Pointer};
pub use renderer::{ImageHandle, Renderer, Segment};
pub use stage::{Stage, Ticker};

/// The authored rigs assume an 1100-unit reference viewport; the scale maps
/// simulation units to pixels.
pub const REFERENCE_EXTENT: f32 = 1100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scale: width.min(height) / REFERENCE_EXTENT,
        }
    }

    /// Screen position mapped back into unscaled simulation coordinates.
    pub fn unproject(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            (screen.x - self.width * 0.5) / self.scale,
            screen.y / self.scale,
        )
    }

    /// Simulation position projected onto the screen.
    pub fn project(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x * self.scale + self.width * 0.5,
            position.y * self.scale,
        )
    }
}
