//! The sprite capability set and the shared world view sprites update against

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::{Bounds, Extent};

/// RNG threaded through the simulation
pub type SimRng = Pcg32;

/// Read-only view of the shared state a sprite may look at while updating
#[derive(Debug, Clone, Copy)]
pub struct World {
    /// Screen size
    pub arena: Extent,
    /// Where the hare is right now
    pub hare: Bounds,
}

/// Which image a sprite is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    StartBackground,
    Background,
    Carrot,
    Hare,
    Lynx,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 5] = [
        SpriteKind::StartBackground,
        SpriteKind::Background,
        SpriteKind::Carrot,
        SpriteKind::Hare,
        SpriteKind::Lynx,
    ];
}

/// Something a sprite reports back from its update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteEvent {
    CarrotCaptured,
    HareCaught,
}

/// Anything that can be drawn, advanced each tick and reset for a new session
pub trait Sprite {
    fn kind(&self) -> SpriteKind;

    fn bounds(&self) -> Bounds;

    /// Advance one tick
    fn update(&mut self, _world: &World, _rng: &mut SimRng) -> Option<SpriteEvent> {
        None
    }

    /// Prepare for a new session
    fn reset(&mut self, _arena: Extent, _rng: &mut SimRng) {}
}

/// A decorative full-screen image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backdrop {
    pub kind: SpriteKind,
    pub position: Vec2,
    pub extent: Extent,
}

impl Backdrop {
    pub fn new(kind: SpriteKind, extent: Extent) -> Self {
        Self {
            kind,
            position: Vec2::ZERO,
            extent,
        }
    }
}

impl Sprite for Backdrop {
    fn kind(&self) -> SpriteKind {
        self.kind
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.extent)
    }
}
