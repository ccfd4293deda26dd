//! Lynxes: predators that wait off screen, then hunt the hare
//!
//! Each lynx counts the ticks since the session started and stays dormant
//! until its entry delay has passed. Once active it accelerates toward the
//! hare on both axes independently, losing a little speed to friction every
//! tick, so it overshoots and swings back like a spring.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::{Bounds, Extent};
use super::sprite::{SimRng, Sprite, SpriteEvent, SpriteKind, World};
use crate::consts::{LYNX_ACCEL, LYNX_FRICTION, LYNX_STAGING_X, LYNX_STAGING_Y};

/// Whether a lynx has joined the hunt yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LynxState {
    /// Waiting off screen for its entry delay to pass
    Dormant,
    /// Chasing the hare
    Active,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lynx {
    pub position: Vec2,
    pub extent: Extent,
    /// Ticks counted since the last reset
    pub entry_count: u32,
    /// Ticks to wait before chasing
    pub entry_delay: u32,
    pub velocity: Vec2,
    pub accel: Vec2,
    /// Velocity multiplier applied every active tick
    pub friction: f32,
}

impl Lynx {
    pub fn new(extent: Extent, entry_delay: u32) -> Self {
        let mut lynx = Self {
            position: Vec2::ZERO,
            extent,
            entry_count: 0,
            entry_delay,
            velocity: Vec2::ZERO,
            accel: Vec2::ZERO,
            friction: 0.0,
        };
        lynx.restage();
        lynx
    }

    pub fn state(&self) -> LynxState {
        if self.entry_count < self.entry_delay {
            LynxState::Dormant
        } else {
            LynxState::Active
        }
    }

    /// Advance one tick. Returns `true` if the lynx caught the hare.
    pub fn hunt(&mut self, world: &World) -> bool {
        self.entry_count = self.entry_count.saturating_add(1);
        if self.state() == LynxState::Dormant {
            return false;
        }

        let target = world.hare.position;
        self.velocity.x = pursue(self.velocity.x, self.accel.x, target.x > self.position.x);
        self.velocity.x *= self.friction;
        self.position.x += self.velocity.x;

        self.velocity.y = pursue(self.velocity.y, self.accel.y, target.y > self.position.y);
        self.velocity.y *= self.friction;
        self.position.y += self.velocity.y;

        self.bounds().intersects(&world.hare)
    }

    /// Send back to the staging point and wait out the entry delay again
    pub fn restage(&mut self) {
        self.entry_count = 0;
        self.friction = LYNX_FRICTION;
        self.accel = Vec2::splat(LYNX_ACCEL);
        self.velocity = Vec2::ZERO;
        self.position = Vec2::new(LYNX_STAGING_X, LYNX_STAGING_Y);
    }
}

impl Sprite for Lynx {
    fn kind(&self) -> SpriteKind {
        SpriteKind::Lynx
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.extent)
    }

    fn update(&mut self, world: &World, _rng: &mut SimRng) -> Option<SpriteEvent> {
        self.hunt(world).then_some(SpriteEvent::HareCaught)
    }

    fn reset(&mut self, _arena: Extent, _rng: &mut SimRng) {
        self.restage();
    }
}

/// Accelerate toward the target; no dead zone, so an aligned lynx jitters
fn pursue(speed: f32, accel: f32, target_ahead: bool) -> f32 {
    if target_ahead { speed + accel } else { speed - accel }
}
