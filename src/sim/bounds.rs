//! Axis-aligned bounding boxes
//!
//! Every sprite is a rectangle anchored at its top-left corner. Screen
//! coordinates grow right and down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Visual size of a sprite, taken from its image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent of an image measured in whole pixels
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Largest top-left position that keeps `sprite` fully inside `self`
    pub fn max_position(&self, sprite: Extent) -> Vec2 {
        self.as_vec2() - sprite.as_vec2()
    }
}

/// A positioned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Top-left corner
    pub position: Vec2,
    pub extent: Extent,
}

impl Bounds {
    pub const fn new(position: Vec2, extent: Extent) -> Self {
        Self { position, extent }
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        self.position + self.extent.as_vec2()
    }

    /// Inclusive overlap test.
    ///
    /// Rectangles whose edges touch count as intersecting; only a strict gap
    /// on some axis separates them.
    pub fn intersects(&self, other: &Bounds) -> bool {
        let max = self.max();
        let other_max = other.max();

        if max.x < other.position.x {
            return false;
        }
        if max.y < other.position.y {
            return false;
        }
        if self.position.x > other_max.x {
            return false;
        }
        if self.position.y > other_max.y {
            return false;
        }
        true
    }
}
