//! Carrots: targets the hare collects for points

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::{Bounds, Extent};
use super::sprite::{SimRng, Sprite, SpriteEvent, SpriteKind, World};

/// A carrot waiting somewhere on the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Carrot {
    pub position: Vec2,
    pub extent: Extent,
}

impl Carrot {
    pub fn new(extent: Extent, arena: Extent, rng: &mut SimRng) -> Self {
        let mut carrot = Self {
            position: Vec2::ZERO,
            extent,
        };
        carrot.reset(arena, rng);
        carrot
    }

    /// Move to a uniformly random whole-pixel position inside the arena
    fn respawn(&mut self, arena: Extent, rng: &mut SimRng) {
        let max = arena.max_position(self.extent).max(Vec2::ZERO);
        let x = rng.random_range(0..=max.x as u32);
        let y = rng.random_range(0..=max.y as u32);
        self.position = Vec2::new(x as f32, y as f32);
    }
}

impl Sprite for Carrot {
    fn kind(&self) -> SpriteKind {
        SpriteKind::Carrot
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.extent)
    }

    /// A carrot touched by the hare is captured and immediately moves somewhere new
    fn update(&mut self, world: &World, rng: &mut SimRng) -> Option<SpriteEvent> {
        if !self.bounds().intersects(&world.hare) {
            return None;
        }
        self.respawn(world.arena, rng);
        Some(SpriteEvent::CarrotCaptured)
    }

    fn reset(&mut self, arena: Extent, rng: &mut SimRng) {
        self.respawn(arena, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const ARENA: Extent = Extent::new(1400.0, 650.0);
    const CARROT: Extent = Extent::new(40.0, 50.0);

    fn world_with_hare_at(position: Vec2) -> World {
        World {
            arena: ARENA,
            hare: Bounds::new(position, Extent::new(64.0, 48.0)),
        }
    }

    fn in_bounds(carrot: &Carrot) -> bool {
        let max = ARENA.max_position(carrot.extent);
        (0.0..=max.x).contains(&carrot.position.x) && (0.0..=max.y).contains(&carrot.position.y)
    }

    #[test]
    fn test_reset_lands_on_whole_pixels_in_bounds() {
        let mut rng = SimRng::seed_from_u64(7);
        let mut carrot = Carrot::new(CARROT, ARENA, &mut rng);
        for _ in 0..1000 {
            carrot.reset(ARENA, &mut rng);
            assert!(in_bounds(&carrot), "{:?}", carrot.position);
            assert_eq!(carrot.position.x.fract(), 0.0);
            assert_eq!(carrot.position.y.fract(), 0.0);
        }
    }

    #[test]
    fn test_capture_moves_carrot() {
        let mut rng = SimRng::seed_from_u64(42);
        let mut carrot = Carrot::new(CARROT, ARENA, &mut rng);
        carrot.position = Vec2::new(500.0, 300.0);
        let world = world_with_hare_at(Vec2::new(510.0, 310.0));

        assert_eq!(carrot.update(&world, &mut rng), Some(SpriteEvent::CarrotCaptured));
        assert!(in_bounds(&carrot));
    }

    #[test]
    fn test_no_capture_when_apart() {
        let mut rng = SimRng::seed_from_u64(42);
        let mut carrot = Carrot::new(CARROT, ARENA, &mut rng);
        carrot.position = Vec2::new(10.0, 10.0);
        let world = world_with_hare_at(Vec2::new(700.0, 300.0));

        assert_eq!(carrot.update(&world, &mut rng), None);
        assert_eq!(carrot.position, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_reset_is_roughly_uniform() {
        // Split each axis into 4 buckets; each should get about a quarter
        let mut rng = SimRng::seed_from_u64(1234);
        let mut carrot = Carrot::new(CARROT, ARENA, &mut rng);
        let max = ARENA.max_position(CARROT);
        let trials = 20_000;
        let mut x_buckets = [0u32; 4];
        let mut y_buckets = [0u32; 4];

        for _ in 0..trials {
            carrot.reset(ARENA, &mut rng);
            let bx = ((carrot.position.x / (max.x + 1.0)) * 4.0) as usize;
            let by = ((carrot.position.y / (max.y + 1.0)) * 4.0) as usize;
            x_buckets[bx.min(3)] += 1;
            y_buckets[by.min(3)] += 1;
        }

        let expected = trials as f32 / 4.0;
        for count in x_buckets.iter().chain(y_buckets.iter()) {
            let deviation = (*count as f32 - expected).abs() / expected;
            assert!(deviation < 0.05, "bucket {} vs expected {}", count, expected);
        }
    }
}
