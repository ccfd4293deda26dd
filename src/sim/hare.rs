//! The player-controlled hare

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::{Bounds, Extent};
use super::sprite::{SimRng, Sprite, SpriteEvent, SpriteKind, World};
use crate::consts::HARE_SPEED;

/// Movement directions, one per arrow key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Applied in this order every tick
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit step in screen coordinates (y grows downwards)
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }
}

/// Independent movement-intent flags.
///
/// Opposite directions may be held together; their deltas cancel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    fn flag_mut(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    pub fn is_set(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// The hare steered by the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hare {
    pub position: Vec2,
    pub extent: Extent,
    pub intent: MoveIntent,
    /// Distance moved per tick on each axis
    pub speed: Vec2,
}

impl Hare {
    pub fn new(extent: Extent, arena: Extent) -> Self {
        let mut hare = Self {
            position: Vec2::ZERO,
            extent,
            intent: MoveIntent::default(),
            speed: Vec2::splat(HARE_SPEED),
        };
        hare.recentre(arena);
        hare
    }

    pub fn begin_move(&mut self, direction: Direction) {
        *self.intent.flag_mut(direction) = true;
    }

    pub fn end_move(&mut self, direction: Direction) {
        *self.intent.flag_mut(direction) = false;
    }

    /// Apply held directions, then keep the hare on screen
    pub fn step(&mut self, arena: Extent) {
        for direction in Direction::ALL {
            if self.intent.is_set(direction) {
                self.position += direction.delta() * self.speed;
            }
        }

        // Right/bottom clamps run last so they win on an undersized arena
        if self.position.x < 0.0 {
            self.position.x = 0.0;
        }
        if self.position.y < 0.0 {
            self.position.y = 0.0;
        }
        if self.position.x + self.extent.width > arena.width {
            self.position.x = arena.width - self.extent.width;
        }
        if self.position.y + self.extent.height > arena.height {
            self.position.y = arena.height - self.extent.height;
        }
    }

    /// Centre on screen, stop moving and restore the start speed
    pub fn recentre(&mut self, arena: Extent) {
        self.intent = MoveIntent::default();
        self.position = arena.max_position(self.extent) / 2.0;
        self.speed = Vec2::splat(HARE_SPEED);
    }
}

impl Sprite for Hare {
    fn kind(&self) -> SpriteKind {
        SpriteKind::Hare
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.extent)
    }

    fn update(&mut self, world: &World, _rng: &mut SimRng) -> Option<SpriteEvent> {
        self.step(world.arena);
        None
    }

    fn reset(&mut self, arena: Extent, _rng: &mut SimRng) {
        self.recentre(arena);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ARENA: Extent = Extent::new(1400.0, 650.0);

    fn hare() -> Hare {
        Hare::new(Extent::new(64.0, 48.0), ARENA)
    }

    #[test]
    fn test_reset_centres_and_clears() {
        let mut hare = hare();
        hare.begin_move(Direction::Left);
        hare.begin_move(Direction::Down);
        hare.speed = Vec2::new(3.0, 7.0);
        hare.step(ARENA);

        hare.recentre(ARENA);
        assert_eq!(hare.position, Vec2::new((1400.0 - 64.0) / 2.0, (650.0 - 48.0) / 2.0));
        assert_eq!(hare.intent, MoveIntent::default());
        assert_eq!(hare.speed, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_single_direction_moves_by_speed() {
        let mut hare = hare();
        let start = hare.position;

        hare.begin_move(Direction::Right);
        hare.step(ARENA);
        assert_eq!(hare.position, start + Vec2::new(20.0, 0.0));

        hare.end_move(Direction::Right);
        hare.begin_move(Direction::Up);
        hare.step(ARENA);
        assert_eq!(hare.position, start + Vec2::new(20.0, -20.0));
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut hare = hare();
        let start = hare.position;

        hare.begin_move(Direction::Up);
        hare.begin_move(Direction::Down);
        hare.begin_move(Direction::Right);
        hare.step(ARENA);

        assert_eq!(hare.position.y, start.y);
        assert_eq!(hare.position.x, start.x + 20.0);
        assert!(hare.intent.is_set(Direction::Up));
        assert!(hare.intent.is_set(Direction::Down));
    }

    #[test]
    fn test_diagonal_moves_both_axes() {
        let mut hare = hare();
        let start = hare.position;
        hare.speed = Vec2::new(3.0, 7.0);

        hare.begin_move(Direction::Up);
        hare.begin_move(Direction::Left);
        hare.step(ARENA);
        assert_eq!(hare.position, start + Vec2::new(-3.0, -7.0));

        hare.end_move(Direction::Up);
        assert!(!hare.intent.is_set(Direction::Up));
        hare.step(ARENA);
        assert_eq!(hare.position, start + Vec2::new(-6.0, -7.0));
    }

    #[test]
    fn test_clamped_at_every_edge() {
        let mut hare = hare();

        hare.begin_move(Direction::Up);
        hare.begin_move(Direction::Left);
        for _ in 0..100 {
            hare.step(ARENA);
        }
        assert_eq!(hare.position, Vec2::ZERO);

        hare.recentre(ARENA);
        hare.begin_move(Direction::Down);
        hare.begin_move(Direction::Right);
        for _ in 0..100 {
            hare.step(ARENA);
        }
        assert_eq!(hare.position, Vec2::new(1400.0 - 64.0, 650.0 - 48.0));
    }

    #[derive(Debug, Clone)]
    enum Step {
        Begin(Direction),
        End(Direction),
        Update,
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    fn any_step() -> impl Strategy<Value = Step> {
        prop_oneof![
            any_direction().prop_map(Step::Begin),
            any_direction().prop_map(Step::End),
            Just(Step::Update),
            Just(Step::Update),
        ]
    }

    proptest! {
        #[test]
        fn prop_hare_stays_on_screen(steps in prop::collection::vec(any_step(), 0..300)) {
            let mut hare = hare();
            for step in steps {
                match step {
                    Step::Begin(d) => hare.begin_move(d),
                    Step::End(d) => hare.end_move(d),
                    Step::Update => hare.step(ARENA),
                }
                prop_assert!(hare.position.x >= 0.0);
                prop_assert!(hare.position.y >= 0.0);
                prop_assert!(hare.position.x <= ARENA.width - hare.extent.width);
                prop_assert!(hare.position.y <= ARENA.height - hare.extent.height);
            }
        }
    }
}
