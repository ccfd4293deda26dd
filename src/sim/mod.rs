//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable update order (background, carrots, hare, lynxes)
//! - No rendering, audio or platform dependencies

pub mod bounds;
pub mod carrot;
pub mod hare;
pub mod lynx;
pub mod sprite;
pub mod state;
pub mod tick;

pub use bounds::{Bounds, Extent};
pub use carrot::Carrot;
pub use hare::{Direction, Hare, MoveIntent};
pub use lynx::{Lynx, LynxState};
pub use sprite::{Backdrop, SimRng, Sprite, SpriteEvent, SpriteKind, World};
pub use state::{GameMode, GameState, SpriteSizes};
pub use tick::{Command, GameEvent, TickInput, tick};
