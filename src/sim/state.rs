//! Session state and the sprites that live in it
//!
//! Everything the game remembers between ticks lives here. Sprites are built
//! once and reset in place at the start of every session.

use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::bounds::Extent;
use super::carrot::Carrot;
use super::hare::Hare;
use super::lynx::Lynx;
use super::sprite::{Backdrop, SimRng, Sprite, SpriteEvent, SpriteKind, World};
use crate::consts::{CARROT_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::lynx_entry_delays;

/// Top-level mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen: waiting for Enter or Escape
    Idle,
    /// A session is being played
    Running,
}

/// Image sizes for every sprite kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSizes {
    pub start_background: Extent,
    pub background: Extent,
    pub carrot: Extent,
    pub hare: Extent,
    pub lynx: Extent,
}

impl SpriteSizes {
    pub fn get(&self, kind: SpriteKind) -> Extent {
        match kind {
            SpriteKind::StartBackground => self.start_background,
            SpriteKind::Background => self.background,
            SpriteKind::Carrot => self.carrot,
            SpriteKind::Hare => self.hare,
            SpriteKind::Lynx => self.lynx,
        }
    }
}

/// Complete game state (deterministic for a given seed)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    #[serde(skip)]
    rng: SimRng,
    /// Screen size
    pub arena: Extent,
    pub mode: GameMode,
    /// Cleared by an exit command; the frame loop stops once this is false
    active: bool,
    /// Score of the current (or last) session
    pub score: u64,
    /// Best score since the process started
    pub top_score: u64,
    /// Ticks processed since startup
    pub time_ticks: u64,
    /// Ticks processed in the current session
    pub session_ticks: u64,
    /// Number of sessions started
    pub sessions_played: u32,
    /// Shown behind the title screen only
    pub start_background: Backdrop,
    // Play-screen sprites, in update and draw order
    pub background: Backdrop,
    pub carrots: Vec<Carrot>,
    pub hare: Hare,
    pub lynxes: Vec<Lynx>,
}

impl GameState {
    /// Build every sprite for the standard screen size
    pub fn new(seed: u64, sizes: SpriteSizes) -> Self {
        let arena = Extent::from_pixels(SCREEN_WIDTH, SCREEN_HEIGHT);
        Self::with_arena(seed, sizes, arena, CARROT_COUNT, lynx_entry_delays())
    }

    /// Build a state with a custom arena and sprite population
    pub fn with_arena(
        seed: u64,
        sizes: SpriteSizes,
        arena: Extent,
        carrot_count: usize,
        entry_delays: impl IntoIterator<Item = u32>,
    ) -> Self {
        let mut rng = SimRng::seed_from_u64(seed);
        let carrots = (0..carrot_count)
            .map(|_| Carrot::new(sizes.carrot, arena, &mut rng))
            .collect();
        let lynxes = entry_delays
            .into_iter()
            .map(|delay| Lynx::new(sizes.lynx, delay))
            .collect();

        Self {
            seed,
            rng,
            arena,
            mode: GameMode::Idle,
            active: true,
            score: 0,
            top_score: 0,
            time_ticks: 0,
            session_ticks: 0,
            sessions_played: 0,
            start_background: Backdrop::new(SpriteKind::StartBackground, sizes.start_background),
            background: Backdrop::new(SpriteKind::Background, sizes.background),
            carrots,
            hare: Hare::new(sizes.hare, arena),
            lynxes,
        }
    }

    /// False once an exit has been requested
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn request_exit(&mut self) {
        if self.active {
            log::info!("Exit requested");
        }
        self.active = false;
    }

    /// What sprites may look at during their update
    pub fn world(&self) -> World {
        World {
            arena: self.arena,
            hare: self.hare.bounds(),
        }
    }

    /// Play-screen sprites in update and draw order:
    /// background, carrots, hare, lynxes
    pub fn sprites(&self) -> impl Iterator<Item = &dyn Sprite> {
        std::iter::once(&self.background as &dyn Sprite)
            .chain(self.carrots.iter().map(|c| c as &dyn Sprite))
            .chain(std::iter::once(&self.hare as &dyn Sprite))
            .chain(self.lynxes.iter().map(|l| l as &dyn Sprite))
    }

    /// Reset every sprite and begin a new session
    pub fn start_session(&mut self) {
        let arena = self.arena;
        self.background.reset(arena, &mut self.rng);
        for carrot in &mut self.carrots {
            carrot.reset(arena, &mut self.rng);
        }
        self.hare.reset(arena, &mut self.rng);
        for lynx in &mut self.lynxes {
            lynx.reset(arena, &mut self.rng);
        }

        self.score = 0;
        self.session_ticks = 0;
        self.sessions_played += 1;
        self.mode = GameMode::Running;
        log::info!("Session {} started", self.sessions_played);
    }

    /// Update every play-screen sprite once, in draw order.
    ///
    /// Each sprite sees the hare where it is at that moment: carrots see it
    /// before it moves this tick, lynxes after.
    pub fn advance_sprites(&mut self) -> Vec<SpriteEvent> {
        let mut events = Vec::new();

        let world = self.world();
        events.extend(self.background.update(&world, &mut self.rng));
        for carrot in &mut self.carrots {
            events.extend(carrot.update(&world, &mut self.rng));
        }

        events.extend(self.hare.update(&world, &mut self.rng));

        let world = self.world();
        for lynx in &mut self.lynxes {
            events.extend(lynx.update(&world, &mut self.rng));
        }

        self.session_ticks += 1;
        events
    }

    /// Finish the session and return to the title screen.
    ///
    /// Returns `true` if the session beat the previous top score.
    pub fn end_session(&mut self) -> bool {
        self.mode = GameMode::Idle;
        let new_top = self.score > self.top_score;
        if new_top {
            self.top_score = self.score;
        }
        log::info!(
            "Session {} over after {} ticks: score {}, top score {}",
            self.sessions_played,
            self.session_ticks,
            self.score,
            self.top_score
        );
        new_top
    }
}
