//! Hare Chase - steer a snowshoe hare to capture carrots while lynxes give chase
//!
//! Core modules:
//! - `sim`: Deterministic simulation (sprites, collisions, session state)
//! - `renderer`: wgpu sprite and text rendering
//! - `platform`: Native window, input mapping and frame pacing
//! - `assets`: Image and sound loading
//! - `audio`: Sound effect playback
//! - `settings`: Runtime knobs read from the environment

pub mod assets;
pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::StartupError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window size in pixels
    pub const SCREEN_WIDTH: u32 = 1400;
    pub const SCREEN_HEIGHT: u32 = 650;
    pub const WINDOW_TITLE: &str = "Hare Chase";

    /// Frame rate the loop is paced to
    pub const TARGET_FPS: u32 = 60;

    /// Hare movement per tick on each axis
    pub const HARE_SPEED: f32 = 20.0;

    /// Number of carrots on the field
    pub const CARROT_COUNT: usize = 20;
    /// Points awarded per captured carrot
    pub const CARROT_REWARD: u64 = 10;

    /// Lynx pursuit physics
    pub const LYNX_ACCEL: f32 = 0.2;
    pub const LYNX_FRICTION: f32 = 0.99;
    /// Where lynxes wait before entering (off the top of the screen)
    pub const LYNX_STAGING_X: f32 = 200.0;
    pub const LYNX_STAGING_Y: f32 = -200.0;
    /// Lynx entry delays in ticks: 0, 300, ..., 2700
    pub const LYNX_COUNT: u32 = 10;
    pub const LYNX_ENTRY_STEP: u32 = 300;

    /// Font size of every on-screen message, in points
    pub const TEXT_SIZE: f32 = 42.0;
    /// Offset of the coloured copy from its shadow
    pub const TEXT_SHADOW_OFFSET: f32 = 2.0;
}

/// Entry delays for every lynx, in spawn order
pub fn lynx_entry_delays() -> impl Iterator<Item = u32> {
    (0..consts::LYNX_COUNT).map(|i| i * consts::LYNX_ENTRY_STEP)
}
