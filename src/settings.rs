//! Runtime settings
//!
//! Gameplay tunables are compile-time constants (see `consts`). The few
//! things that vary per machine come from environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable naming the asset directory
pub const ASSETS_ENV: &str = "HARE_CHASE_ASSETS";
/// Environment variable that silences sound effects when set to `1`/`true`
pub const MUTE_ENV: &str = "HARE_CHASE_MUTE";
/// Environment variable for the sound effect volume (0.0 - 1.0)
pub const VOLUME_ENV: &str = "HARE_CHASE_VOLUME";

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding the images and sounds
    pub asset_dir: PathBuf,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Play no sound at all
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Defaults overridden by whatever the environment sets
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(dir) = lookup(ASSETS_ENV).filter(|d| !d.is_empty()) {
            settings.asset_dir = PathBuf::from(dir);
        }

        if let Some(value) = lookup(MUTE_ENV) {
            settings.muted = matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }

        if let Some(value) = lookup(VOLUME_ENV) {
            match value.trim().parse::<f32>() {
                Ok(volume) if volume.is_finite() => settings.sfx_volume = volume.clamp(0.0, 1.0),
                _ => log::warn!("Ignoring {}={:?}: not a number", VOLUME_ENV, value),
            }
        }

        settings
    }

    /// Volume actually applied to sound effects
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.sfx_volume }
    }
}
