//! Sound effects played through the default output device
//!
//! Audio is optional: when no device can be opened the game keeps running
//! silently.

use std::io::Cursor;
use std::sync::Arc;

use rodio::decoder::DecoderError;
use rodio::source::{Buffered, SamplesConverter};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Hare ate a carrot
    Crunch,
}

impl SoundEffect {
    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::CarrotCaptured => Some(Self::Crunch),
            _ => None,
        }
    }
}

/// A decoded sound; each clone replays the same samples
type Clip = Buffered<SamplesConverter<Decoder<Cursor<Arc<[u8]>>>, f32>>;

/// Decode an encoded sound file once, up front
fn decode_clip(bytes: Arc<[u8]>) -> Result<Clip, DecoderError> {
    Ok(Decoder::new(Cursor::new(bytes))?
        .convert_samples::<f32>()
        .buffered())
}

/// Holds the open output stream and the decoded clips
pub struct AudioManager {
    // The stream must outlive every sound played on its handle
    output: Option<(OutputStream, OutputStreamHandle)>,
    crunch: Option<Clip>,
    volume: f32,
}

impl AudioManager {
    pub fn new(settings: &Settings, crunch: Arc<[u8]>) -> Self {
        let volume = settings.effective_volume();
        let output = if volume <= 0.0 {
            log::info!("Audio muted");
            None
        } else {
            match OutputStream::try_default() {
                Ok(output) => Some(output),
                Err(e) => {
                    log::warn!("Failed to open audio output - audio disabled: {}", e);
                    None
                }
            }
        };

        // Nothing to decode for a manager that can never play
        let crunch = output.as_ref().and_then(|_| match decode_clip(crunch) {
            Ok(clip) => Some(clip),
            Err(e) => {
                log::warn!("Cannot decode {:?} - effect disabled: {}", SoundEffect::Crunch, e);
                None
            }
        });

        Self {
            output,
            crunch,
            volume,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.output.is_some()
    }

    /// Play a sound effect without waiting for it to finish
    pub fn play(&self, effect: SoundEffect) {
        let Some((_, handle)) = &self.output else { return };

        let clip = match effect {
            SoundEffect::Crunch => &self.crunch,
        };
        let Some(clip) = clip else { return };

        if let Err(e) = handle.play_raw(clip.clone().amplify(self.volume)) {
            log::warn!("Cannot play {:?}: {}", effect, e);
        }
    }

    /// Play whatever sounds this tick's events call for
    pub fn play_events(&self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}
