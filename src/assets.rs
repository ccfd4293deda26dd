//! Image and sound loading
//!
//! All assets are read once at startup. A missing or unreadable file is a
//! startup error naming the file; nothing is substituted.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::StartupError;
use crate::sim::{Extent, SpriteKind, SpriteSizes};

/// Sound played when the hare captures a carrot
pub const CRUNCH_SOUND: &str = "crunch.wav";

/// Image file for each sprite kind
pub fn image_file(kind: SpriteKind) -> &'static str {
    match kind {
        SpriteKind::StartBackground => "startBackground.png",
        SpriteKind::Background => "background.png",
        SpriteKind::Carrot => "carrot.png",
        SpriteKind::Hare => "hare.png",
        SpriteKind::Lynx => "lynx.png",
    }
}

/// A decoded RGBA8 image
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    /// Tightly packed rows, 4 bytes per pixel
    pub rgba: Vec<u8>,
}

impl ImageData {
    pub fn extent(&self) -> Extent {
        Extent::from_pixels(self.width, self.height)
    }

    /// Decode PNG bytes
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let image = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?.into_rgba8();
        let (width, height) = image.dimensions();
        Ok(Self {
            width,
            height,
            rgba: image.into_raw(),
        })
    }
}

/// One image per sprite kind
#[derive(Debug, Clone)]
pub struct SpriteImages {
    pub start_background: ImageData,
    pub background: ImageData,
    pub carrot: ImageData,
    pub hare: ImageData,
    pub lynx: ImageData,
}

impl SpriteImages {
    pub fn get(&self, kind: SpriteKind) -> &ImageData {
        match kind {
            SpriteKind::StartBackground => &self.start_background,
            SpriteKind::Background => &self.background,
            SpriteKind::Carrot => &self.carrot,
            SpriteKind::Hare => &self.hare,
            SpriteKind::Lynx => &self.lynx,
        }
    }

    /// Sprite sizes as the simulation sees them
    pub fn sizes(&self) -> SpriteSizes {
        SpriteSizes {
            start_background: self.start_background.extent(),
            background: self.background.extent(),
            carrot: self.carrot.extent(),
            hare: self.hare.extent(),
            lynx: self.lynx.extent(),
        }
    }
}

/// Everything loaded from the asset directory
#[derive(Debug, Clone)]
pub struct Assets {
    pub images: SpriteImages,
    /// Raw WAV bytes, decoded on every play
    pub crunch: Arc<[u8]>,
}

impl Assets {
    /// Load every image and sound from `dir`
    pub fn load(dir: &Path) -> Result<Self, StartupError> {
        log::info!("Loading assets from {}", dir.display());

        let images = SpriteImages {
            start_background: load_image(dir, SpriteKind::StartBackground)?,
            background: load_image(dir, SpriteKind::Background)?,
            carrot: load_image(dir, SpriteKind::Carrot)?,
            hare: load_image(dir, SpriteKind::Hare)?,
            lynx: load_image(dir, SpriteKind::Lynx)?,
        };

        let crunch_path = dir.join(CRUNCH_SOUND);
        let crunch = read_file(&crunch_path)?;
        log::debug!("Loaded {} ({} bytes)", crunch_path.display(), crunch.len());

        Ok(Self {
            images,
            crunch: crunch.into(),
        })
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, StartupError> {
    std::fs::read(path).map_err(|e| StartupError::asset(path, e))
}

fn load_image(dir: &Path, kind: SpriteKind) -> Result<ImageData, StartupError> {
    let path: PathBuf = dir.join(image_file(kind));
    let bytes = read_file(&path)?;
    let image = ImageData::decode(&bytes).map_err(|e| StartupError::asset(&path, e))?;
    if image.width == 0 || image.height == 0 {
        return Err(StartupError::asset(&path, "image is empty"));
    }
    log::debug!("Loaded {} ({}x{})", path.display(), image.width, image.height);
    Ok(image)
}
