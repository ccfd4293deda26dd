//! Startup failures
//!
//! Everything that can stop the game before the first frame. These are
//! fatal: the binary logs them and exits with a non-zero status.

use std::path::PathBuf;

#[derive(Debug)]
pub enum StartupError {
    /// Failed to create the OS event loop
    EventLoop(winit::error::EventLoopError),
    /// Failed to open the game window
    Window(winit::error::OsError),
    /// No usable GPU adapter, device or surface
    Graphics(String),
    /// A required image or sound file is missing or cannot be decoded
    Asset { path: PathBuf, reason: String },
}

impl StartupError {
    pub fn asset(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Asset {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoop(e) => write!(f, "Event loop creation failed: {}", e),
            Self::Window(e) => write!(f, "Window creation failed: {}", e),
            Self::Graphics(reason) => write!(f, "Graphics initialization failed: {}", reason),
            Self::Asset { path, reason } => {
                write!(f, "Could not load asset {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoop(e) => Some(e),
            Self::Window(e) => Some(e),
            _ => None,
        }
    }
}

impl From<winit::error::EventLoopError> for StartupError {
    fn from(e: winit::error::EventLoopError) -> Self {
        Self::EventLoop(e)
    }
}

impl From<winit::error::OsError> for StartupError {
    fn from(e: winit::error::OsError) -> Self {
        Self::Window(e)
    }
}

impl From<wgpu::CreateSurfaceError> for StartupError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        Self::Graphics(e.to_string())
    }
}

impl From<wgpu::RequestAdapterError> for StartupError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        Self::Graphics(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for StartupError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        Self::Graphics(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_names_the_file() {
        let err = StartupError::asset("assets/hare.png", "No such file or directory");
        let message = err.to_string();
        assert!(message.contains("assets/hare.png"), "{}", message);
        assert!(message.contains("No such file"), "{}", message);
    }

    #[test]
    fn test_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<StartupError>();
    }
}
