//! Native window, input and frame loop
//!
//! Winit drives everything on the main thread. Keys are buffered as
//! commands; every redraw is one frame: drain input, tick the simulation,
//! play sounds, draw, then wait for the next 1/60 s boundary.

pub mod clock;
pub mod input;

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowAttributes, WindowId},
};

use crate::assets::{Assets, SpriteImages};
use crate::audio::AudioManager;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS, WINDOW_TITLE};
use crate::error::StartupError;
use crate::renderer::{RenderState, Scene};
use crate::settings::Settings;
use crate::sim::{GameState, tick};
use clock::FrameClock;
use input::{InputBuffer, command_for_key};

/// Load assets, open the window and play until the player exits.
///
/// Returns once the event loop has shut down.
pub fn run(settings: Settings, seed: u64) -> Result<(), StartupError> {
    let assets = Assets::load(&settings.asset_dir)?;
    let state = GameState::new(seed, assets.images.sizes());
    let audio = AudioManager::new(&settings, Arc::clone(&assets.crunch));

    log::info!("Starting with seed {}", seed);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(state, assets.images, audio);
    event_loop.run_app(&mut app)?;

    match app.startup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App {
    state: GameState,
    /// Handed to the renderer once the window exists
    images: Option<SpriteImages>,
    audio: AudioManager,
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
    input: InputBuffer,
    clock: FrameClock,
    /// Set when the window or GPU could not be brought up
    startup_error: Option<StartupError>,
}

impl App {
    fn new(state: GameState, images: SpriteImages, audio: AudioManager) -> Self {
        Self {
            state,
            images: Some(images),
            audio,
            window: None,
            renderer: None,
            input: InputBuffer::new(),
            clock: FrameClock::new(TARGET_FPS),
            startup_error: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), StartupError> {
        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs)?);
        log::info!(
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        let images = self
            .images
            .take()
            .ok_or_else(|| StartupError::Graphics("sprite images already consumed".into()))?;
        let renderer = pollster::block_on(RenderState::new(
            Arc::clone(&window),
            &images,
            self.state.arena,
        ))?;

        log::info!("Pacing frames to {:?}", self.clock.frame_duration());
        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    /// One pass of input, update, sound and draw
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let input = self.input.drain();
        let events = tick(&mut self.state, &input);
        self.audio.play_events(&events);

        if !self.state.is_active() {
            event_loop.exit();
            return;
        }

        let Some(renderer) = &mut self.renderer else { return };
        match renderer.render(&Scene::build(&self.state)) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.resize(renderer.size.0, renderer.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init_graphics(event_loop) {
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested");
                self.state.request_exit();
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                if let Some(command) = command_for_key(code, event.state, event.repeat) {
                    self.input.push(command);
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if event_loop.exiting() {
            return;
        }
        self.clock.tick();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!(
            "Shutting down after {} ticks, top score {} ({} late frames)",
            self.state.time_ticks,
            self.state.top_score,
            self.clock.missed
        );
    }
}
