//! Keyboard to command mapping
//!
//! Converts winit key events into simulation commands and buffers them until
//! the next frame boundary, so a tick sees its commands in arrival order.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::sim::{Command, Direction, TickInput};

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::ArrowUp => Some(Direction::Up),
        KeyCode::ArrowDown => Some(Direction::Down),
        KeyCode::ArrowLeft => Some(Direction::Left),
        KeyCode::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}

/// Command for a key transition, if the key means anything.
///
/// Auto-repeat presses are dropped: holding an arrow is one begin and one
/// end.
pub fn command_for_key(code: KeyCode, state: ElementState, repeat: bool) -> Option<Command> {
    if repeat {
        return None;
    }

    match (code, state) {
        (KeyCode::Escape, ElementState::Pressed) => Some(Command::Exit),
        (KeyCode::Enter | KeyCode::NumpadEnter, ElementState::Pressed) => Some(Command::Start),
        (code, ElementState::Pressed) => direction_for(code).map(Command::BeginMove),
        (code, ElementState::Released) => direction_for(code).map(Command::EndMove),
    }
}

/// Commands gathered between two frames
#[derive(Debug, Default)]
pub struct InputBuffer {
    commands: Vec<Command>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        log::trace!("Buffered {:?}", command);
        self.commands.push(command);
    }

    /// Everything buffered so far, leaving the buffer empty
    pub fn drain(&mut self) -> TickInput {
        TickInput::new(self.commands.drain(..))
    }
}
