//! Fixed timestep simulation tick
//!
//! One call per frame: apply this frame's commands, then advance the sprites
//! if a session was already running when the frame began. The frame that
//! starts a session only resets it; sprites first move on the next frame.

use serde::{Deserialize, Serialize};

use super::hare::Direction;
use super::sprite::SpriteEvent;
use super::state::{GameMode, GameState};
use crate::consts::CARROT_REWARD;

/// A player command, already decoded from raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Begin a session (title screen only)
    Start,
    /// Leave the game (any mode)
    Exit,
    /// Arrow key pressed
    BeginMove(Direction),
    /// Arrow key released
    EndMove(Direction),
}

/// Input commands for a single tick, in arrival order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }
}

/// Something that happened this tick that the outside world may react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    SessionStarted,
    CarrotCaptured,
    /// A lynx reached the hare; the session is over
    HareCaught { score: u64 },
    /// The session that just ended set a new top score
    NewTopScore(u64),
    ExitRequested,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_active() {
        return events;
    }
    state.time_ticks += 1;
    let was_running = state.mode == GameMode::Running;

    for command in &input.commands {
        apply_command(state, *command, &mut events);
        if !state.is_active() {
            // Exit stops the frame here: nothing else is processed
            return events;
        }
    }

    if !was_running {
        return events;
    }

    let mut caught = false;
    for event in state.advance_sprites() {
        match event {
            SpriteEvent::CarrotCaptured => {
                state.score += CARROT_REWARD;
                events.push(GameEvent::CarrotCaptured);
            }
            // Later lynxes may catch the hare in the same frame; the session ends once
            SpriteEvent::HareCaught if !caught => {
                caught = true;
                events.push(GameEvent::HareCaught { score: state.score });
                if state.end_session() {
                    events.push(GameEvent::NewTopScore(state.top_score));
                }
            }
            SpriteEvent::HareCaught => {}
        }
    }

    events
}

fn apply_command(state: &mut GameState, command: Command, events: &mut Vec<GameEvent>) {
    match (state.mode, command) {
        (_, Command::Exit) => {
            state.request_exit();
            events.push(GameEvent::ExitRequested);
        }
        (GameMode::Idle, Command::Start) => {
            state.start_session();
            events.push(GameEvent::SessionStarted);
        }
        (GameMode::Running, Command::BeginMove(direction)) => state.hare.begin_move(direction),
        (GameMode::Running, Command::EndMove(direction)) => state.hare.end_move(direction),
        // Start while running, movement on the title screen
        _ => log::trace!("Ignoring {:?} in {:?} mode", command, state.mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::LYNX_ENTRY_STEP;
    use crate::sim::bounds::Extent;
    use crate::sim::sprite::Sprite;
    use crate::sim::state::tests::test_sizes;
    use glam::Vec2;

    fn start(state: &mut GameState) {
        tick(state, &TickInput::new([Command::Start]));
    }

    /// Move every carrot to the top-left corner, well away from the centred hare
    fn park_carrots(state: &mut GameState) {
        for carrot in &mut state.carrots {
            carrot.position = Vec2::ZERO;
        }
    }

    #[test]
    fn test_idle_ignores_movement() {
        let mut state = GameState::new(12345, test_sizes());
        let hare_before = state.hare.position;

        let events = tick(&mut state, &TickInput::new([Command::BeginMove(Direction::Left)]));
        assert!(events.is_empty());
        assert_eq!(state.mode, GameMode::Idle);
        assert!(!state.hare.intent.left);
        assert_eq!(state.hare.position, hare_before);
    }

    #[test]
    fn test_start_enters_running() {
        let mut state = GameState::new(12345, test_sizes());
        state.score = 70;

        let events = tick(&mut state, &TickInput::new([Command::Start]));
        assert_eq!(events, vec![GameEvent::SessionStarted]);
        assert_eq!(state.mode, GameMode::Running);
        assert_eq!(state.score, 0);
        // Sprites start moving on the next frame
        assert_eq!(state.session_ticks, 0);
    }

    #[test]
    fn test_start_ignored_while_running() {
        let mut state = GameState::new(12345, test_sizes());
        start(&mut state);
        let sessions = state.sessions_played;

        tick(&mut state, &TickInput::new([Command::Start]));
        assert_eq!(state.sessions_played, sessions);
        assert_eq!(state.mode, GameMode::Running);
    }

    #[test]
    fn test_movement_dispatched_to_hare() {
        let mut state = GameState::new(12345, test_sizes());
        start(&mut state);
        let x = state.hare.position.x;

        tick(&mut state, &TickInput::new([Command::BeginMove(Direction::Right)]));
        assert_eq!(state.hare.position.x, x + 20.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.hare.position.x, x + 40.0);
        tick(&mut state, &TickInput::new([Command::EndMove(Direction::Right)]));
        assert_eq!(state.hare.position.x, x + 40.0);
    }

    #[test]
    fn test_carrot_capture_scores_ten() {
        let mut state = GameState::new(12345, test_sizes());
        start(&mut state);
        park_carrots(&mut state);
        state.carrots[3].position = state.hare.position;

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 10);
        assert_eq!(events, vec![GameEvent::CarrotCaptured]);

        let carrot = &state.carrots[3];
        let max = state.arena.max_position(carrot.extent);
        assert!(carrot.position.x >= 0.0 && carrot.position.x <= max.x);
        assert!(carrot.position.y >= 0.0 && carrot.position.y <= max.y);
    }

    #[test]
    fn test_carrots_see_hare_before_it_moves() {
        let mut state = GameState::new(12345, test_sizes());
        start(&mut state);
        park_carrots(&mut state);
        // Just beyond the hare's right edge; the hare will step onto it this tick
        let hare = state.hare.bounds();
        state.carrots[0].position = Vec2::new(hare.max().x + 10.0, hare.position.y);

        tick(&mut state, &TickInput::new([Command::BeginMove(Direction::Right)]));
        assert_eq!(state.score, 0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_lynx_catch_ends_session() {
        let mut state = GameState::new(12345, test_sizes());
        state.top_score = 15;
        start(&mut state);
        park_carrots(&mut state);
        state.score = 40;
        state.lynxes[0].position = state.hare.position;

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.mode, GameMode::Idle);
        assert_eq!(state.top_score, 40);
        assert!(events.contains(&GameEvent::HareCaught { score: 40 }));
        assert!(events.contains(&GameEvent::NewTopScore(40)));
    }

    #[test]
    fn test_two_catches_in_one_frame_end_once() {
        let sizes = test_sizes();
        let arena = Extent::new(1400.0, 650.0);
        let mut state = GameState::with_arena(9, sizes, arena, 0, [0, 0]);
        start(&mut state);
        state.lynxes[0].position = state.hare.position;
        state.lynxes[1].position = state.hare.position;

        let events = tick(&mut state, &TickInput::default());
        let catches = events
            .iter()
            .filter(|e| matches!(e, GameEvent::HareCaught { .. }))
            .count();
        assert_eq!(catches, 1);
        assert_eq!(state.mode, GameMode::Idle);
    }

    #[test]
    fn test_exit_from_idle_stops_everything() {
        let mut state = GameState::new(12345, test_sizes());

        let events = tick(&mut state, &TickInput::new([Command::Exit, Command::Start]));
        assert_eq!(events, vec![GameEvent::ExitRequested]);
        assert!(!state.is_active());
        // Start after Exit in the same frame is never processed
        assert_eq!(state.mode, GameMode::Idle);

        let ticks = state.time_ticks;
        let events = tick(&mut state, &TickInput::new([Command::Start]));
        assert!(events.is_empty());
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.mode, GameMode::Idle);
    }

    #[test]
    fn test_exit_while_running() {
        let mut state = GameState::new(12345, test_sizes());
        start(&mut state);
        let session_ticks = state.session_ticks;

        tick(&mut state, &TickInput::new([Command::Exit]));
        assert!(!state.is_active());
        assert_eq!(state.session_ticks, session_ticks);
    }

    #[test]
    fn test_first_lynx_hunts_down_idle_hare() {
        let mut state = GameState::new(4242, test_sizes());
        start(&mut state);
        park_carrots(&mut state);

        let mut caught_at = None;
        for _ in 0..500 {
            let events = tick(&mut state, &TickInput::default());
            if events.iter().any(|e| matches!(e, GameEvent::HareCaught { .. })) {
                caught_at = Some(state.session_ticks);
                break;
            }
        }

        let ticks = caught_at.expect("lynx never reached the hare");
        // Only the undelayed lynx has left the staging point
        assert!(ticks < LYNX_ENTRY_STEP as u64);
        assert_eq!(state.mode, GameMode::Idle);
        assert!(state.lynxes[1..].iter().all(|l| l.position.y < 0.0));
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, test_sizes());
        let mut state2 = GameState::new(99999, test_sizes());

        let inputs = [
            TickInput::new([Command::Start]),
            TickInput::new([Command::BeginMove(Direction::Up)]),
            TickInput::default(),
            TickInput::new([Command::BeginMove(Direction::Left), Command::EndMove(Direction::Up)]),
            TickInput::default(),
        ];

        for _ in 0..40 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        let json1 = serde_json::to_string(&state1).unwrap();
        let json2 = serde_json::to_string(&state2).unwrap();
        assert_eq!(json1, json2);
    }
}
