//! Whole sessions played through the public simulation API

use glam::Vec2;
use hare_chase::sim::{
    Command, Direction, Extent, GameEvent, GameMode, GameState, SpriteSizes, TickInput, tick,
};

fn sizes() -> SpriteSizes {
    SpriteSizes {
        start_background: Extent::new(1400.0, 650.0),
        background: Extent::new(1400.0, 650.0),
        carrot: Extent::new(40.0, 50.0),
        hare: Extent::new(64.0, 48.0),
        lynx: Extent::new(60.0, 60.0),
    }
}

/// Start a session and move every carrot into the top-left corner
fn start_with_parked_carrots(state: &mut GameState) {
    let events = tick(state, &TickInput::new([Command::Start]));
    assert_eq!(events, vec![GameEvent::SessionStarted]);
    assert_eq!(state.mode, GameMode::Running);
    assert_eq!(state.score, 0);

    for carrot in &mut state.carrots {
        carrot.position = Vec2::ZERO;
    }
}

/// Tick with no input until a lynx catches the hare, returning that tick's events
fn run_until_caught(state: &mut GameState) -> Vec<GameEvent> {
    for _ in 0..5000 {
        let events = tick(state, &TickInput::default());
        if events.iter().any(|e| matches!(e, GameEvent::HareCaught { .. })) {
            return events;
        }
        assert_eq!(state.mode, GameMode::Running);
    }
    panic!("hare was never caught");
}

#[test]
fn test_two_sessions_keep_the_best_score() {
    let mut state = GameState::new(2024, sizes());
    assert_eq!(state.mode, GameMode::Idle);
    assert_eq!(state.top_score, 0);

    // Arrow keys are ignored on the title screen
    tick(&mut state, &TickInput::new([Command::BeginMove(Direction::Right)]));
    assert_eq!(state.mode, GameMode::Idle);

    // First session: steer right onto a carrot, then stand still
    start_with_parked_carrots(&mut state);
    let start = state.hare.position;
    state.carrots[0].position = start + Vec2::new(100.0, 0.0);

    tick(&mut state, &TickInput::new([Command::BeginMove(Direction::Right)]));
    for _ in 0..10 {
        if state.score > 0 {
            break;
        }
        tick(&mut state, &TickInput::default());
    }
    tick(&mut state, &TickInput::new([Command::EndMove(Direction::Right)]));
    assert!(state.hare.position.x > start.x);
    assert_eq!(state.hare.position.y, start.y);
    assert!(state.score >= 10);

    let previous_top = state.top_score;
    let events = run_until_caught(&mut state);
    let first_score = state.score;
    assert_eq!(state.mode, GameMode::Idle);
    assert_eq!(state.top_score, previous_top.max(first_score));
    assert!(events.contains(&GameEvent::HareCaught { score: first_score }));
    assert!(events.contains(&GameEvent::NewTopScore(first_score)));

    // Second session: no carrots reachable, so a lower score
    start_with_parked_carrots(&mut state);
    assert_eq!(state.hare.position, start);

    let events = run_until_caught(&mut state);
    assert_eq!(state.mode, GameMode::Idle);
    assert_eq!(state.score, 0);
    assert_eq!(state.top_score, first_score);
    assert!(events.contains(&GameEvent::HareCaught { score: 0 }));
    assert!(!events.iter().any(|e| matches!(e, GameEvent::NewTopScore(_))));
    assert_eq!(state.sessions_played, 2);

    // Escape from the title screen ends the game
    let events = tick(&mut state, &TickInput::new([Command::Exit]));
    assert_eq!(events, vec![GameEvent::ExitRequested]);
    assert!(!state.is_active());
}

#[test]
fn test_same_seed_same_sessions() {
    let play = |seed| {
        let mut state = GameState::new(seed, sizes());
        tick(&mut state, &TickInput::new([Command::Start]));
        let events = run_until_caught(&mut state);
        (state.score, state.session_ticks, state.top_score, events)
    };

    assert_eq!(play(77), play(77));
}
