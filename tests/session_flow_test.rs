//! Integration test: a full session from the start prompt through a game
//! over and into a second game.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use snake::{Direction, GameConfig, InputResult, Phase, Session, SessionInput};

fn config() -> GameConfig {
    GameConfig {
        rows: 10,
        cols: 10,
        tick_interval_ms: 200,
        countdown_from: 3,
        countdown_step_ms: 500,
        reveal_delay_ms: 50,
        game_over_pause_ms: 1000,
    }
}

fn session() -> Session<ChaCha8Rng> {
    Session::with_rng(config(), ChaCha8Rng::seed_from_u64(2024))
}

/// Feed time in frame-sized steps until `done` holds or the budget runs out.
fn run_until(
    session: &mut Session<ChaCha8Rng>,
    budget_ms: u64,
    done: impl Fn(&Session<ChaCha8Rng>) -> bool,
) -> bool {
    let mut elapsed = 0;
    while elapsed < budget_ms {
        if done(session) {
            return true;
        }
        session.update(16);
        elapsed += 16;
    }
    done(session)
}

#[test]
fn test_full_cycle() {
    let mut s = session();
    assert_eq!(s.phase(), Phase::Waiting);

    assert_eq!(s.handle_input(SessionInput::Other), InputResult::Continue);
    assert_eq!(s.phase(), Phase::Countdown { remaining: 3 });

    assert!(run_until(&mut s, 1_600, |s| s.phase() == Phase::Playing));
    assert_eq!(s.engine().tick_count(), 0);

    // Nobody steers: the snake runs up into the wall
    assert!(run_until(&mut s, 5_000, |s| s.engine().is_over()));
    assert!(matches!(s.phase(), Phase::Revealing { .. }));
    assert_eq!(s.games_played(), 1);

    assert!(run_until(&mut s, 3_000, |s| s.phase() == Phase::Waiting));
    assert!(s.engine().is_over(), "dead snake stays until the next game");
    assert_eq!(s.dead_segments(), s.engine().snake_len());

    s.handle_input(SessionInput::Turn(Direction::Down));
    assert_eq!(s.phase(), Phase::Countdown { remaining: 3 });
    assert!(!s.engine().is_over());
    assert_eq!(s.engine().score(), 0);
}

#[test]
fn test_steering_through_session() {
    let mut s = session();
    s.handle_input(SessionInput::Other);
    assert!(run_until(&mut s, 1_600, |s| s.phase() == Phase::Playing));

    let start = s.engine().head_position();
    s.handle_input(SessionInput::Turn(Direction::Left));
    s.handle_input(SessionInput::Turn(Direction::Up));
    assert!(run_until(&mut s, 1_000, |s| s.engine().tick_count() == 2));

    assert_eq!(s.engine().direction(), Direction::Up);
    assert_eq!(s.engine().head_position().col, start.col - 1);
    assert_eq!(s.engine().head_position().row, start.row - 1);
}

#[test]
fn test_quick_u_turn_through_session_is_dropped() {
    let mut s = session();
    s.handle_input(SessionInput::Other);
    assert!(run_until(&mut s, 1_600, |s| s.phase() == Phase::Playing));

    // Up -> Left -> Down within one tick: Down reverses the heading
    let start = s.engine().head_position();
    s.handle_input(SessionInput::Turn(Direction::Left));
    s.handle_input(SessionInput::Turn(Direction::Down));
    assert!(run_until(&mut s, 1_000, |s| s.engine().tick_count() == 2));

    assert!(!s.engine().is_over());
    assert_eq!(s.engine().direction(), Direction::Left);
    assert_eq!(s.engine().head_position().row, start.row);
    assert_eq!(s.engine().head_position().col, start.col - 2);
}

#[test]
fn test_reversal_through_session_is_dropped() {
    let mut s = session();
    s.handle_input(SessionInput::Other);
    assert!(run_until(&mut s, 1_600, |s| s.phase() == Phase::Playing));

    s.handle_input(SessionInput::Turn(Direction::Down));
    assert_eq!(s.engine().pending_directions().count(), 0);
}

#[test]
fn test_quit_from_anywhere() {
    let mut s = session();
    assert_eq!(s.handle_input(SessionInput::Quit), InputResult::Quit);
    s.handle_input(SessionInput::Other);
    assert_eq!(s.handle_input(SessionInput::Quit), InputResult::Quit);
}
