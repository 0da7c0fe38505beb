//! Play session: drives the engine on a fixed tick and sequences the
//! start prompt, countdown, game and game-over reveal.
//!
//! Time is fed in by the frame loop through [`Session::update`]; nothing here
//! reads a clock, so the whole flow is deterministic under test.

use crate::config::GameConfig;
use crate::constants::MAX_FRAME_DT_MS;
use crate::snake::{Direction, GameEngine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    Turn(Direction),
    Quit,
    Other, // Any other key (starts a game from the prompt)
}

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Where the session is in its start / play / game-over cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start prompt is up; any key begins a round.
    Waiting,
    /// Pre-game countdown, showing `remaining`.
    Countdown { remaining: u8 },
    /// The engine advances once per tick interval.
    Playing,
    /// The first `shown` segments of the dead snake are drawn, head first.
    Revealing { shown: usize },
    /// Whole dead snake shown; pausing before the prompt returns.
    GameOver,
}

/// Owns the single live [`GameEngine`] and everything timed around it.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    config: GameConfig,
    rng: R,
    engine: GameEngine<R>,
    phase: Phase,
    /// Time banked toward the current phase's next step (milliseconds).
    accumulated_ms: u64,
    games_played: u32,
    best_score: u32,
}

impl Session<StdRng> {
    /// Session with an entropy-seeded RNG.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Session whose food placement is reproducible from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + SeedableRng> Session<R> {
    /// Each engine gets its own RNG seeded from `rng`.
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let engine = GameEngine::with_rng(config.rows, config.cols, R::seed_from_u64(rng.gen()));
        Self {
            config,
            rng,
            engine,
            phase: Phase::Waiting,
            accumulated_ms: 0,
            games_played: 0,
            best_score: 0,
        }
    }

    /// Process one input event.
    pub fn handle_input(&mut self, input: SessionInput) -> InputResult {
        if input == SessionInput::Quit {
            return InputResult::Quit;
        }

        match self.phase {
            Phase::Waiting => self.start_round(),
            Phase::Playing => {
                // A press reversing the current heading is dropped even when
                // another turn is already queued
                if let SessionInput::Turn(dir) = input {
                    if dir != self.engine.direction().opposite() {
                        self.engine.set_direction(dir);
                    }
                }
            }
            // Keys are swallowed while the countdown or reveal is running
            Phase::Countdown { .. } | Phase::Revealing { .. } | Phase::GameOver => {}
        }
        InputResult::Continue
    }

    /// Advance session time by `dt_ms`. Returns true if anything visible changed.
    pub fn update(&mut self, dt_ms: u64) -> bool {
        if self.phase == Phase::Waiting {
            return false;
        }

        // Clamp so a suspended process doesn't replay a burst of ticks
        self.accumulated_ms += dt_ms.min(MAX_FRAME_DT_MS);

        let mut changed = false;
        while let Some(interval) = self.step_interval() {
            if self.accumulated_ms < interval {
                break;
            }
            self.accumulated_ms -= interval;
            self.step();
            changed = true;
        }
        changed
    }

    fn start_round(&mut self) {
        if self.engine.is_over() {
            let rng = R::seed_from_u64(self.rng.gen());
            self.engine = GameEngine::with_rng(self.config.rows, self.config.cols, rng);
        }
        self.accumulated_ms = 0;
        self.phase = match self.config.countdown_from {
            0 => Phase::Playing,
            n => Phase::Countdown { remaining: n },
        };
    }

    /// Length of the current phase's step, or `None` when time doesn't matter.
    fn step_interval(&self) -> Option<u64> {
        match self.phase {
            Phase::Waiting => None,
            Phase::Countdown { .. } => Some(self.config.countdown_step_ms),
            Phase::Playing => Some(self.config.tick_interval_ms),
            Phase::Revealing { .. } => Some(self.config.reveal_delay_ms),
            Phase::GameOver => Some(self.config.game_over_pause_ms),
        }
    }

    fn step(&mut self) {
        self.phase = match self.phase {
            Phase::Countdown { remaining } if remaining > 1 => Phase::Countdown {
                remaining: remaining - 1,
            },
            Phase::Countdown { .. } => Phase::Playing,
            Phase::Playing => {
                self.engine.advance();
                if self.engine.is_over() {
                    self.games_played += 1;
                    self.best_score = self.best_score.max(self.engine.score());
                    Phase::Revealing { shown: 1 }
                } else {
                    Phase::Playing
                }
            }
            Phase::Revealing { shown } if shown < self.engine.snake_len() => Phase::Revealing {
                shown: shown + 1,
            },
            Phase::Revealing { .. } => Phase::GameOver,
            Phase::GameOver | Phase::Waiting => {
                self.accumulated_ms = 0;
                Phase::Waiting
            }
        };
    }
}

impl<R> Session<R> {
    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Games finished since the program started.
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Best score this run. Kept in memory only.
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// How many segments (head first) should be drawn as dead.
    pub fn dead_segments(&self) -> usize {
        match self.phase {
            Phase::Revealing { shown } => shown,
            Phase::GameOver | Phase::Waiting if self.engine.is_over() => self.engine.snake_len(),
            _ => 0,
        }
    }
}
