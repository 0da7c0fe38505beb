//! Snake game engine: movement, direction queue, collision detection and food.
//!
//! The [`Board`] is the single source of truth for what occupies a cell. The
//! body deque only records the order of the snake's segments, head first. Both
//! are private to [`GameEngine`] and every tick updates them together, so a
//! caller never observes one without the other.

use super::board::Board;
use super::types::{CellValue, Collision, Direction, Position};
use rand::rngs::ThreadRng;
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::VecDeque;

/// Maximum number of direction changes buffered between ticks.
pub const DIRECTION_QUEUE_CAPACITY: usize = 2;

/// Authoritative state of one snake game.
///
/// Construct one per game. There is no reset: a new engine is the only way
/// back to a running game once [`GameEngine::is_over`] is true.
#[derive(Debug, Clone)]
pub struct GameEngine<R = ThreadRng> {
    rng: R,
    board: Board,
    /// Body segments, head at the front.
    snake: VecDeque<Position>,
    direction: Direction,
    pending: VecDeque<Direction>,
    score: u32,
    collision: Option<Collision>,
    tick_count: u64,
}

impl GameEngine<ThreadRng> {
    /// Start a game on a `rows x cols` board using the thread-local RNG.
    pub fn new(rows: i16, cols: i16) -> Self {
        Self::with_rng(rows, cols, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Start a game drawing food positions from `rng`.
    ///
    /// The snake starts two segments long in the middle of the board, head
    /// above tail, moving up. Requires `rows >= 2` and `cols >= 1`.
    pub fn with_rng(rows: i16, cols: i16, rng: R) -> Self {
        debug_assert!(rows >= 2 && cols >= 1, "board too small for a snake");

        let head = Position::new((rows - 1) / 2, cols / 2);
        let tail = head.translate(Direction::Down);

        let mut engine = Self {
            rng,
            board: Board::new(rows, cols),
            snake: VecDeque::with_capacity(2),
            direction: Direction::Up,
            pending: VecDeque::with_capacity(DIRECTION_QUEUE_CAPACITY),
            score: 0,
            collision: None,
            tick_count: 0,
        };
        for pos in [head, tail] {
            engine.board.set_value(pos, CellValue::Snake);
            engine.snake.push_back(pos);
        }
        engine.place_food();
        engine
    }

    /// Queue a direction change for an upcoming tick.
    ///
    /// Dropped silently when the queue is full, when `new_dir` repeats the
    /// last queued (or current) direction, or when it would reverse it.
    /// Returns whether the change was queued.
    pub fn set_direction(&mut self, new_dir: Direction) -> bool {
        if self.is_over() || self.pending.len() >= DIRECTION_QUEUE_CAPACITY {
            return false;
        }

        let last = self.last_direction();
        if new_dir == last || new_dir == last.opposite() {
            return false;
        }

        self.pending.push_back(new_dir);
        true
    }

    /// Advance the game by one tick. No-op once the game is over.
    pub fn advance(&mut self) {
        if self.is_over() {
            return;
        }
        self.tick_count += 1;

        // Only one queued change is applied per tick
        if let Some(dir) = self.pending.pop_front() {
            self.direction = dir;
        }

        let new_head = self.head_position().translate(self.direction);

        if !self.board.contains(new_head) {
            self.collision = Some(Collision::Wall);
            return;
        }

        match self.cell_ahead(new_head) {
            CellValue::Snake => {
                self.collision = Some(Collision::SelfCollision);
            }
            CellValue::Food => {
                // Grow: keep the tail this tick
                self.push_head(new_head);
                self.score += 1;
                self.place_food();
            }
            CellValue::Empty => {
                self.pop_tail();
                self.push_head(new_head);
            }
        }
    }

    /// Place food on a uniformly random empty cell. Skipped on a full board.
    fn place_food(&mut self) {
        let spot = self.board.empty_positions().choose(&mut self.rng);
        if let Some(pos) = spot {
            self.board.set_value(pos, CellValue::Food);
        }
    }
}

impl<R> GameEngine<R> {
    /// What the head would run into at `new_head`, which must be on the board.
    ///
    /// The tail cell counts as empty: it is vacated in the same tick the head
    /// arrives, unless the snake is a single segment.
    fn cell_ahead(&self, new_head: Position) -> CellValue {
        if self.snake.len() > 1 && new_head == self.tail_position() {
            return CellValue::Empty;
        }
        self.board.value_at(new_head)
    }

    fn push_head(&mut self, pos: Position) {
        self.board.set_value(pos, CellValue::Snake);
        self.snake.push_front(pos);
    }

    fn pop_tail(&mut self) {
        if let Some(tail) = self.snake.pop_back() {
            self.board.set_value(tail, CellValue::Empty);
        }
    }

    fn last_direction(&self) -> Direction {
        self.pending.back().copied().unwrap_or(self.direction)
    }

    pub fn rows(&self) -> i16 {
        self.board.rows()
    }

    pub fn cols(&self) -> i16 {
        self.board.cols()
    }

    /// Read-only view of the occupancy grid.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Value of the cell at `pos`. Panics when `pos` is off the board.
    pub fn value_at(&self, pos: Position) -> CellValue {
        self.board.value_at(pos)
    }

    /// The body is never empty: construction places at least one segment and a
    /// tick only pops the tail right before pushing a new head.
    pub fn head_position(&self) -> Position {
        self.snake[0]
    }

    pub fn tail_position(&self) -> Position {
        self.snake[self.snake.len() - 1]
    }

    /// Body positions, head first.
    pub fn snake_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.snake.iter().copied()
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    /// Current direction of travel.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction changes waiting for upcoming ticks, oldest first.
    pub fn pending_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.pending.iter().copied()
    }

    /// Where the food currently is, if the board had room for it.
    pub fn food_position(&self) -> Option<Position> {
        self.board
            .positions()
            .find(|&pos| self.board.value_at(pos) == CellValue::Food)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.collision.is_some()
    }

    /// Why the game ended, or `None` while it is still running.
    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }

    /// Number of ticks processed while the game was running.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
impl<R: Rng> GameEngine<R> {
    /// Build an engine in an arbitrary mid-game layout. `body` is head first.
    pub(crate) fn from_layout(
        rows: i16,
        cols: i16,
        body: &[Position],
        direction: Direction,
        food: Option<Position>,
        rng: R,
    ) -> Self {
        assert!(!body.is_empty(), "snake needs at least one segment");
        let mut board = Board::new(rows, cols);
        for &pos in body {
            board.set_value(pos, CellValue::Snake);
        }
        if let Some(pos) = food {
            board.set_value(pos, CellValue::Food);
        }
        Self {
            rng,
            board,
            snake: body.iter().copied().collect(),
            direction,
            pending: VecDeque::new(),
            score: 0,
            collision: None,
            tick_count: 0,
        }
    }
}
