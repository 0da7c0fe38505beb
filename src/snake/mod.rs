//! Grid snake: board, value types and the game engine.

pub mod board;
pub mod engine;
pub mod types;

pub use board::Board;
pub use engine::{GameEngine, DIRECTION_QUEUE_CAPACITY};
pub use types::{CellValue, Collision, Direction, Position};
