//! Snake - grid snake game for the terminal.
//!
//! The engine in [`snake`] is pure and synchronous; [`session`] drives it on a
//! fixed tick, and `ui` and [`input`] are the terminal adapters around it.

pub mod config;
pub mod constants;
pub mod input;
pub mod session;
pub mod snake;
pub mod ui;

pub use config::GameConfig;
pub use session::{InputResult, Phase, Session, SessionInput};
pub use snake::{Board, CellValue, Collision, Direction, GameEngine, Position};
