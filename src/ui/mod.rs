//! Terminal rendering for the snake session.

pub mod game_common;
pub mod snake_scene;

use crate::session::Session;
use ratatui::Frame;

/// Draw one frame of the session across the whole terminal.
pub fn draw_ui<R>(frame: &mut Frame, session: &Session<R>) {
    let area = frame.size();
    snake_scene::render_snake_scene(frame, area, session);
}
