//! Snake board rendering.
//!
//! Each board cell is two terminal columns wide so square boards look square.
//! The head is drawn as an arrow pointing where the snake is going; after a
//! collision the body is revealed head first with dead imagery.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_modal, render_status_bar,
    render_too_small,
};
use crate::session::{Phase, Session};
use crate::snake::{CellValue, Collision, Direction, GameEngine, Position};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Border characters ────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘

const CELL_WIDTH: u16 = 2;
const INFO_PANEL_WIDTH: u16 = 22;

// ── Colors ───────────────────────────────────────────────────────────
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);
const BODY_COLOR: Color = Color::Rgb(50, 220, 50);
const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const FOOD_COLOR: Color = Color::Rgb(255, 80, 40);
const DEAD_COLOR: Color = Color::Rgb(110, 110, 110);
const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

/// What a single board cell looks like this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    Empty,
    Food,
    Body,
    Head(Direction),
    DeadHead,
    DeadBody,
}

impl Glyph {
    fn text(self) -> &'static str {
        match self {
            Glyph::Empty => "  ",
            Glyph::Food => "● ",
            Glyph::Body => "██",
            Glyph::Head(Direction::Up) => "^^",
            Glyph::Head(Direction::Down) => "vv",
            Glyph::Head(Direction::Left) => "<<",
            Glyph::Head(Direction::Right) => ">>",
            Glyph::DeadHead => "XX",
            Glyph::DeadBody => "▒▒",
        }
    }

    fn style(self) -> Style {
        let base = Style::default().bg(EMPTY_BG);
        match self {
            Glyph::Empty => base,
            Glyph::Food => base.fg(FOOD_COLOR),
            Glyph::Body => base.fg(BODY_COLOR),
            Glyph::Head(_) => Style::default()
                .fg(Color::Black)
                .bg(HEAD_COLOR)
                .add_modifier(Modifier::BOLD),
            Glyph::DeadHead => Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(140, 30, 30))
                .add_modifier(Modifier::BOLD),
            Glyph::DeadBody => base.fg(DEAD_COLOR),
        }
    }
}

/// Render the whole snake screen: board, overlay, status bar and info panel.
pub fn render_snake_scene<R>(frame: &mut Frame, area: Rect, session: &Session<R>) {
    let engine = session.engine();
    let field_w = engine.cols() as u16 * CELL_WIDTH + 2;
    let field_h = engine.rows() as u16 + 2;

    // Outer border, info panel and status bar around the field
    let needed_w = field_w + INFO_PANEL_WIDTH + 2;
    let needed_h = field_h + 4;
    if area.width < needed_w || area.height < needed_h {
        render_too_small(frame, area, needed_w, needed_h);
        return;
    }

    let layout = create_game_layout(frame, area, " Snake ", Color::LightGreen, INFO_PANEL_WIDTH);

    let field = Rect::new(
        layout.content.x + (layout.content.width - field_w) / 2,
        layout.content.y,
        field_w,
        field_h,
    );
    render_play_field(frame, field, engine, session.dead_segments());
    render_overlay(frame, field, session);
    render_status_bar_content(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session);
}

/// Build the glyph grid: board contents, then the head, then dead segments.
fn build_glyphs<R>(engine: &GameEngine<R>, dead_segments: usize) -> Vec<Vec<Glyph>> {
    let rows = engine.rows() as usize;
    let cols = engine.cols() as usize;
    let mut glyphs = vec![vec![Glyph::Empty; cols]; rows];

    for pos in engine.board().positions() {
        glyphs[pos.row as usize][pos.col as usize] = match engine.value_at(pos) {
            CellValue::Empty => Glyph::Empty,
            CellValue::Food => Glyph::Food,
            CellValue::Snake => Glyph::Body,
        };
    }

    let head = engine.head_position();
    glyphs[head.row as usize][head.col as usize] = Glyph::Head(engine.direction());

    for (i, Position { row, col }) in engine.snake_positions().take(dead_segments).enumerate() {
        glyphs[row as usize][col as usize] = if i == 0 {
            Glyph::DeadHead
        } else {
            Glyph::DeadBody
        };
    }

    glyphs
}

/// Render the bordered board with the score in the top border.
fn render_play_field<R>(frame: &mut Frame, area: Rect, engine: &GameEngine<R>, dead: usize) {
    let inner_w = area.width.saturating_sub(2) as usize;
    let border = Style::default().fg(BORDER_COLOR);

    // ── Top border with score ───────────────────────────────────
    let score_label = format!(" SCORE {} ", engine.score());
    let pad_after = inner_w.saturating_sub(score_label.len() + 1);
    let top = Line::from(vec![
        Span::styled(format!("{BORDER_TL}{BORDER_H}"), border),
        Span::styled(
            score_label,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{}{BORDER_TR}",
                std::iter::repeat(BORDER_H).take(pad_after).collect::<String>()
            ),
            border,
        ),
    ]);
    frame.render_widget(Paragraph::new(top), Rect { height: 1, ..area });

    // ── Board rows, batching runs of identical cells ────────────
    for (r, row) in build_glyphs(engine, dead).iter().enumerate() {
        let mut spans = vec![Span::styled(BORDER_V.to_string(), border)];

        let mut run_glyph = row[0];
        let mut run_text = String::new();
        for &glyph in row {
            if glyph != run_glyph {
                spans.push(Span::styled(
                    std::mem::take(&mut run_text),
                    run_glyph.style(),
                ));
                run_glyph = glyph;
            }
            run_text.push_str(glyph.text());
        }
        spans.push(Span::styled(run_text, run_glyph.style()));
        spans.push(Span::styled(BORDER_V.to_string(), border));

        let row_area = Rect::new(area.x, area.y + 1 + r as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }

    // ── Bottom border ───────────────────────────────────────────
    let bottom: String = std::iter::once(BORDER_BL)
        .chain(std::iter::repeat(BORDER_H).take(inner_w))
        .chain(std::iter::once(BORDER_BR))
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(bottom, border))),
        Rect::new(area.x, area.y + area.height - 1, area.width, 1),
    );
}

/// Countdown number or start prompt over the board.
fn render_overlay<R>(frame: &mut Frame, area: Rect, session: &Session<R>) {
    let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

    match session.phase() {
        Phase::Countdown { remaining } => {
            let lines = vec![Line::from(Span::styled(
                format!(" {} ", remaining),
                bold(Color::Yellow),
            ))];
            render_modal(frame, area, lines, Color::Yellow);
        }
        Phase::Waiting => {
            let engine = session.engine();
            let mut lines = Vec::new();
            if engine.is_over() {
                lines.push(Line::from(Span::styled("GAME OVER", bold(Color::Red))));
                lines.push(Line::from(Span::styled(
                    format!("SCORE {}", engine.score()),
                    Style::default().fg(Color::White),
                )));
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                "PRESS ANY KEY TO START",
                bold(Color::White),
            )));
            render_modal(frame, area, lines, Color::LightGreen);
        }
        Phase::Playing | Phase::Revealing { .. } | Phase::GameOver => {}
    }
}

fn render_status_bar_content<R>(frame: &mut Frame, area: Rect, session: &Session<R>) {
    match session.phase() {
        Phase::Waiting => render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightGreen,
            &[("[Any key]", "Start"), ("[Esc]", "Quit")],
        ),
        Phase::Countdown { .. } => render_status_bar(
            frame,
            area,
            "Get ready...",
            Color::Yellow,
            &[("[Esc]", "Quit")],
        ),
        Phase::Playing => render_status_bar(
            frame,
            area,
            "Slither!",
            Color::Green,
            &[("[WASD/Arrows]", "Move"), ("[Esc]", "Quit")],
        ),
        Phase::Revealing { .. } | Phase::GameOver => {
            let message = match session.engine().collision() {
                Some(Collision::Wall) => "Hit the wall!",
                Some(Collision::SelfCollision) => "Bit yourself!",
                None => "Game over",
            };
            render_status_bar(frame, area, message, Color::Red, &[("[Esc]", "Quit")]);
        }
    }
}

fn render_info_panel<R>(frame: &mut Frame, area: Rect, session: &Session<R>) {
    let inner = render_info_panel_frame(frame, area);
    let engine = session.engine();
    let config = session.config();
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                engine.score().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best: ", label),
            Span::styled(session.best_score().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Games: ", label),
            Span::styled(session.games_played().to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Grid: ", label),
            Span::styled(format!("{}x{}", engine.rows(), engine.cols()), value),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(format!("{}ms", config.tick_interval_ms), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        legend_line(Glyph::Head(Direction::Right), "Head"),
        legend_line(Glyph::Body, "Body"),
        legend_line(Glyph::Food, "Food"),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn legend_line(glyph: Glyph, name: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw(" "),
        Span::styled(glyph.text(), glyph.style()),
        Span::raw(" "),
        Span::styled(name, Style::default().fg(Color::DarkGray)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::session::SessionInput;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{backend::TestBackend, Terminal};

    fn session(countdown_from: u8) -> Session<ChaCha8Rng> {
        let config = GameConfig {
            tick_interval_ms: 100,
            countdown_from,
            ..GameConfig::default()
        };
        Session::with_rng(config, ChaCha8Rng::seed_from_u64(3))
    }

    fn render(session: &Session<ChaCha8Rng>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_snake_scene(f, f.size(), session))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_waiting_shows_prompt_and_score() {
        let text = render(&session(3), 80, 30);
        assert!(text.contains("PRESS ANY KEY TO START"));
        assert!(text.contains("SCORE 0"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn test_countdown_hides_prompt() {
        let mut s = session(3);
        s.handle_input(SessionInput::Other);
        let text = render(&s, 80, 30);
        assert!(!text.contains("PRESS ANY KEY TO START"));
        assert!(text.contains("Get ready..."));
    }

    #[test]
    fn test_head_points_in_direction_of_travel() {
        let mut s = session(0);
        s.handle_input(SessionInput::Other);
        assert!(render(&s, 80, 30).contains("^^"));

        s.handle_input(SessionInput::Turn(Direction::Left));
        s.update(100);
        let text = render(&s, 80, 30);
        assert!(text.contains("<<"));
        assert!(!text.contains("^^"));
    }

    #[test]
    fn test_dead_snake_revealed_then_prompt() {
        let mut s = session(0);
        s.handle_input(SessionInput::Other);
        // Straight up from row 7 hits the wall on the 8th tick
        s.update(800);
        assert!(matches!(s.phase(), Phase::Revealing { shown: 1 }));

        let text = render(&s, 80, 30);
        assert!(text.contains("XX"));
        assert!(text.contains("Hit the wall!"));

        for _ in 0..5 {
            s.update(1000);
        }
        assert_eq!(s.phase(), Phase::Waiting);
        let text = render(&s, 80, 30);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("PRESS ANY KEY TO START"));
        assert!(text.contains("Games: 1"));
    }

    #[test]
    fn test_too_small_terminal() {
        let text = render(&session(3), 30, 10);
        assert!(text.contains("Terminal too small"));
        assert!(!text.contains("SCORE"));
    }

    #[test]
    fn test_glyphs_mark_every_segment() {
        let s = session(3);
        let glyphs = build_glyphs(s.engine(), 0);
        let head = s.engine().head_position();
        assert_eq!(
            glyphs[head.row as usize][head.col as usize],
            Glyph::Head(Direction::Up)
        );
        let tail = s.engine().tail_position();
        assert_eq!(glyphs[tail.row as usize][tail.col as usize], Glyph::Body);

        let dead = build_glyphs(s.engine(), 2);
        assert_eq!(dead[head.row as usize][head.col as usize], Glyph::DeadHead);
        assert_eq!(dead[tail.row as usize][tail.col as usize], Glyph::DeadBody);
    }

    #[test]
    fn test_every_glyph_is_two_columns() {
        for glyph in [
            Glyph::Empty,
            Glyph::Food,
            Glyph::Body,
            Glyph::Head(Direction::Down),
            Glyph::DeadHead,
            Glyph::DeadBody,
        ] {
            assert_eq!(Span::raw(glyph.text()).width(), CELL_WIDTH as usize);
        }
    }

    #[test]
    fn test_dead_imagery_text() {
        assert_eq!(Glyph::DeadHead.text(), "XX");
        assert_eq!(Glyph::DeadBody.text(), "▒▒");
    }
}
