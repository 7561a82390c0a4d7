//! Cell-grid rendering of the arena.
//!
//! Arena units are mapped straight onto the terminal grid; everything is
//! queued and flushed once per frame.

use std::io::{self, Write};

use crossterm::{
    cursor,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use game_core::{Aabb, GameSession, MatchPhase, PaddleSide};

const PADDLE_CELL: &str = "█";
const BALL_CELL: &str = "●";
const NET_CELL: &str = "·";

/// Maps arena units onto the terminal cell grid.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, arena_width: f32, arena_height: f32) -> Self {
        Self {
            cols,
            rows,
            scale_x: cols as f32 / arena_width,
            scale_y: rows as f32 / arena_height,
        }
    }

    fn col(&self, x: f32) -> u16 {
        ((x * self.scale_x) as u16).min(self.cols.saturating_sub(1))
    }

    fn row(&self, y: f32) -> u16 {
        ((y * self.scale_y) as u16).min(self.rows.saturating_sub(1))
    }
}

/// Draw one frame of the session.
pub fn draw(out: &mut impl Write, session: &GameSession, view: &Viewport) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    draw_net(out, session, view)?;
    draw_scores(out, session, view)?;

    if let Some(rect) = session.paddle_rect(PaddleSide::Player) {
        draw_paddle(out, view, &rect)?;
    }
    if let Some(rect) = session.paddle_rect(PaddleSide::Ai) {
        draw_paddle(out, view, &rect)?;
    }
    if let Some(rect) = session.ball_rect() {
        let cx = (rect.min.x + rect.max.x) / 2.0;
        let cy = (rect.min.y + rect.max.y) / 2.0;
        queue!(
            out,
            cursor::MoveTo(view.col(cx), view.row(cy)),
            Print(BALL_CELL)
        )?;
    }

    if session.phase() == MatchPhase::MatchOver {
        draw_match_over(out, session, view)?;
    }

    out.flush()
}

fn draw_net(out: &mut impl Write, session: &GameSession, view: &Viewport) -> io::Result<()> {
    let col = view.col(session.arena.width / 2.0);
    queue!(out, SetForegroundColor(Color::DarkGrey))?;
    for row in (0..view.rows).step_by(2) {
        queue!(out, cursor::MoveTo(col, row), Print(NET_CELL))?;
    }
    queue!(out, ResetColor)
}

fn draw_scores(out: &mut impl Write, session: &GameSession, view: &Viewport) -> io::Result<()> {
    let (player, ai) = session.scores();
    queue!(
        out,
        cursor::MoveTo(view.cols / 4, 1),
        Print(player.to_string()),
        cursor::MoveTo(view.cols * 3 / 4, 1),
        Print(ai.to_string())
    )
}

fn draw_paddle(out: &mut impl Write, view: &Viewport, rect: &Aabb) -> io::Result<()> {
    let col = view.col((rect.min.x + rect.max.x) / 2.0);
    let top = view.row(rect.min.y);
    let bottom = view.row(rect.max.y - 1.0);
    for row in top..=bottom {
        queue!(out, cursor::MoveTo(col, row), Print(PADDLE_CELL))?;
    }
    Ok(())
}

fn draw_match_over(
    out: &mut impl Write,
    session: &GameSession,
    view: &Viewport,
) -> io::Result<()> {
    let banner = match session.winner() {
        Some(PaddleSide::Player) => "Player wins!",
        Some(PaddleSide::Ai) => "AI wins!",
        None => "Match over",
    };
    let menu = "[3] best of 3   [5] best of 5   [7] best of 7";
    let hint = "Esc or q to quit";

    let mid = view.rows / 2;
    print_centered(out, view, mid.saturating_sub(2), banner)?;
    print_centered(out, view, mid, menu)?;
    print_centered(out, view, mid + 1, hint)
}

fn print_centered(
    out: &mut impl Write,
    view: &Viewport,
    row: u16,
    text: &str,
) -> io::Result<()> {
    let col = (view.cols.saturating_sub(text.chars().count() as u16)) / 2;
    queue!(out, cursor::MoveTo(col, row), Print(text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Config;

    #[test]
    fn test_viewport_maps_arena_corners_to_grid_corners() {
        let view = Viewport::new(80, 24, 800.0, 400.0);
        assert_eq!(view.col(0.0), 0);
        assert_eq!(view.row(0.0), 0);
        assert_eq!(view.col(800.0), 79, "Right edge clamps to the last column");
        assert_eq!(view.row(400.0), 23, "Bottom edge clamps to the last row");
    }

    #[test]
    fn test_draw_writes_without_error() {
        let session = GameSession::new(Config::new(), 1);
        let view = Viewport::new(80, 24, 800.0, 400.0);
        let mut buffer = Vec::new();

        draw(&mut buffer, &session, &view).expect("drawing into a buffer");
        assert!(!buffer.is_empty());
    }
}
