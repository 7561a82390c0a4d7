//! Terminal Pong client.
//!
//! One synchronous frame loop: drain key events, queue the player's paddle
//! direction, step the simulation, map the frame's events to sounds, draw.
//! The match-over replay menu is just another phase of the same loop.

mod input;
mod render;

use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use audio::{AudioEngine, SoundEffect};
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, terminal,
};
use game_core::{Config, GameSession, MatchPhase};

use input::MenuAction;
use render::Viewport;

/// Frame budget for the 60 Hz loop.
const FRAME: Duration = Duration::from_micros(16_667);

/// Terminals deliver key repeats, not key-up events; the last direction is
/// held across the repeat gap so the paddle does not stutter.
const KEY_HOLD: Duration = Duration::from_millis(180);

/// Puts the terminal into raw alternate-screen mode and restores it on any
/// exit path, including panics unwinding through `main`.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::new();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(12345);
    let mut session = GameSession::new(config, seed);
    let sound = AudioEngine::new();
    if !sound.is_enabled() {
        log::info!("audio disabled, continuing without sound");
    }

    let _guard = TerminalGuard::enter()?;
    let (cols, rows) = terminal::size()?;
    let mut view = Viewport::new(
        cols,
        rows,
        session.config.arena_width,
        session.config.arena_height,
    );

    let mut stdout = io::stdout();
    let mut last_frame = Instant::now();
    let mut held_dir: i8 = 0;
    let mut held_at = Instant::now();

    loop {
        // Drain input events until the frame budget elapses; poll doubles
        // as the frame sleep.
        while let Some(remaining) = FRAME.checked_sub(last_frame.elapsed()) {
            if !event::poll(remaining)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    match input::menu_action_for_key(key.code) {
                        Some(MenuAction::Quit) => return Ok(()),
                        Some(MenuAction::Replay(best_of)) => {
                            if session.phase() == MatchPhase::MatchOver {
                                session.restart(best_of);
                            }
                        }
                        None => {}
                    }
                    if let Some(dir) = input::paddle_dir_for_key(key.code) {
                        held_dir = dir;
                        held_at = Instant::now();
                    }
                }
                Event::Resize(new_cols, new_rows) => {
                    view = Viewport::new(
                        new_cols,
                        new_rows,
                        session.config.arena_width,
                        session.config.arena_height,
                    );
                }
                _ => {}
            }
        }

        let dt = last_frame.elapsed().as_secs_f32();
        last_frame = Instant::now();

        let dir = if held_at.elapsed() <= KEY_HOLD {
            held_dir
        } else {
            0
        };
        session.queue_player_input(dir);
        session.step(dt);

        if session.events.ball_hit_paddle {
            sound.play(SoundEffect::PaddleHit);
        }
        if session.events.ball_hit_wall {
            sound.play(SoundEffect::WallBounce);
        }
        if session.events.any_score() {
            sound.play(SoundEffect::Score);
        }

        render::draw(&mut stdout, &session, &view)?;
    }
}
