//! Keyboard input mapping

use crossterm::event::KeyCode;
use game_core::BestOf;

/// What a key means outside of paddle movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Start the next match at the chosen length (match-over menu)
    Replay(BestOf),
    /// Leave the game
    Quit,
}

/// Paddle direction for a pressed key: -1 = up, 1 = down.
pub fn paddle_dir_for_key(key: KeyCode) -> Option<i8> {
    match key {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(-1),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(1),
        _ => None,
    }
}

/// Match-over menu selections and the global quit keys.
pub fn menu_action_for_key(key: KeyCode) -> Option<MenuAction> {
    match key {
        KeyCode::Char('3') => Some(MenuAction::Replay(BestOf::Three)),
        KeyCode::Char('5') => Some(MenuAction::Replay(BestOf::Five)),
        KeyCode::Char('7') => Some(MenuAction::Replay(BestOf::Seven)),
        KeyCode::Esc | KeyCode::Char('q') => Some(MenuAction::Quit),
        _ => None,
    }
}
