//! Application state for the TUI.

use crossterm::event::KeyCode;
use tictactoe_rewind::{GameState, Position, SortOrder};
use tracing::warn;

/// Which pane owns the navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move the history selection.
    History,
}

/// TUI application state: the game plus cursor, selection, and status.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    /// Selected history entry, in insertion order.
    selected: usize,
    focus: Focus,
    message: Option<String>,
}

impl App {
    /// Creates the app with a fresh game.
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            game: GameState::with_sort_order(sort_order),
            cursor: Position::Center,
            selected: 0,
            focus: Focus::Board,
            message: None,
        }
    }

    /// Returns the game state for rendering.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Returns the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the selected history entry (insertion order).
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the current status message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles a key press. Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        self.message = None;
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
            }
            KeyCode::Char('s') => self.game.toggle_sort_order(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.place(pos);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => self.navigate(key),
            KeyCode::Enter => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::History => self.jump(),
            },
            KeyCode::Char('g') => self.jump(),
            _ => {}
        }
        false
    }

    fn place(&mut self, pos: Position) {
        match self.game.apply_move(pos) {
            Ok(()) => self.selected = self.game.step(),
            Err(err) => {
                warn!(%err, "Move rejected");
                self.message = Some(err.to_string());
            }
        }
    }

    fn jump(&mut self) {
        if let Err(err) = self.game.jump_to(self.selected) {
            warn!(%err, "Jump rejected");
            self.message = Some(err.to_string());
        }
    }

    fn navigate(&mut self, key: KeyCode) {
        match self.focus {
            Focus::Board => self.cursor = moved(self.cursor, key),
            Focus::History => {
                // Navigate in display order so Up always means "toward the
                // top of the rendered list".
                let order: Vec<usize> =
                    self.game.ordered_moves().iter().map(|(n, _)| *n).collect();
                if let Some(at) = order.iter().position(|n| *n == self.selected) {
                    let at = match key {
                        KeyCode::Up => at.saturating_sub(1),
                        KeyCode::Down => (at + 1).min(order.len() - 1),
                        _ => at,
                    };
                    self.selected = order[at];
                }
            }
        }
    }
}

/// Moves the board cursor one cell, clamped at the edges.
fn moved(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_rewind::{Player, Verdict};

    #[test]
    fn test_digit_places_a_mark() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().step(), 1);
        assert_eq!(app.game().to_move(), Player::O);
        assert!(app.message().is_none());
    }

    #[test]
    fn test_rejected_move_sets_message() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().step(), 1);
        assert!(app.message().is_some());
    }

    #[test]
    fn test_history_selection_and_jump() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected(), 1);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().step(), 1);
        assert_eq!(app.game().history().len(), 3);
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut app = App::new(SortOrder::Ascending);
        for _ in 0..4 {
            app.handle_key(KeyCode::Left);
        }
        for _ in 0..4 {
            app.handle_key(KeyCode::Up);
        }
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_full_game_ends_decided() {
        let mut app = App::new(SortOrder::Ascending);
        // X: 1, 2, 3 (top row); O: 4, 5.
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert!(app.game().verdict().is_decided());
        assert_eq!(app.game().verdict(), Verdict::Win {
            player: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        });
    }
}
