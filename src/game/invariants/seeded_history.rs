//! Seed invariant: the history starts with the untouched empty board.

use super::super::history::GameState;
use super::super::types::Square;
use super::Invariant;

/// Invariant: history is never empty, entry 0 is the empty seed board with
/// no recorded move, and the step pointer stays in bounds.
pub struct SeededHistory;

impl Invariant<GameState> for SeededHistory {
    fn holds(game: &GameState) -> bool {
        let Some(seed) = game.history().first() else {
            return false;
        };

        seed.placed().is_none()
            && seed.board().squares().iter().all(|s| *s == Square::Empty)
            && game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "History starts with the empty seed board and the step pointer is in bounds"
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::position::Position;
    use super::super::super::types::Player;
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(SeededHistory::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_moves_and_jumps() {
        let mut game = GameState::new();
        game.apply_move(Position::TopLeft).unwrap();
        game.apply_move(Position::Center).unwrap();
        game.jump_to(0).unwrap();
        assert!(SeededHistory::holds(&game));
    }

    #[test]
    fn test_marked_seed_violates() {
        let mut game = GameState::new();
        game.history[0]
            .board
            .set(Position::Center, Square::Occupied(Player::X));
        assert!(!SeededHistory::holds(&game));
    }

    #[test]
    fn test_dangling_step_violates() {
        let mut game = GameState::new();
        game.step = 5;
        assert!(!SeededHistory::holds(&game));
    }
}
