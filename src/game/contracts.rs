//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! formalizing the Hoare-style reasoning: {P} action {Q}.

use super::action::{Move, MoveError};
use super::history::GameState;
use super::invariants::{InvariantSet, RewindInvariants};
use tracing::instrument;

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition against the current board.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the board at the current step must not be decided.
///
/// Rewinding to an earlier, undecided step re-enables moves; only the
/// branch the pointer stands on is closed.
pub struct GameNotDecided;

impl GameNotDecided {
    /// Checks the precondition against the current verdict.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.verdict().is_decided() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal if the game is undecided and
/// the target square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameNotDecided::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move application.
///
/// Preconditions: the game is undecided and the square is empty.
/// Postcondition: the composed invariant set still holds.
pub struct MoveContract;

impl MoveContract {
    /// Checks preconditions before applying the move.
    pub fn pre(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        LegalMove::check(mov, game)
    }

    /// Verifies the invariant set after a move (debug builds).
    pub fn post(game: &GameState) -> Result<(), MoveError> {
        RewindInvariants::check_all(game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::position::Position;
    use super::super::types::Player;
    use super::*;

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&action, &game).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();

        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&action, &game),
            Err(MoveError::SquareOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_precondition_decided_game() {
        let mut game = GameState::new();
        // X takes the top row.
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.apply_move(pos).unwrap();
        }

        let action = Move::new(Player::O, Position::BottomLeft);
        assert!(matches!(
            MoveContract::pre(&action, &game),
            Err(MoveError::GameOver)
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();
        assert!(MoveContract::post(&game).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();

        // Corrupt the latest snapshot behind the API's back.
        game.history[1]
            .board
            .set(Position::TopLeft, super::super::types::Square::Occupied(Player::O));

        assert!(matches!(
            MoveContract::post(&game),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
