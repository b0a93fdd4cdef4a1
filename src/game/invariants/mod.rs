//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as documentation
//! of system guarantees; `MoveContract` checks them after every accepted
//! move in debug builds.

pub mod alternating_marks;
pub mod seeded_history;
pub mod snapshot_chain;

pub use alternating_marks::AlternatingMarks;
pub use seeded_history::SeededHistory;
pub use snapshot_chain::SnapshotChain;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if every invariant holds, or the list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All game-state invariants as a composable set.
pub type RewindInvariants = (SeededHistory, SnapshotChain, AlternatingMarks);

#[cfg(test)]
mod tests {
    use super::super::history::GameState;
    use super::super::position::Position;
    use super::super::types::{Player, Square};
    use super::*;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameState::new();
        assert!(RewindInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = GameState::new();
        game.apply_move(Position::TopLeft).unwrap();
        game.apply_move(Position::Center).unwrap();
        game.apply_move(Position::TopRight).unwrap();
        assert!(RewindInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_violations() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();

        // A second mark appears with no recorded move: the chain breaks.
        game.history[1]
            .board
            .set(Position::TopLeft, Square::Occupied(Player::O));

        let violations = RewindInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameState::new();
        type TwoInvariants = (SeededHistory, AlternatingMarks);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
