//! Alternating marks invariant: recorded moves go X, O, X, O, ...

use super::super::history::GameState;
use super::super::types::Player;
use super::Invariant;

/// Invariant: the move recorded at entry `n` belongs to X when `n` is odd
/// and to O when `n` is even.
///
/// Equivalent to "X always moves first and players alternate", and to the
/// parity rule the derived turn is computed from.
pub struct AlternatingMarks;

impl Invariant<GameState> for AlternatingMarks {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(n, snapshot)| match snapshot.placed() {
                Some(mov) => {
                    let expected = if n % 2 == 1 { Player::X } else { Player::O };
                    mov.player == expected
                }
                None => false,
            })
    }

    fn description() -> &'static str {
        "Recorded marks alternate X, O, X, ... starting with X"
    }
}
