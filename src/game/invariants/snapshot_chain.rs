//! Snapshot chain invariant: each entry extends its predecessor by one mark.

use super::super::history::GameState;
use super::super::position::Position;
use super::super::types::Square;
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: each snapshot after the seed differs from its predecessor in
/// exactly one square — the one named by its recorded move, previously
/// empty, now carrying the recorded player's mark.
pub struct SnapshotChain;

impl Invariant<GameState> for SnapshotChain {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let Some(mov) = next.placed() else {
                return false;
            };

            Position::iter().all(|pos| {
                let before = prev.board().get(pos);
                let after = next.board().get(pos);
                if pos == mov.position {
                    before == Square::Empty && after == Square::Occupied(mov.player)
                } else {
                    before == after
                }
            })
        })
    }

    fn description() -> &'static str {
        "Each snapshot differs from its predecessor in exactly the recorded square"
    }
}
