//! Tic-tac-toe game core: domain types, rules, and the snapshot history.

mod action;
mod contracts;
mod history;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{GameNotDecided, LegalMove, MoveContract, SquareIsEmpty};
pub use history::{GameState, JumpError, Snapshot, SortOrder};
pub use invariants::{
    AlternatingMarks, Invariant, InvariantSet, InvariantViolation, RewindInvariants, SeededHistory,
    SnapshotChain,
};
pub use position::Position;
pub use rules::{LINES, Verdict, evaluate, is_draw, is_full, winning_line};
pub use types::{Board, Player, Square};
