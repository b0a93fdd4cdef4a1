//! Tic-tac-toe with snapshot history and time travel.
//!
//! The core is a pure win evaluator plus a state machine over an
//! append-only history of board snapshots: every accepted move appends a
//! snapshot, and the step pointer can be rewound to any earlier snapshot.
//! A move applied from a rewound step discards the later snapshots and
//! starts a new, shorter future.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{GameState, Position, Verdict};
//!
//! let mut game = GameState::new();
//! game.apply_move(Position::TopLeft)?; // X
//! game.apply_move(Position::Center)?;  // O
//! assert_eq!(game.verdict(), Verdict::Ongoing);
//!
//! // Rewind to the start and branch: both earlier moves are discarded.
//! game.jump_to(0)?;
//! game.apply_move(Position::Center)?;  // X takes the center this time
//! assert_eq!(game.history().len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;

pub use game::{
    AlternatingMarks, Board, GameNotDecided, GameState, Invariant, InvariantSet,
    InvariantViolation, JumpError, LINES, LegalMove, Move, MoveContract, MoveError, Player,
    Position, RewindInvariants, SeededHistory, Snapshot, SnapshotChain, SortOrder, SquareIsEmpty,
    Square, Verdict, evaluate, is_draw, is_full, winning_line,
};
