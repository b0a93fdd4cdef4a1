//! Snapshot history and the time-travel state machine.
//!
//! Every accepted move appends one snapshot to an append-only history.
//! The step pointer can be rewound to any earlier snapshot; a move applied
//! from a rewound step discards the later snapshots and starts a new,
//! shorter future (truncate-then-append). Snapshots are never mutated once
//! appended.

use super::action::{Move, MoveError};
use super::contracts::MoveContract;
use super::position::Position;
use super::rules::{Verdict, evaluate};
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One history entry: the board after a move, plus the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(super) board: Board,
    /// `None` only for the seed entry (the empty starting board).
    pub(super) placed: Option<Move>,
}

impl Snapshot {
    fn seed() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    /// Returns the board at this entry.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move that produced this entry, if any.
    pub fn placed(&self) -> Option<Move> {
        self.placed
    }
}

/// Display order for the move list. Has no effect on game logic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first (insertion order).
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the flipped order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Error that can occur when moving the step pointer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested step is outside the recorded history.
    #[display("Step {step} is out of range (history holds {len} entries)")]
    StepOutOfRange {
        /// The requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// The game state machine: snapshot history, step pointer, display order.
///
/// The player to move is derived from step parity (X on even steps) and is
/// never stored, so it cannot desynchronize from the history. Likewise the
/// verdict is recomputed from the current board on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) history: Vec<Snapshot>,
    pub(super) step: usize,
    pub(super) sort_order: SortOrder,
}

impl GameState {
    /// Creates a game holding only the seed snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a game with the given initial move-list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Snapshot::seed()],
            step: 0,
            sort_order,
        }
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        &self.history[self.step].board
    }

    /// Returns the current step (index into the history).
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the player to move at the current step.
    ///
    /// X moves on even steps, O on odd steps.
    pub fn to_move(&self) -> Player {
        if self.step % 2 == 0 { Player::X } else { Player::O }
    }

    /// Returns the verdict for the current board, computed on demand.
    pub fn verdict(&self) -> Verdict {
        evaluate(self.board())
    }

    /// Returns the full history, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Returns the current display order for the move list.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Returns history entries paired with their step numbers, in display
    /// order.
    pub fn ordered_moves(&self) -> Vec<(usize, &Snapshot)> {
        let mut entries: Vec<_> = self.history.iter().enumerate().collect();
        if self.sort_order == SortOrder::Descending {
            entries.reverse();
        }
        entries
    }

    /// Places the current player's mark at `position`.
    ///
    /// Applied from a rewound step, the move first discards every later
    /// snapshot, so the history stays a single line of play.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] if the current board is already decided,
    /// [`MoveError::SquareOccupied`] if the target square is taken.
    /// Rejections leave the state untouched.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn apply_move(&mut self, position: Position) -> Result<(), MoveError> {
        let action = Move::new(self.to_move(), position);
        MoveContract::pre(&action, self)?;

        let mut board = self.board().clone();
        board.set(position, Square::Occupied(action.player));

        self.history.truncate(self.step + 1);
        self.history.push(Snapshot {
            board,
            placed: Some(action),
        });
        self.step += 1;

        debug!(%action, len = self.history.len(), "Move applied");
        if self.verdict().is_decided() {
            debug!(verdict = ?self.verdict(), "Game decided\n{}", self.board().display());
        }

        #[cfg(debug_assertions)]
        MoveContract::post(self)?;

        Ok(())
    }

    /// Moves the step pointer to `step` without touching the history.
    ///
    /// The turn is recomputed from parity; truncation only happens when a
    /// later [`GameState::apply_move`] branches off the rewound step.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        debug!(step, "Rewound to step");
        Ok(())
    }

    /// Flips the display order of the move list.
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
        debug!(order = %self.sort_order, "Sort order toggled");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
