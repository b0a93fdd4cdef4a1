//! Command-line interface for tictactoe_rewind.

use clap::{Parser, ValueEnum};
use tictactoe_rewind::SortOrder;

/// Tic-tac-toe with a browsable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Play tic-tac-toe and rewind to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Initial sort order for the move list
    #[arg(long, value_enum, default_value = "asc")]
    pub sort: SortArg,
}

/// Move-list sort order as a CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Oldest move first
    Asc,
    /// Newest move first
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortOrder::Ascending,
            SortArg::Desc => SortOrder::Descending,
        }
    }
}
