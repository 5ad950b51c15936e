//! Board error types.

use crate::action::row_label;
use crate::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a requested board size was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigurationErrorKind {
    /// The size could not be read as an integer.
    #[display("Invalid board size '{}' (not an integer)", _0)]
    NotAnInteger(String),

    /// The size is an integer outside the supported range.
    #[display(
        "Specified board size '{}' out of range [{},{}]",
        _0,
        MIN_BOARD_SIZE,
        MAX_BOARD_SIZE
    )]
    OutOfRange(String),
}

/// Board configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Configuration error: {} at {}:{}", kind, file, line)]
pub struct ConfigurationError {
    /// What was wrong with the configuration.
    pub kind: ConfigurationErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigurationError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigurationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns what was wrong, without the source location.
    pub fn kind(&self) -> &ConfigurationErrorKind {
        &self.kind
    }
}

/// Reason a move cannot be played on a board.
///
/// Messages name the valid range so they can be shown to a human as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Row lies outside the board.
    #[display("Invalid move: You must select a row between A and {}", last_row(*size))]
    RowOutOfBounds {
        /// Board size the move was checked against.
        size: usize,
    },

    /// Column lies outside the board.
    #[display("Invalid move: You must select a column between 1 and {}", size)]
    ColumnOutOfBounds {
        /// Board size the move was checked against.
        size: usize,
    },

    /// Cell already holds a mark.
    #[display("Invalid move: position already taken")]
    CellOccupied,
}

impl std::error::Error for MoveError {}

fn last_row(size: usize) -> char {
    row_label(size.saturating_sub(1)).unwrap_or('?')
}
