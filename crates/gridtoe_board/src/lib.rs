//! Pure board logic for tic-tac-toe on an N×N grid.
//!
//! This crate knows nothing about consoles, players or randomness. It owns
//! the grid of cells, validates and applies moves, and analyses every line
//! (rows, columns and both diagonals) to decide whether a game is still in
//! progress, tied or won.
//!
//! # Example
//!
//! ```
//! use gridtoe_board::{Board, GameStatus, Mark, Move};
//!
//! # fn example() -> Result<(), gridtoe_board::ConfigurationError> {
//! let mut board = Board::new(3)?;
//! for column in 0..3 {
//!     board.apply(Move::new(0, column), Mark::X);
//! }
//! assert_eq!(board.status(), GameStatus::Won(Mark::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod rules;
mod types;

pub use action::{Move, row_label};
pub use board::{BOARD_SIZES, Board, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::{ConfigurationError, ConfigurationErrorKind, MoveError};
pub use rules::{GameStatus, Line, LineStatus};
pub use types::{Cell, Mark};
