//! The N×N grid of cells.

use crate::action::{Move, row_label};
use crate::error::{ConfigurationError, ConfigurationErrorKind, MoveError};
use crate::rules::{self, GameStatus, Line, LineStatus};
use crate::types::{Cell, Mark};
use std::ops::RangeInclusive;
use tracing::{debug, instrument};

/// Smallest supported board size.
pub const MIN_BOARD_SIZE: usize = 1;

/// Largest supported board size.
pub const MAX_BOARD_SIZE: usize = 9;

/// Size used when none (or a bad one) is requested.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Every supported board size.
pub const BOARD_SIZES: RangeInclusive<usize> = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;

/// Square tic-tac-toe board.
///
/// The size is fixed at construction. Cells change only through
/// [`Board::apply`] and [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of `size`×`size` cells.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ConfigurationError> {
        if !BOARD_SIZES.contains(&size) {
            return Err(ConfigurationError::new(ConfigurationErrorKind::OutOfRange(
                size.to_string(),
            )));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Clears every cell.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Checks whether `mv` can be played.
    ///
    /// Rows are checked before columns, and bounds before occupancy, so a
    /// move outside the board on both axes reports
    /// [`MoveError::RowOutOfBounds`].
    #[instrument(skip(self), fields(size = self.size))]
    pub fn validate(&self, mv: Move) -> Result<(), MoveError> {
        let bounds = 0..self.size as i32;
        if !bounds.contains(&mv.row()) {
            return Err(MoveError::RowOutOfBounds { size: self.size });
        }
        if !bounds.contains(&mv.column()) {
            return Err(MoveError::ColumnOutOfBounds { size: self.size });
        }
        if !self.cell_at(mv.row() as usize, mv.column() as usize).is_empty() {
            return Err(MoveError::CellOccupied);
        }
        Ok(())
    }

    /// Places `mark` at `mv` if the move is valid.
    ///
    /// Returns whether the board changed; an invalid move is a no-op.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn apply(&mut self, mv: Move, mark: Mark) -> bool {
        if let Err(err) = self.validate(mv) {
            debug!(%mv, %err, "Move rejected");
            return false;
        }
        let offset = self.offset(mv.row() as usize, mv.column() as usize);
        self.cells[offset] = Cell::Occupied(mark);
        true
    }

    /// Returns the cell at `mv`, or `None` outside the board.
    pub fn cell(&self, mv: Move) -> Option<Cell> {
        let row = usize::try_from(mv.row()).ok().filter(|r| *r < self.size)?;
        let column = usize::try_from(mv.column()).ok().filter(|c| *c < self.size)?;
        Some(self.cell_at(row, column))
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Status of every line: rows, then columns, then both diagonals.
    pub fn lines(&self) -> impl Iterator<Item = LineStatus> + '_ {
        Line::all(self.size).map(move |line| line.status(self))
    }

    /// Evaluates the board.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn status(&self) -> GameStatus {
        rules::status(self)
    }

    /// Renders the board with row letters and 1-based column numbers.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Cell at in-bounds coordinates.
    pub(crate) fn cell_at(&self, row: usize, column: usize) -> Cell {
        self.cells[self.offset(row, column)]
    }

    fn offset(&self, row: usize, column: usize) -> usize {
        row * self.size + column
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![Cell::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for column in 1..=self.size {
            write!(f, " {column}  ")?;
        }
        writeln!(f)?;

        for row in 0..self.size {
            write!(f, " {} ", row_label(row).unwrap_or('?'))?;
            for column in 0..self.size {
                if column > 0 {
                    write!(f, "|")?;
                }
                write!(f, " {} ", self.cell_at(row, column).symbol())?;
            }
            writeln!(f)?;

            if row + 1 < self.size {
                write!(f, "   ")?;
                for column in 0..self.size {
                    if column > 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "---")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Board::new(0).is_err());
        assert!(Board::new(10).is_err());
        assert!(Board::new(1).is_ok());
        assert!(Board::new(9).is_ok());
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.cell(Move::new(3, 3)), Some(Cell::Empty));
        assert_eq!(board.cell(Move::new(4, 0)), None);
        assert!(!board.is_full());
    }

    #[test]
    fn test_validate_checks_row_first() {
        let board = Board::new(3).unwrap();
        assert_eq!(
            board.validate(Move::new(-1, 99)),
            Err(MoveError::RowOutOfBounds { size: 3 })
        );
        assert_eq!(
            board.validate(Move::new(0, 3)),
            Err(MoveError::ColumnOutOfBounds { size: 3 })
        );
        assert_eq!(board.validate(Move::new(2, 2)), Ok(()));
    }

    #[test]
    fn test_apply_then_validate_reports_occupied() {
        let mut board = Board::new(3).unwrap();
        assert!(board.apply(Move::new(1, 1), Mark::X));
        assert_eq!(board.validate(Move::new(1, 1)), Err(MoveError::CellOccupied));
        assert_eq!(board.cell(Move::new(1, 1)), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_apply_invalid_is_noop() {
        let mut board = Board::new(3).unwrap();
        board.apply(Move::new(0, 0), Mark::X);
        let before = board.clone();

        assert!(!board.apply(Move::new(0, 0), Mark::O));
        assert!(!board.apply(Move::new(3, 0), Mark::O));
        assert!(!board.apply(Move::new(0, -1), Mark::O));
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_clears_cells() {
        let mut board = Board::new(2).unwrap();
        board.apply(Move::new(0, 0), Mark::X);
        board.apply(Move::new(1, 1), Mark::O);
        board.reset();
        assert_eq!(board, Board::new(2).unwrap());
    }

    #[test]
    fn test_render_labels() {
        let mut board = Board::new(3).unwrap();
        board.apply(Move::new(0, 0), Mark::X);
        board.apply(Move::new(2, 1), Mark::O);

        let rendered = board.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].trim_end(), "    1   2   3");
        assert_eq!(lines[1], " A  X |   |   ");
        assert_eq!(lines[2], "   ---|---|---");
        assert_eq!(lines[5], " C    | O |   ");
    }
}
