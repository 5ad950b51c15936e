//! Lines: rows, columns and the two full diagonals.

use crate::board::Board;
use crate::types::{Cell, Mark};
use tracing::instrument;

/// A candidate winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// A row, by zero-based index.
    Row(usize),
    /// A column, by zero-based index.
    Column(usize),
    /// Top-left to bottom-right.
    MajorDiagonal,
    /// Top-right to bottom-left.
    MinorDiagonal,
}

/// How far a line is from being won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStatus {
    /// At least one cell is empty.
    Incomplete,
    /// Full, but holds both marks.
    Mixed,
    /// Full of a single mark.
    CompletedBy(Mark),
}

impl Line {
    /// Every line of a `size`×`size` board: rows, then columns, then diagonals.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::MajorDiagonal, Line::MinorDiagonal])
    }

    /// Cells along this line, in order.
    pub fn cells(self, board: &Board) -> impl Iterator<Item = Cell> + '_ {
        let last = board.size() - 1;
        (0..board.size()).map(move |i| match self {
            Line::Row(row) => board.cell_at(row, i),
            Line::Column(column) => board.cell_at(i, column),
            Line::MajorDiagonal => board.cell_at(i, i),
            Line::MinorDiagonal => board.cell_at(i, last - i),
        })
    }

    /// Evaluates this line on `board`.
    #[instrument(skip(board))]
    pub fn status(self, board: &Board) -> LineStatus {
        LineStatus::of(self.cells(board))
    }
}

impl LineStatus {
    /// Classifies a sequence of cells.
    ///
    /// An empty cell anywhere wins over a mix of marks.
    pub fn of(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut first = None;
        let mut mixed = false;
        for cell in cells {
            let Cell::Occupied(mark) = cell else {
                return LineStatus::Incomplete;
            };
            match first {
                None => first = Some(mark),
                Some(seen) if seen != mark => mixed = true,
                Some(_) => {}
            }
        }
        match first {
            None => LineStatus::Incomplete,
            Some(_) if mixed => LineStatus::Mixed,
            Some(mark) => LineStatus::CompletedBy(mark),
        }
    }

    /// The mark that completed this line, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            LineStatus::CompletedBy(mark) => Some(mark),
            LineStatus::Incomplete | LineStatus::Mixed => None,
        }
    }
}
