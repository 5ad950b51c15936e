//! Overall game verdict from the line tally.

use crate::board::Board;
use crate::types::Mark;
use tracing::{debug, instrument};

/// Current status of the game on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GameStatus {
    /// Moves remain and nobody has completed a line.
    #[display("in progress")]
    InProgress,
    /// Board full with no winner, or both marks completed a line.
    #[display("tie")]
    Tie,
    /// Only this mark completed at least one line.
    #[display("{} wins", _0)]
    Won(Mark),
}

/// Evaluates `board`.
///
/// Completed lines are tallied per mark across every row, column and both
/// diagonals. When both marks own a completed line the game is a tie, not a
/// double win.
#[instrument(skip(board), fields(size = board.size()))]
pub fn status(board: &Board) -> GameStatus {
    let (mut x_lines, mut o_lines) = (0usize, 0usize);
    for winner in board.lines().filter_map(|line| line.winner()) {
        match winner {
            Mark::X => x_lines += 1,
            Mark::O => o_lines += 1,
        }
    }
    debug!(x_lines, o_lines, "Tallied completed lines");

    match (x_lines > 0, o_lines > 0) {
        (true, true) => GameStatus::Tie,
        (true, false) => GameStatus::Won(Mark::X),
        (false, true) => GameStatus::Won(Mark::O),
        (false, false) if board.is_full() => GameStatus::Tie,
        (false, false) => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    fn place(board: &mut Board, mark: Mark, moves: &[(i32, i32)]) {
        for &(row, column) in moves {
            assert!(board.apply(Move::new(row, column), mark));
        }
    }

    #[test]
    fn test_empty_board_in_progress() {
        let board = Board::new(3).unwrap();
        assert_eq!(status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_column_win() {
        let mut board = Board::new(3).unwrap();
        place(&mut board, Mark::O, &[(0, 2), (1, 2), (2, 2)]);
        place(&mut board, Mark::X, &[(0, 0), (1, 1)]);
        assert_eq!(status(&board), GameStatus::Won(Mark::O));
    }

    #[test]
    fn test_double_completion_is_tie() {
        let mut board = Board::new(3).unwrap();
        place(&mut board, Mark::X, &[(0, 0), (0, 1), (0, 2)]);
        place(&mut board, Mark::O, &[(1, 0), (1, 1), (1, 2)]);
        assert_eq!(status(&board), GameStatus::Tie);
    }

    #[test]
    fn test_single_cell_board_wins() {
        let mut board = Board::new(1).unwrap();
        place(&mut board, Mark::O, &[(0, 0)]);
        assert_eq!(status(&board), GameStatus::Won(Mark::O));
    }

    #[test]
    fn test_display() {
        assert_eq!(GameStatus::Won(Mark::X).to_string(), "X wins");
        assert_eq!(GameStatus::Tie.to_string(), "tie");
    }
}
