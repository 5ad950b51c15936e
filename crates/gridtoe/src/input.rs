//! Parsing of console move tokens.

use derive_more::Display;
use gridtoe_board::Move;
use std::str::FromStr;
use tracing::instrument;

/// What a player decided to do with a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Claim a cell.
    Play(Move),
    /// Stop playing altogether.
    Quit,
}

/// Malformed move token.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Token is not exactly two characters.
    #[display(
        "Invalid move: please specify two characters, one for the row and one for the column"
    )]
    WrongLength(String),

    /// First character is not a letter.
    #[display("Invalid move: the row must be a letter, got '{}'", _0)]
    RowNotLetter(char),

    /// Second character is not a digit.
    #[display("Invalid move: the column must be a digit, got '{}'", _0)]
    ColumnNotDigit(char),
}

impl std::error::Error for InputError {}

impl FromStr for Choice {
    type Err = InputError;

    /// Parses `quit` (any case) or a row letter followed by a column digit.
    ///
    /// `b3` is row 1, column 2. Bounds are not checked here.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("quit") {
            return Ok(Choice::Quit);
        }

        let mut chars = token.chars();
        let (Some(row), Some(column), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(InputError::WrongLength(token.to_string()));
        };
        if !row.is_ascii_alphabetic() {
            return Err(InputError::RowNotLetter(row));
        }
        let Some(column) = column.to_digit(10) else {
            return Err(InputError::ColumnNotDigit(column));
        };

        let row = i32::from(row.to_ascii_uppercase() as u8 - b'A');
        Ok(Choice::Play(Move::new(row, column as i32 - 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_any_case() {
        for token in ["quit", "QUIT", "Quit", "qUiT", " quit "] {
            assert_eq!(token.parse::<Choice>(), Ok(Choice::Quit));
        }
    }

    #[test]
    fn test_letter_digit() {
        assert_eq!("a1".parse::<Choice>(), Ok(Choice::Play(Move::new(0, 0))));
        assert_eq!("C2".parse::<Choice>(), Ok(Choice::Play(Move::new(2, 1))));
        assert_eq!("e5".parse::<Choice>(), Ok(Choice::Play(Move::new(4, 4))));
    }

    #[test]
    fn test_zero_column_parses_out_of_range() {
        assert_eq!("a0".parse::<Choice>(), Ok(Choice::Play(Move::new(0, -1))));
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(matches!(
            "a".parse::<Choice>(),
            Err(InputError::WrongLength(_))
        ));
        assert!(matches!(
            "a12".parse::<Choice>(),
            Err(InputError::WrongLength(_))
        ));
        assert_eq!("1a".parse::<Choice>(), Err(InputError::RowNotLetter('1')));
        assert_eq!("ab".parse::<Choice>(), Err(InputError::ColumnNotDigit('b')));
    }

    #[test]
    fn test_wrong_length_message() {
        let err = "abc".parse::<Choice>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid move: please specify two characters, one for the row and one for the column"
        );
    }
}
