//! Move coordinates.

use derive_new::new;

/// A (row, column) coordinate a player wants to claim.
///
/// Moves carry no invariants of their own: negative or oversized
/// coordinates are representable and rejected by [`Board::validate`].
///
/// [`Board::validate`]: crate::Board::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Move {
    row: i32,
    column: i32,
}

impl Move {
    /// Zero-based row.
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Zero-based column.
    pub fn column(&self) -> i32 {
        self.column
    }
}

/// Letter labelling a zero-based row on the console (`0` is `A`).
///
/// Returns `None` past `Z`.
pub fn row_label(row: usize) -> Option<char> {
    u8::try_from(row)
        .ok()
        .filter(|row| *row < 26)
        .map(|row| char::from(b'A' + row))
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = usize::try_from(self.row).ok().and_then(row_label);
        match label {
            Some(letter) if self.column >= 0 => write!(f, "{}{}", letter, self.column + 1),
            _ => write!(f, "({}, {})", self.row, self.column),
        }
    }
}
