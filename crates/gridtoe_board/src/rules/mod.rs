//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board): line extraction and
//! evaluation live in [`line`], the overall verdict in [`status`].

pub mod line;
pub mod status;

pub use line::{Line, LineStatus};
pub use status::{GameStatus, status};
