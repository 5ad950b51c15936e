//! Player trait and implementations.

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomComputer;

use crate::input::Choice;
use anyhow::Result;
use gridtoe_board::{Board, Mark};

/// Who is behind a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum PlayerKind {
    /// A person at the console.
    Human,
    /// The computer opponent.
    Computer,
}

/// Trait for players that can make moves.
///
/// Players only ever see the board read-only; the session applies the
/// chosen move.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// A returned [`Choice::Play`] must be valid on `board`.
    fn pick_move(&mut self, board: &Board) -> Result<Choice>;

    /// The mark this player claims cells with.
    fn mark(&self) -> Mark;

    /// Whether this is the human or the computer.
    fn kind(&self) -> PlayerKind;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
