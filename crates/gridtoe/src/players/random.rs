//! Computer player that picks uniformly random cells.

use super::{Player, PlayerKind};
use crate::input::Choice;
use anyhow::Result;
use gridtoe_board::{Board, Mark, Move};
use rand::Rng;
use tracing::{debug, instrument};

/// Computer opponent sampling rows and columns uniformly until a free cell
/// comes up.
///
/// The board must have at least one empty cell when asked for a move;
/// on a full board the sampling never ends.
pub struct RandomComputer<R> {
    name: String,
    mark: Mark,
    rng: R,
}

impl<R: Rng> RandomComputer<R> {
    /// Creates a new random computer drawing from `rng`.
    pub fn new(name: impl Into<String>, mark: Mark, rng: R) -> Self {
        Self {
            name: name.into(),
            mark,
            rng,
        }
    }
}

impl<R: Rng> Player for RandomComputer<R> {
    #[instrument(skip(self, board), fields(player = %self.name, size = board.size()))]
    fn pick_move(&mut self, board: &Board) -> Result<Choice> {
        let size = board.size() as i32;
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let mv = Move::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size));
            if board.validate(mv).is_ok() {
                debug!(%mv, attempts, "Computer chose move");
                return Ok(Choice::Play(mv));
            }
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }

    fn name(&self) -> &str {
        &self.name
    }
}
