//! Win/tie/loss tally across sessions.

use crate::session::SessionResult;
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Results of every finished game in this process, from the human's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Statistics {
    wins: u32,
    ties: u32,
    losses: u32,
}

impl Statistics {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a human win.
    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    /// Counts a tie.
    pub fn record_tie(&mut self) {
        self.ties += 1;
    }

    /// Counts a human loss.
    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    /// Counts a session result. A quit is not a game and counts nothing.
    #[instrument(skip(self))]
    pub fn record(&mut self, result: SessionResult) {
        match result {
            SessionResult::HumanWin => self.record_win(),
            SessionResult::ComputerWin => self.record_loss(),
            SessionResult::Tie => self.record_tie(),
            SessionResult::Quit => {}
        }
        debug!(wins = self.wins, ties = self.ties, losses = self.losses, "Recorded result");
    }

    /// Number of games counted.
    pub fn total(&self) -> u32 {
        self.wins + self.ties + self.losses
    }

    /// One-line summary, e.g. `4 games: 1 wins, 2 ties, 1 losses.`
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: {} wins, {} ties, {} losses.",
            self.total(),
            self.wins,
            self.ties,
            self.losses
        )
    }
}
