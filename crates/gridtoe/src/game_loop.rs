//! Replays sessions until the human quits.

use crate::session::{GameSession, SessionResult};
use crate::stats::Statistics;
use anyhow::Result;
use rand::Rng;
use std::io::Write;
use tracing::{info, instrument};

/// Top-level driver: runs games back to back and keeps the tally.
pub struct SessionLoop<R, W> {
    session: GameSession<R, W>,
    stats: Statistics,
}

impl<R: Rng, W: Write> SessionLoop<R, W> {
    /// Creates a loop over `session` with an empty tally.
    pub fn new(session: GameSession<R, W>) -> Self {
        Self {
            session,
            stats: Statistics::new(),
        }
    }

    /// Returns the session being replayed.
    pub fn session(&self) -> &GameSession<R, W> {
        &self.session
    }

    /// Returns the tally so far.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Plays until a session ends in a quit, then prints the summary.
    ///
    /// Returns the final statistics.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Statistics> {
        loop {
            let result = self.session.run()?;
            self.stats.record(result);
            let message = match result {
                SessionResult::HumanWin => "You won! Play again?",
                SessionResult::ComputerWin => "You lost... Play again?",
                SessionResult::Tie => "It's a tie. Play again?",
                SessionResult::Quit => break,
            };
            writeln!(self.session.output_mut(), "{message}")?;
        }

        info!(stats = %self.stats, "Leaving");
        let output = self.session.output_mut();
        writeln!(output, "{}", self.stats)?;
        writeln!(output, "Goodbye!")?;
        output.flush()?;
        Ok(self.stats)
    }
}
