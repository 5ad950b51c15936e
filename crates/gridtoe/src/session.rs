//! One game between two players on a shared board.

use crate::input::Choice;
use crate::players::{Player, PlayerKind};
use anyhow::{Result, bail};
use gridtoe_board::{Board, GameStatus, Mark};
use rand::Rng;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// How a session ended, from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum SessionResult {
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// Board filled without a winner, or both marks completed lines.
    Tie,
    /// The human asked to stop.
    Quit,
}

/// Lifecycle of a [`GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Board not yet reset for a game.
    NotStarted,
    /// Waiting on the player at index `to_move`.
    InProgress {
        /// Index of the player whose turn it is.
        to_move: usize,
    },
    /// The game is over.
    Finished(SessionResult),
}

/// Orchestrates gameplay between two players.
///
/// The session is the only owner of the board; players get a shared
/// reference when asked for a move. A session can be run repeatedly, each
/// run starting from an empty board.
pub struct GameSession<R, W> {
    board: Board,
    players: [Box<dyn Player>; 2],
    rng: R,
    output: W,
    state: SessionState,
}

impl<R: Rng, W: Write> GameSession<R, W> {
    /// Creates a new session.
    ///
    /// `rng` decides who moves first in each game; `output` receives the
    /// board after every move.
    pub fn new(
        board: Board,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        rng: R,
        output: W,
    ) -> Self {
        if first.mark() == second.mark() {
            warn!(mark = %first.mark(), "Both players share a mark");
        }
        Self {
            board,
            players: [first, second],
            rng,
            output,
            state: SessionState::NotStarted,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the output writer.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Returns the output writer mutably.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Clears the board and flips a coin for the first player.
    #[instrument(skip(self), fields(size = self.board.size()))]
    pub fn start(&mut self) -> Result<()> {
        self.board.reset();
        let to_move = self.rng.gen_range(0..self.players.len());
        info!(first = %self.players[to_move].name(), "Starting game");

        writeln!(self.output, "\n---------- NEW GAME ----------\n")?;
        writeln!(self.output, "{}", self.board)?;
        self.state = SessionState::InProgress { to_move };
        Ok(())
    }

    /// Plays one turn.
    ///
    /// Does nothing unless the session is in progress. Returns the state
    /// after the turn.
    #[instrument(skip(self), fields(size = self.board.size()))]
    pub fn step(&mut self) -> Result<SessionState> {
        let SessionState::InProgress { to_move } = self.state else {
            return Ok(self.state);
        };

        let player = &mut self.players[to_move];
        debug!(player = %player.name(), "Waiting for move");
        let mv = match player.pick_move(&self.board)? {
            Choice::Play(mv) => mv,
            Choice::Quit => {
                info!(player = %player.name(), "Session quit");
                self.state = SessionState::Finished(SessionResult::Quit);
                return Ok(self.state);
            }
        };

        if !self.board.apply(mv, player.mark()) {
            bail!("{} picked an unplayable move {}", player.name(), mv);
        }
        if player.kind() == PlayerKind::Computer {
            writeln!(self.output, "{}'s move: {}", player.name(), mv)?;
        }
        writeln!(self.output, "{}", self.board)?;

        self.state = match self.board.status() {
            GameStatus::InProgress => SessionState::InProgress {
                to_move: (to_move + 1) % self.players.len(),
            },
            GameStatus::Tie => SessionState::Finished(SessionResult::Tie),
            GameStatus::Won(mark) => SessionState::Finished(self.result_for(mark)),
        };
        Ok(self.state)
    }

    /// Plays a whole game from an empty board.
    #[instrument(skip(self), fields(size = self.board.size()))]
    pub fn run(&mut self) -> Result<SessionResult> {
        self.start()?;
        loop {
            if let SessionState::Finished(result) = self.step()? {
                info!(%result, "Game over");
                return Ok(result);
            }
        }
    }

    /// Maps a winning mark to the result for the player holding it.
    fn result_for(&self, mark: Mark) -> SessionResult {
        let owner = self.players.iter().find(|player| player.mark() == mark);
        match owner.map(|player| player.kind()) {
            Some(PlayerKind::Human) => SessionResult::HumanWin,
            Some(PlayerKind::Computer) => SessionResult::ComputerWin,
            None => {
                warn!(%mark, "Winning mark belongs to no player");
                SessionResult::Tie
            }
        }
    }
}
