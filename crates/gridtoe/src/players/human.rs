//! Human player that reads move tokens from a console.

use super::{Player, PlayerKind};
use crate::input::Choice;
use anyhow::Result;
use gridtoe_board::{Board, Mark};
use std::collections::VecDeque;
use std::io::{BufRead, StdinLock, Stdout, Write};
use tracing::{debug, info, instrument};

/// Human player using line-based console input.
///
/// Input is split on whitespace, so several tokens typed on one line are
/// consumed one turn at a time.
pub struct HumanPlayer<R, W> {
    name: String,
    mark: Mark,
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player reading from `input` and prompting on `output`.
    pub fn new(name: impl Into<String>, mark: Mark, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            mark,
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Returns the prompt output.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Next whitespace-separated token, or `None` once input is exhausted.
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// Creates a human player on the process's stdin and stdout.
    pub fn stdio(name: impl Into<String>, mark: Mark) -> Self {
        Self::new(name, mark, std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, board), fields(player = %self.name, size = board.size()))]
    fn pick_move(&mut self, board: &Board) -> Result<Choice> {
        loop {
            writeln!(self.output, "Your move (quit to exit):")?;
            self.output.flush()?;

            let Some(token) = self.next_token()? else {
                info!("Input closed, treating as quit");
                return Ok(Choice::Quit);
            };

            match token.parse::<Choice>() {
                Ok(Choice::Quit) => {
                    info!("Player quit");
                    return Ok(Choice::Quit);
                }
                Ok(Choice::Play(mv)) => match board.validate(mv) {
                    Ok(()) => {
                        debug!(%mv, "Human chose move");
                        return Ok(Choice::Play(mv));
                    }
                    Err(err) => {
                        debug!(%token, %err, "Rejected move");
                        writeln!(self.output, "{err}")?;
                    }
                },
                Err(err) => {
                    debug!(%token, %err, "Malformed move");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtoe_board::Move;
    use std::io::Cursor;

    fn human(script: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new("You", Mark::X, Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(player: &HumanPlayer<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(player.output()).into_owned()
    }

    #[test]
    fn test_several_tokens_on_one_line() {
        let board = Board::new(3).unwrap();
        let mut player = human("a1 b2\n");
        assert_eq!(
            player.pick_move(&board).unwrap(),
            Choice::Play(Move::new(0, 0))
        );
        assert_eq!(
            player.pick_move(&board).unwrap(),
            Choice::Play(Move::new(1, 1))
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        let board = Board::new(3).unwrap();
        let mut player = human("\n   \nc3\n");
        assert_eq!(
            player.pick_move(&board).unwrap(),
            Choice::Play(Move::new(2, 2))
        );
        assert_eq!(transcript(&player).matches("Your move").count(), 1);
    }

    #[test]
    fn test_end_of_input_quits() {
        let board = Board::new(3).unwrap();
        let mut player = human("zz\n");
        assert_eq!(player.pick_move(&board).unwrap(), Choice::Quit);
        assert!(transcript(&player).contains("the column must be a digit"));
    }
}
