//! Gridtoe - console tic-tac-toe on an N×N board.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use gridtoe::{
    DEFAULT_BOARD_SIZE, GameConfig, GameSession, HumanPlayer, Mark, RandomComputer, SessionLoop,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Game text owns stdout, diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (config, advisory) = GameConfig::from_arg(cli.size.as_deref());
    let size = *config.board_size();

    println!("Tic-Tac-Toe on a {size}x{size} board\n");
    if let Some(err) = advisory {
        println!(
            "{}, using default size of {} instead.",
            err.kind(),
            DEFAULT_BOARD_SIZE
        );
    }

    info!(size, "Starting gridtoe");
    let human = HumanPlayer::stdio("You", Mark::X);
    let computer = RandomComputer::new("CPU", Mark::O, ChaCha8Rng::from_entropy());
    let session = GameSession::new(
        config.board()?,
        Box::new(human),
        Box::new(computer),
        ChaCha8Rng::from_entropy(),
        std::io::stdout(),
    );

    let stats = SessionLoop::new(session).run()?;
    info!(%stats, "Finished");
    Ok(())
}
