//! Gridtoe library - console tic-tac-toe on an N×N board
//!
//! A human plays against a computer that picks uniformly random moves,
//! session after session, until the human quits.
//!
//! # Architecture
//!
//! - **Players**: [`HumanPlayer`] reads move tokens from a console,
//!   [`RandomComputer`] samples cells from an injected RNG
//! - **Session**: [`GameSession`] owns the board and alternates turns
//! - **Loop**: [`SessionLoop`] replays sessions and keeps [`Statistics`]
//! - **Config**: [`GameConfig`] resolves the requested board size
//!
//! # Example
//!
//! ```no_run
//! use gridtoe::{Board, GameSession, HumanPlayer, Mark, RandomComputer, SessionLoop};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! # fn example() -> anyhow::Result<()> {
//! let human = HumanPlayer::stdio("You", Mark::X);
//! let computer = RandomComputer::new("CPU", Mark::O, ChaCha8Rng::seed_from_u64(7));
//! let session = GameSession::new(
//!     Board::new(3)?,
//!     Box::new(human),
//!     Box::new(computer),
//!     ChaCha8Rng::seed_from_u64(11),
//!     std::io::stdout(),
//! );
//! let stats = SessionLoop::new(session).run()?;
//! println!("{stats}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game_loop;
mod input;
mod players;
mod session;
mod stats;

// Crate-level exports - Configuration
pub use config::GameConfig;

// Crate-level exports - Players
pub use input::{Choice, InputError};
pub use players::{HumanPlayer, Player, PlayerKind, RandomComputer};

// Crate-level exports - Sessions and statistics
pub use game_loop::SessionLoop;
pub use session::{GameSession, SessionResult, SessionState};
pub use stats::Statistics;

// Crate-level exports - Board types
pub use gridtoe_board::{
    Board, Cell, ConfigurationError, ConfigurationErrorKind, DEFAULT_BOARD_SIZE, GameStatus, Mark,
    Move, MoveError,
};
