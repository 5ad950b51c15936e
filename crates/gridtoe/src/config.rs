//! Board size configuration.

use derive_getters::Getters;
use gridtoe_board::{
    BOARD_SIZES, Board, ConfigurationError, ConfigurationErrorKind, DEFAULT_BOARD_SIZE,
};
use tracing::{instrument, warn};

/// Settings for a run of games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct GameConfig {
    /// Rows (and columns) of the board.
    board_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl GameConfig {
    /// Resolves the optional board size argument.
    ///
    /// A missing argument gives the default silently. A bad one gives the
    /// default together with the error, for the caller to report.
    #[instrument]
    pub fn from_arg(arg: Option<&str>) -> (Self, Option<ConfigurationError>) {
        let Some(arg) = arg else {
            return (Self::default(), None);
        };
        match Self::parse(arg) {
            Ok(config) => (config, None),
            Err(err) => {
                warn!(%err, default = DEFAULT_BOARD_SIZE, "Falling back to default board size");
                (Self::default(), Some(err))
            }
        }
    }

    /// Parses a board size, rejecting non-integers and sizes out of range.
    #[instrument]
    pub fn parse(arg: &str) -> Result<Self, ConfigurationError> {
        let requested: i64 = arg.parse().map_err(|_| {
            ConfigurationError::new(ConfigurationErrorKind::NotAnInteger(arg.to_string()))
        })?;
        let board_size = usize::try_from(requested)
            .ok()
            .filter(|size| BOARD_SIZES.contains(size))
            .ok_or_else(|| {
                ConfigurationError::new(ConfigurationErrorKind::OutOfRange(arg.to_string()))
            })?;
        Ok(Self { board_size })
    }

    /// Builds an empty board of the configured size.
    pub fn board(&self) -> Result<Board, ConfigurationError> {
        Board::new(self.board_size)
    }
}
