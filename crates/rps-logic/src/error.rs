//! Error types for setup, play and configuration

use thiserror::Error;

/// Text that does not name a move
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown move {0:?}, expected rock, paper or scissors")]
pub struct ParseMoveError(pub String);

/// Rejected setup submission. The session stays in setup.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("player name must not be empty")]
    EmptyName,

    #[error("round count must not be empty")]
    EmptyRounds,

    #[error("round count {0:?} is not a whole number")]
    InvalidRounds(String),

    #[error("round count must be at least 1, got {0}")]
    NonPositiveRounds(i64),

    #[error("round count {requested} exceeds the maximum of {max}")]
    TooManyRounds { requested: u32, max: u32 },

    #[error("the game has already started")]
    AlreadyStarted,
}

/// Rejected move
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("the game has not started yet")]
    NotStarted,

    #[error("the game is finished")]
    Finished,

    #[error(transparent)]
    InvalidMove(#[from] ParseMoveError),
}

/// Configuration that failed to load or validate
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
