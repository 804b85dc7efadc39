use std::fmt::Display;

use thiserror::Error;

/// Everything that can stop the game. None of these are recoverable: the
/// caller restores the terminal, reports, and exits non-zero.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("Unable to load asset: {0}")]
    AssetLoad(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    pub fn init(err: impl Display) -> Self {
        GameError::Initialization(err.to_string())
    }

    pub fn terminal(err: impl Display) -> Self {
        GameError::Terminal(err.to_string())
    }
}

pub type GameResult<T> = Result<T, GameError>;
