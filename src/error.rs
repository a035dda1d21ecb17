//! Crate error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown argument: {0}")]
    UnknownArg(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Magic word needs at least {min_len} characters and {min_letters} letters")]
    MagicIneligible { min_len: usize, min_letters: usize },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UnknownArg(_)
            | Error::InvalidNumber(_)
            | Error::MissingValue(_)
            | Error::MagicIneligible { .. } => 2,
            Error::Clipboard(_) | Error::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
