// src/error.rs
use std::io;

use thiserror::Error;

/// Why a fetch produced no usable data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API answered with HTTP {0}")]
    Status(u16),

    #[error("malformed API response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("no questions returned by the API")]
    NoResults,
}

#[derive(Debug, Error)]
pub enum TriviaError {
    #[error("error fetching data: {0}")]
    Fetch(#[from] FetchError),

    #[error("invalid format '{0}'. Use 'json', 'csv', or 'console'")]
    InvalidFormat(String),

    #[error("invalid number of requests '{0}'. Please enter a positive whole number")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl TriviaError {
    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> u8 {
        match self {
            TriviaError::Fetch(_) => 1,
            TriviaError::InvalidFormat(_) | TriviaError::InvalidInput(_) => 2,
            TriviaError::Io(_) | TriviaError::Serialize(_) => 3,
        }
    }

    pub fn is_usage(&self) -> bool {
        self.exit_code() == 2
    }
}
