use thiserror::Error;

/// Custom error types for qaia
///
/// Only the host side (files, config, CLI input) produces these. The in-page
/// core never returns an error; it falls back to a hidden tooltip instead.
#[derive(Debug, Error)]
pub enum QaiaError {
    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    #[error("Invalid answers: {0}")]
    InvalidAnswers(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
