//! Common error types for tfgen.

use thiserror::Error;

/// Top-level error type for tfgen operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The generator has performed a batch split and only accepts further batch splits.
    #[error("Stale generator: {0} is not permitted after a batch split")]
    StaleGenerator(String),

    /// An argument violates the operation's contract.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;
