use thiserror::Error;

/// Core error type shared across textsmith crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A class identifier does not name one of the built-in classes.
    #[error("invalid character class: {0}")]
    InvalidClass(String),
}

/// Convenience alias for results returned by textsmith crates.
pub type Result<T> = std::result::Result<T, Error>;
