use thiserror::Error;

/// Core error type shared across Shopsync crates.
///
/// These are input-contract failures: the caller could not get a usable
/// snapshot at all. Validation findings are never errors; they live in
/// the validation report.
#[derive(Debug, Error)]
pub enum Error {
    /// Record store error or driver failure.
    #[error("store error: {0}")]
    Store(String),
    /// A source file is missing or malformed.
    #[error("invalid source: {0}")]
    InvalidSource(String),
    /// Filesystem failure while reading a source file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by Shopsync crates.
pub type Result<T> = std::result::Result<T, Error>;
