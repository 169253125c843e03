//! Common error types used throughout the watchlist crates.

/// Common error type for the watchlist.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The metadata service credential is not present in the environment.
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// A single metadata lookup failed.
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// Reading or writing the session snapshot failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Create a new MissingCredential error.
    pub fn missing_credential<S: Into<String>>(msg: S) -> Self {
        Self::MissingCredential(msg.into())
    }

    /// Create a new Lookup error.
    pub fn lookup<S: Into<String>>(msg: S) -> Self {
        Self::Lookup(msg.into())
    }

    /// Create a new Storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        Self::Storage(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
