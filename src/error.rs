// src/error.rs
use thiserror::Error;

/// Why a sheet load failed. "No data" is not here: a header-only sheet is a
/// successful load of nothing (see `sheet::LoadOutcome::NoData`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The server answered with a non-success status.
    #[error("Could not fetch sheet CSV: {code} {reason}")]
    Status { code: u16, reason: String },

    /// Connection, TLS, timeout or body decoding failure.
    #[error("Could not fetch sheet CSV: {0}")]
    Transport(String),

    /// The fetch worker went away without sending a result.
    #[error("Fetch worker stopped before reporting a result")]
    Worker,
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        LoadError::Transport(e.to_string())
    }
}
