//! Error types
//!
//! Every error stops the run. Configuration errors are raised before any output
//! is produced; sink errors abort the emission loop mid-run. Bytes already
//! written are never rolled back.

use std::io;
use thiserror::Error;

/// Errors surfaced by the generator
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or inconsistent configuration
    #[error("{0}")]
    Config(String),

    /// The output sink rejected a write or flush
    #[error("failed to write output: {0}")]
    Sink(#[from] io::Error),
}

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// True when the error came from the output sink
    pub fn is_sink(&self) -> bool {
        matches!(self, Error::Sink(_))
    }
}

/// Result type used throughout logburst
pub type Result<T, E = Error> = std::result::Result<T, E>;
