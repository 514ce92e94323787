//! Library error type.

use std::io;

/// Everything that can go wrong while loading or querying a roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The roster could not be opened or read.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A line did not split into exactly five `|`-separated fields.
    #[error("malformed record at {origin}:{line}: expected 5 '|'-separated fields, found {found}")]
    MalformedRecord {
        origin: String,
        line: usize,
        found: usize,
    },

    /// A lookup that needs a target record found none.
    #[error("no person named {0:?} in roster")]
    PersonNotFound(String),
}

/// Alias for Result with `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;
