//! Store error types

use crate::snapshot::DecodeError;
use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// A lookup that found no binding
///
/// The variant decides the message the shell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("key not found")]
    Key,

    #[error("array does not exist")]
    Array,

    #[error("destination array does not exist")]
    Destination,

    #[error("source array does not exist")]
    Source,
}

/// Errors returned by [`Store`](super::Store) operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("invalid snapshot: {0}")]
    Decode(#[from] DecodeError),
}

impl StoreError {
    /// The missing-binding cause, if that is what failed
    #[cfg(test)]
    pub(crate) fn not_found(&self) -> Option<NotFound> {
        match self {
            StoreError::NotFound(nf) => Some(*nf),
            _ => None,
        }
    }
}

/// Malformed element in a comma-separated value list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value '{token}': {source}")]
pub struct ParseError {
    pub token: String,
    #[source]
    pub source: ParseIntError,
}

/// Failure to bring the store up at process start
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Error creating database file: {0}")]
    Create(#[source] StoreError),

    #[error("Error loading database: {0}")]
    Load(#[source] StoreError),

    #[error("Error checking database file: {0}")]
    Stat(#[source] io::Error),
}
