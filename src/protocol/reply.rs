//! Shell reply types
//!
//! Every dispatched line produces exactly one [`Reply`]. Its `Display`
//! implementation is the text written to standard output.

use std::fmt;

/// Outcome of one shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// One-word acknowledgement: CREATED, DELETED, ...
    Status(&'static str),

    /// Rendered output (sequence rendering, help text)
    Text(String),

    /// Recovered failure: Error: key not found
    Error(String),

    /// Wrong number of arguments
    Usage(&'static str),

    /// First token matched no command
    Unknown(String),

    /// Session ends; carries the save failure if persisting did not work
    Exit { save_error: Option<String> },
}

impl Reply {
    /// Create a status reply
    pub fn status(s: &'static str) -> Self {
        Reply::Status(s)
    }

    /// Create a text reply
    pub fn text(s: impl Into<String>) -> Self {
        Reply::Text(s.into())
    }

    /// Create an error reply from anything displayable
    pub fn error(e: impl fmt::Display) -> Self {
        Reply::Error(e.to_string())
    }

    /// Check if this reply ends the session
    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit { .. })
    }

    /// Check if this reply reports a failure
    pub fn is_error(&self) -> bool {
        match self {
            Reply::Error(_) | Reply::Usage(_) | Reply::Unknown(_) => true,
            Reply::Exit { save_error } => save_error.is_some(),
            _ => false,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Status(s) => write!(f, "{}", s),
            Reply::Text(s) => write!(f, "{}", s),
            Reply::Error(e) => write!(f, "Error: {}", e),
            Reply::Usage(u) => write!(f, "{}", u),
            Reply::Unknown(name) => write!(f, "Unknown command: {}", name),
            Reply::Exit { save_error: None } => write!(f, "Bye!"),
            Reply::Exit { save_error: Some(e) } => {
                write!(f, "Error saving database: {}\nBye!", e)
            }
        }
    }
}
