//! Command execution module
//!
//! Provides a unified interface for all shell commands through the Command
//! trait. Related commands share a file.

mod context;
mod registry;

// Command implementations
mod array;
mod key;
mod admin;

pub use context::CommandContext;
pub use registry::CommandRegistry;

use crate::protocol::Reply;

/// Command execution trait
///
/// All commands implement this trait with a single execute method.
/// Argument counts are validated by the dispatcher before `execute` runs.
pub trait Command: Send + Sync {
    /// Execute the command with the given context and arguments
    ///
    /// Arguments:
    /// - ctx: the command context (contains the store)
    /// - args: command arguments (excluding the command name itself)
    fn execute(&self, ctx: &CommandContext, args: &[&str]) -> Reply;

    /// Get the command name as typed in the shell
    fn name(&self) -> &'static str;

    /// Usage line printed on arity mismatch
    fn usage(&self) -> &'static str;

    /// Get the minimum number of arguments required
    fn min_args(&self) -> usize {
        0
    }

    /// Get the maximum number of arguments (None = unlimited)
    fn max_args(&self) -> Option<usize> {
        None
    }
}

/// Turn a store result into the reply the shell prints
pub(crate) fn reply_with<T>(
    result: Result<T, crate::store::StoreError>,
    ok: impl FnOnce(T) -> Reply,
) -> Reply {
    use tracing::debug;

    match result {
        Ok(value) => ok(value),
        Err(e) => {
            debug!("Command failed: {}", e);
            Reply::error(e)
        }
    }
}
