//! Key commands (del)

use super::{reply_with, Command, CommandContext};
use crate::protocol::Reply;

/// del command - Remove an array
///
/// Syntax: del <array_name>
pub struct DelCommand;

impl Command for DelCommand {
    fn execute(&self, ctx: &CommandContext, args: &[&str]) -> Reply {
        reply_with(ctx.store.delete(args[0]), |_| Reply::status("DELETED"))
    }

    fn name(&self) -> &'static str {
        "del"
    }

    fn usage(&self) -> &'static str {
        "Usage: del <array_name>"
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}
