//! Admin commands (exit, help)

use super::{Command, CommandContext};
use crate::protocol::Reply;
use tracing::{debug, info};

const HELP: &str = "\
Commands:
  new <array_name> [<comma-separated-values>]: Create a new array
  show <array_name>: Print the content of an array
  del <array_name>: Delete an array
  merge <dest_array_name> <src_array_name>: Merge two arrays
  sort <array_name>: Sort an array in ascending order
  exit: Exit the REPL
  help: Show this help message";

/// exit command - Persist the store and end the session
///
/// Syntax: exit
///
/// The session ends even when saving fails; the failure is reported.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, ctx: &CommandContext, _args: &[&str]) -> Reply {
        match ctx.store.save() {
            Ok(()) => {
                info!("Database saved on exit");
                Reply::Exit { save_error: None }
            }
            Err(e) => {
                debug!("Failed to save database on exit: {}", e);
                Reply::Exit {
                    save_error: Some(e.to_string()),
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "exit"
    }

    fn usage(&self) -> &'static str {
        "Usage: exit"
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

/// help command - Print the command list
///
/// Syntax: help
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _ctx: &CommandContext, _args: &[&str]) -> Reply {
        Reply::text(HELP)
    }

    fn name(&self) -> &'static str {
        "help"
    }

    fn usage(&self) -> &'static str {
        "Usage: help"
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}
