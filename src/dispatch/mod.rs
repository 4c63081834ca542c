//! Command dispatcher
//!
//! Routes shell lines to the appropriate handler.
//! This module keeps the shell loop independent from command implementations.

use crate::commands::{CommandContext, CommandRegistry};
use crate::protocol::{tokenize, Reply};
use crate::store::Store;
use std::sync::Arc;
use tracing::debug;

/// Command dispatcher
///
/// Tokenizes lines, validates argument counts, and routes to handlers
pub struct Dispatcher {
    /// Command registry
    registry: CommandRegistry,

    /// Command execution context
    context: CommandContext,
}

impl Dispatcher {
    /// Create a dispatcher over the given store
    pub fn new(store: Arc<Store>) -> Self {
        Dispatcher {
            registry: CommandRegistry::new(),
            context: CommandContext::new(store),
        }
    }

    /// Dispatch one shell line
    ///
    /// Returns `None` for a blank line.
    pub fn dispatch_line(&self, line: &str) -> Option<Reply> {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return None;
        }
        Some(self.dispatch(&tokens))
    }

    /// Dispatch a tokenized command
    ///
    /// The first token is the command name, the rest are its arguments.
    pub fn dispatch(&self, tokens: &[&str]) -> Reply {
        let (cmd_name, cmd_args) = match tokens.split_first() {
            Some(parts) => parts,
            None => return Reply::Unknown(String::new()),
        };

        debug!("Dispatching command: {} {:?}", cmd_name, cmd_args);

        // Look up the command
        let command = match self.registry.get(cmd_name) {
            Some(cmd) => cmd,
            None => {
                debug!("Unknown command: {}", cmd_name);
                return Reply::Unknown(cmd_name.to_string());
            }
        };

        // Validate argument count
        let too_many = command.max_args().is_some_and(|max| cmd_args.len() > max);
        if cmd_args.len() < command.min_args() || too_many {
            debug!("Wrong number of arguments for '{}': {}", cmd_name, cmd_args.len());
            return Reply::Usage(command.usage());
        }

        // Execute the command
        command.execute(&self.context, cmd_args)
    }

    /// Get reference to the context (for testing/inspection)
    pub fn context(&self) -> &CommandContext {
        &self.context
    }
}
