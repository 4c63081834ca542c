//! Command registry
//!
//! Centralized name → handler table for every shell command.

use super::{admin, array, key, Command};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of all available commands
pub struct CommandRegistry {
    commands: HashMap<&'static str, Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new command registry and register all commands
    pub fn new() -> Self {
        let mut registry = CommandRegistry {
            commands: HashMap::new(),
        };

        // Array commands
        registry.register(Arc::new(array::NewCommand));
        registry.register(Arc::new(array::ShowCommand));
        registry.register(Arc::new(array::MergeCommand));
        registry.register(Arc::new(array::SortCommand));

        // Key commands
        registry.register(Arc::new(key::DelCommand));

        // Admin commands
        registry.register(Arc::new(admin::ExitCommand));
        registry.register(Arc::new(admin::HelpCommand));

        registry
    }

    /// Register a command
    fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.insert(command.name(), command);
    }

    /// Get a command by name (case-sensitive)
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(name).cloned()
    }

    /// Check if a command exists
    #[cfg(test)]
    pub(crate) fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Get all command names, sorted
    #[cfg(test)]
    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
