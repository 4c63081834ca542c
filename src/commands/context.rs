//! Command execution context

use crate::store::Store;
use std::sync::Arc;

/// Context provided to commands during execution
///
/// The store is injected here at construction; commands never reach for a
/// global.
pub struct CommandContext {
    /// The shared store
    pub store: Arc<Store>,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(store: Arc<Store>) -> Self {
        CommandContext { store }
    }
}
