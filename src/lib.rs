//! wkndb - an interactive store of named integer arrays
//!
//! The crate is layered so each module only depends on the ones above it:
//! - `store` and `snapshot` hold and persist the table
//! - `protocol` frames shell lines and renders replies
//! - `commands` and `dispatch` map a line to a store operation
//! - `shell` drives the read-dispatch-print loop

pub mod config;
pub mod protocol;
pub mod snapshot;
pub mod store;
pub mod commands;
pub mod dispatch;
pub mod shell;

/// Re-export commonly used types
pub use config::Config;
pub use store::{Store, StoreError};
pub use protocol::Reply;
pub use commands::{Command, CommandContext};
pub use dispatch::Dispatcher;
