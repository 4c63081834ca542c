//! In-memory storage module
//!
//! Holds the name → integer-sequence table, its locking discipline and its
//! load/save path. Independent of command handling and of the shell.

mod error;
mod memory;
mod sequence;

pub use error::{NotFound, ParseError, StartupError, StoreError};
pub use memory::Store;
pub use sequence::{parse_sequence, render, Sequence};
