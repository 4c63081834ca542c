//! Snapshot persistence module
//!
//! The whole table is written to a single file in a compact binary format
//! with a checksum. There is no journal: every save replaces the file.

mod codec;
mod reader;
mod writer;

pub use codec::{decode, encode, DecodeError, MAGIC};
pub use reader::SnapshotReader;
pub use writer::SnapshotWriter;
