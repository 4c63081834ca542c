//! Shell protocol
//!
//! Line framing on the way in, [`Reply`] rendering on the way out.
//! Independent from the store and the commands.

mod line;
mod reply;

pub use line::{tokenize, PROMPT};
pub use reply::Reply;
