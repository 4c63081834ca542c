//! Shell module
//!
//! Runs the interactive read-dispatch-print loop over any async line source
//! and sink. The binary wires it to standard input and output.

mod session;

use crate::dispatch::Dispatcher;
use std::io;
use tokio::io::{AsyncRead, AsyncWrite, BufReader};
use tracing::info;

pub use session::{Session, SessionEnd};

/// Run one shell session until `exit` or end of input
pub async fn run<R, W>(dispatcher: &Dispatcher, input: R, output: W) -> io::Result<SessionEnd>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session::new(BufReader::new(input), output);
    let end = session.handle(dispatcher).await?;

    info!("Shell session ended: {:?}", end);
    Ok(end)
}
