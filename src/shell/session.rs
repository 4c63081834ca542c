//! Session handling
//!
//! Drives one interactive session: prompt, read a line, dispatch, write the
//! reply, until `exit` or end of input.

use crate::dispatch::Dispatcher;
use crate::protocol::{Reply, PROMPT};
use bytes::{BufMut, BytesMut};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The `exit` command ran (the store was saved, or the failure reported)
    Exit,

    /// Input closed before `exit`; nothing was saved
    EndOfInput,
}

/// Session handler
pub struct Session<R, W> {
    /// Buffered input
    reader: R,

    /// Raw bytes of the line being read
    read_buffer: Vec<u8>,

    /// Output sink
    writer: W,

    /// Write buffer
    write_buffer: BytesMut,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create a new session handler
    pub fn new(reader: R, writer: W) -> Self {
        Session {
            reader,
            read_buffer: Vec::with_capacity(256),
            writer,
            write_buffer: BytesMut::with_capacity(1024),
        }
    }

    /// Handle the session
    ///
    /// Reads lines, dispatches them, and writes replies.
    pub async fn handle(&mut self, dispatcher: &Dispatcher) -> io::Result<SessionEnd> {
        loop {
            self.send_raw(PROMPT).await?;

            let line = match self.read_line().await? {
                Some(line) => line,
                None => {
                    info!("End of input without exit, changes since the last save are discarded");
                    return Ok(SessionEnd::EndOfInput);
                }
            };

            let reply = match dispatcher.dispatch_line(&line) {
                Some(reply) => reply,
                None => continue,
            };

            if reply.is_error() {
                debug!("Recovered: {}", reply);
            } else {
                debug!("Reply: {:?}", reply);
            }
            self.send_reply(&reply).await?;

            if reply.is_exit() {
                return Ok(SessionEnd::Exit);
            }
        }
    }

    /// Read one line, without its terminator
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// garbled line is dispatched like any other.
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        self.read_buffer.clear();
        if self.reader.read_until(b'\n', &mut self.read_buffer).await? == 0 {
            return Ok(None);
        }

        let mut line = &self.read_buffer[..];
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }

        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }

    /// Give back the output sink
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Send a reply followed by a newline
    async fn send_reply(&mut self, reply: &Reply) -> io::Result<()> {
        let text = format!("{}\n", reply);
        self.send_raw(&text).await
    }

    async fn send_raw(&mut self, text: &str) -> io::Result<()> {
        self.write_buffer.clear();
        self.write_buffer.put_slice(text.as_bytes());

        self.writer.write_all(&self.write_buffer).await?;
        self.writer.flush().await?;

        Ok(())
    }
}
