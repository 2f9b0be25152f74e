//! Dev-server session: waits for the operator to quit.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Key that ends the session.
pub const QUIT_KEY: &str = "q";

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The operator asked to stop the dev server.
    Quit,
    /// Input closed; the dev server is left running.
    InputClosed,
}

/// Read lines until one is the quit key.
pub async fn wait_for_quit<R>(input: R) -> io::Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().eq_ignore_ascii_case(QUIT_KEY) {
            return Ok(SessionEnd::Quit);
        }
    }
    Ok(SessionEnd::InputClosed)
}
