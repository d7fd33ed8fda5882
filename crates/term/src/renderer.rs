//! TerminalRenderer: the crossterm-backed output collaborator.
//!
//! Cells arrive one at a time through [`CellSink::put`] and are queued as
//! crossterm commands into a reusable byte buffer; [`TerminalRenderer::flush`]
//! writes the whole frame to stdout at once.
//!
//! [`with_session`] brackets a run between [`TerminalSession::enter`] and
//! [`TerminalSession::exit`]; the exit is attempted on every path, including
//! an `enter` that failed halfway (raw mode on, first flush failed).

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crossterm::{cursor, event, style::Print, terminal, QueueableCommand};

use crate::fb::CellSink;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    /// Where the terminal cursor sits after the last queued glyph, if known.
    cursor: Option<(u16, u16)>,
    /// Lowest row written so far; the cursor is parked below it on exit.
    max_row: u16,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
            cursor: None,
            max_row: 0,
        }
    }

    /// Write everything queued since the last flush.
    pub fn flush(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

/// Something that takes over the terminal and must hand it back.
pub trait TerminalSession {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
}

impl TerminalSession for TerminalRenderer {
    /// Raw mode, hidden cursor, no wrapping, focus reports, blank screen.
    ///
    /// The screen is cleared so it matches a freshly created (blank) present grid.
    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(event::EnableFocusChange)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.cursor = Some((0, 0));
        self.flush()?;
        debug!("terminal session entered");
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, self.max_row))?;
        self.buf.queue(Print("\r\n"))?;
        self.buf.queue(event::DisableFocusChange)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.cursor = None;
        // Raw mode goes even if the restore sequence could not be written.
        let flushed = self.flush();
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        flushed?;
        debug!("terminal session restored");
        Ok(())
    }
}

/// Enter `session`, run `body` only if that worked, then always try to exit.
///
/// The first error wins: a failed `enter` or `body` is returned even when the
/// exit succeeds, and an exit failure after a clean run is returned too. An
/// exit failure that follows an earlier error is only logged.
pub fn with_session<S, T, F>(session: &mut S, body: F) -> Result<T>
where
    S: TerminalSession + ?Sized,
    F: FnOnce(&mut S) -> Result<T>,
{
    let result = session.enter().and_then(|()| body(session));
    match (result, session.exit()) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(err)) => Err(err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(exit_err)) => {
            warn!(?exit_err, "failed to restore terminal");
            Err(err)
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CellSink for TerminalRenderer {
    fn put(&mut self, x: u16, y: u16, ch: char) -> Result<()> {
        self.max_row = self.max_row.max(y);
        encode_put_into(&mut self.buf, &mut self.cursor, x, y, ch)
    }
}

/// Queue one positioned glyph into `out`.
///
/// The `MoveTo` is skipped when `at` already holds `(x, y)`; afterwards
/// `at` points one column to the right, where the terminal leaves it.
pub fn encode_put_into(
    out: &mut Vec<u8>,
    at: &mut Option<(u16, u16)>,
    x: u16,
    y: u16,
    ch: char,
) -> Result<()> {
    if *at != Some((x, y)) {
        out.queue(cursor::MoveTo(x, y))?;
    }
    out.queue(Print(ch))?;
    *at = Some((x.saturating_add(1), y));
    Ok(())
}
