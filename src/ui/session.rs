//! Exclusive raw-mode ownership of the terminal.
//!
//! [`TerminalSession`] is a guard: acquiring it puts the terminal into raw
//! mode and hides the cursor, dropping it restores both. Every return path
//! of the owner, including `?` propagation, releases the terminal exactly
//! once.

use std::io::{self, Write};

use crossterm::{cursor, execute, terminal};

use crate::error::{SshwError, SshwResult};

/// Switches the terminal device in and out of interactive mode.
pub trait TerminalMode {
    fn enter(&mut self) -> io::Result<()>;
    fn leave(&mut self) -> io::Result<()>;
}

/// Raw mode through crossterm; cursor visibility is toggled on stderr,
/// the stream the picker draws on.
#[derive(Debug, Default)]
pub struct RawMode;

impl TerminalMode for RawMode {
    fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(io::stderr(), cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        let shown = execute!(io::stderr(), cursor::Show);
        let restored = terminal::disable_raw_mode();
        io::stderr().flush()?;
        shown.and(restored)
    }
}

/// Guard holding the terminal in interactive mode.
#[derive(Debug)]
pub struct TerminalSession<M: TerminalMode = RawMode> {
    mode: M,
}

impl TerminalSession<RawMode> {
    pub fn acquire() -> SshwResult<Self> {
        Self::acquire_with(RawMode)
    }
}

impl<M: TerminalMode> TerminalSession<M> {
    pub fn acquire_with(mut mode: M) -> SshwResult<Self> {
        mode.enter().map_err(SshwError::TerminalAcquire)?;
        Ok(Self { mode })
    }
}

impl<M: TerminalMode> Drop for TerminalSession<M> {
    fn drop(&mut self) {
        // Nothing useful can be done if restoring fails while unwinding.
        let _ = self.mode.leave();
    }
}
