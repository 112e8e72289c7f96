use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

/// A block of lines at the bottom of the terminal that is redrawn in place.
///
/// Remembers how many lines the previous frame produced and erases exactly
/// that many before drawing the next one. Lines are terminated with `\r\n`
/// because the terminal is in raw mode while the region is live.
#[derive(Debug, Default)]
pub struct LiveRegion {
    last_lines: usize,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines the last frame occupied.
    pub fn last_lines(&self) -> usize {
        self.last_lines
    }

    /// Erase the previous frame, leaving the cursor where it started.
    pub fn clear(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.erase(out)?;
        out.flush()?;
        self.last_lines = 0;
        Ok(())
    }

    /// Replace the previous frame with `lines`.
    pub fn redraw(&mut self, out: &mut impl Write, lines: &[String]) -> io::Result<()> {
        self.erase(out)?;

        for line in lines {
            out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
            out.write_all(line.as_bytes())?;
            out.write_all(b"\r\n")?;
        }
        out.flush()?;

        self.last_lines = lines.len();
        Ok(())
    }

    fn erase(&self, out: &mut impl Write) -> io::Result<()> {
        for _ in 0..self.last_lines {
            out.queue(cursor::MoveUp(1))?;
            out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        }
        Ok(())
    }
}
