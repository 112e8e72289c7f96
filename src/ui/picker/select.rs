//! The read / update / redraw loop for one flat selection.

use std::io::{self, Read, Stderr, Stdin, Write};

use crate::error::{SshwError, SshwResult};
use crate::ui::live_region::LiveRegion;
use crate::ui::session::TerminalSession;

use super::input::decode;
use super::render::{compose_frame, FrameStyle};
use super::state::{Outcome, SelectionState};
use super::Candidate;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Largest page size, the range of `--page-size`.
pub const MAX_PAGE_SIZE: usize = u16::MAX as usize;

/// Large enough for any key sequence the decoder understands.
const READ_CHUNK: usize = 64;

/// Input and output the picker talks to.
///
/// The prompt does not touch the terminal mode; callers hold a
/// [`TerminalSession`] for as long as the prompt is in use.
pub struct Prompt<R, W> {
    input: R,
    output: W,
    style: FrameStyle,
    page_size: usize,
}

impl Prompt<Stdin, Stderr> {
    /// Read keys from stdin and draw on stderr, leaving stdout untouched.
    pub fn stdio(style: FrameStyle) -> Self {
        Self::new(io::stdin(), io::stderr(), style)
    }
}

impl<R: Read, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W, style: FrameStyle) -> Self {
        Self {
            input,
            output,
            style,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Number of item rows in every frame, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Let the operator pick one of `items`.
    ///
    /// Returns the index into `items`, or `None` when the pick was cancelled.
    /// The frame is erased before returning.
    pub fn select_one<T: Candidate>(&mut self, label: &str, items: &[T]) -> SshwResult<Option<usize>> {
        let mut state = SelectionState::new(items);
        let mut region = LiveRegion::new();
        self.draw(&mut region, label, items, &state)?;

        let mut buf = [0u8; READ_CHUNK];
        loop {
            let n = self.input.read(&mut buf).map_err(SshwError::InputRead)?;
            if n == 0 {
                return Err(SshwError::InputRead(io::ErrorKind::UnexpectedEof.into()));
            }

            match state.apply(items, decode(&buf[..n])) {
                Outcome::Ignored => {}
                Outcome::Changed => self.draw(&mut region, label, items, &state)?,
                Outcome::Selected(index) => {
                    region.clear(&mut self.output)?;
                    return Ok(Some(index));
                }
                Outcome::Cancelled => {
                    region.clear(&mut self.output)?;
                    return Ok(None);
                }
            }
        }
    }

    fn draw<T: Candidate>(
        &mut self,
        region: &mut LiveRegion,
        label: &str,
        items: &[T],
        state: &SelectionState,
    ) -> SshwResult<()> {
        let frame = compose_frame(label, items, state, self.page_size, self.style);
        region.redraw(&mut self.output, &frame)?;
        Ok(())
    }
}

/// Pick one of `items` on the controlling terminal.
///
/// Takes the terminal for the duration of the pick and restores it on
/// every exit path. Returns `None` when the operator cancels.
pub fn select_one<T: Candidate>(
    label: &str,
    items: &[T],
    page_size: usize,
    style: FrameStyle,
) -> SshwResult<Option<usize>> {
    let _session = TerminalSession::acquire()?;
    Prompt::stdio(style)
        .with_page_size(page_size)
        .select_one(label, items)
}
