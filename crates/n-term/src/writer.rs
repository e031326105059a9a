// SPDX-License-Identifier: MIT
//
// Region-tracking output for inline prompts.
//
// A prompt draws below the shell's scrollback, not on an alternate screen,
// so a redraw cannot just repaint the whole terminal. Instead the writer
// counts what it emitted since the last clear:
//
//   lines_written    — newline-terminated lines
//   has_partial_line — whether the last write left the cursor mid-line
//
// `clear()` walks the cursor back up exactly `lines_written` rows, returns
// to column 0 and erases to the end of the screen. The next frame then
// starts at the same spot as the previous one, so repeated redraws are
// idempotent and nothing stale survives above or below.
//
// Escapes that must not count towards the region (cursor visibility,
// notices printed after the region is gone) go through `raw()`.

use std::io::{self, Write};

use crate::ansi;

// ─── ScreenWriter ────────────────────────────────────────────────────────────

/// Output sink that remembers the screen region it has drawn.
///
/// Writes go straight to the inner writer; wrap it in a `BufWriter` and call
/// [`flush`](Self::flush) once per frame to get a single `write()` per
/// redraw.
///
/// # Example
///
/// ```
/// use n_term::writer::ScreenWriter;
///
/// let mut w = ScreenWriter::new(Vec::new());
/// w.writeln("[?] Pick one:")?;
/// w.write("> a\n  b")?;
/// assert_eq!(w.lines_written(), 2);
/// assert!(w.has_partial_line());
///
/// w.clear()?;
/// assert_eq!(w.lines_written(), 0);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct ScreenWriter<W: Write> {
    inner: W,
    lines_written: usize,
    has_partial_line: bool,
}

impl<W: Write> ScreenWriter<W> {
    /// Wrap `inner` with an empty region.
    pub const fn new(inner: W) -> Self {
        Self {
            inner,
            lines_written: 0,
            has_partial_line: false,
        }
    }

    /// Completed lines emitted since the last clear.
    #[inline]
    #[must_use]
    pub const fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Whether the cursor was left mid-line by the last write.
    #[inline]
    #[must_use]
    pub const fn has_partial_line(&self) -> bool {
        self.has_partial_line
    }

    /// Emit `text` and account for its newlines. Empty text is ignored and
    /// leaves the partial-line flag untouched.
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.inner.write_all(text.as_bytes())?;
        self.lines_written += text.bytes().filter(|&b| b == b'\n').count();
        self.has_partial_line = !text.ends_with('\n');
        Ok(())
    }

    /// Erase the current line, emit `text` and terminate it.
    pub fn writeln(&mut self, text: &str) -> io::Result<()> {
        ansi::clear_line(&mut self.inner)?;
        self.inner.write_all(text.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.lines_written += 1;
        self.has_partial_line = false;
        Ok(())
    }

    /// Erase the tracked region and leave the cursor at its top-left.
    ///
    /// Emits nothing when nothing was drawn. The counters are reset either
    /// way.
    pub fn clear(&mut self) -> io::Result<()> {
        let drawn = self.lines_written > 0 || self.has_partial_line;
        let up = self.lines_written;
        self.forget();
        if drawn {
            ansi::cursor_up(&mut self.inner, up)?;
            ansi::erase_below(&mut self.inner)?;
        }
        Ok(())
    }

    /// Drop the tracked region without erasing it. Whatever was drawn stays
    /// on screen as ordinary scrollback.
    pub const fn forget(&mut self) {
        self.lines_written = 0;
        self.has_partial_line = false;
    }

    /// Emit `text` without touching the tracked region.
    pub fn raw(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    /// Flush buffered output to the device.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Borrow the inner writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Borrow the inner writer for untracked escape output
    /// (see [`ansi`](crate::ansi)).
    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
