// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit; that is the `ScreenWriter`'s job. This
// module just knows the byte-level encoding of the handful of terminal
// commands a prompt needs: relative cursor motion, line and region erase,
// and cursor visibility. Colour lives in `color.rs`.
//
// All functions return `io::Result` propagated from the underlying writer.

use std::io::{self, Write};

/// Erase the whole current line (EL 2). The cursor column is unchanged.
pub const CLEAR_LINE: &str = "\x1b[2K";

/// Erase from the cursor to the end of the screen (ED 0).
pub const ERASE_BELOW: &str = "\x1b[J";

/// Hide the cursor (DECTCEM reset).
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show the cursor (DECTCEM set).
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Reset all SGR attributes (SGR 0).
pub const RESET: &str = "\x1b[0m";

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Move the cursor up `n` rows (CUU). Does nothing for `n == 0`, because
/// terminals read `CSI 0 A` as "up one".
#[inline]
pub fn cursor_up(w: &mut impl Write, n: usize) -> io::Result<()> {
    if n == 0 {
        return Ok(());
    }
    write!(w, "\x1b[{n}A")
}

/// Move the cursor left `n` columns (CUB). Does nothing for `n == 0`.
#[inline]
pub fn cursor_left(w: &mut impl Write, n: usize) -> io::Result<()> {
    if n == 0 {
        return Ok(());
    }
    write!(w, "\x1b[{n}D")
}

/// Hide the cursor (DECTCEM reset).
#[inline]
pub fn cursor_hide(w: &mut impl Write) -> io::Result<()> {
    w.write_all(CURSOR_HIDE.as_bytes())
}

/// Show the cursor (DECTCEM set).
#[inline]
pub fn cursor_show(w: &mut impl Write) -> io::Result<()> {
    w.write_all(CURSOR_SHOW.as_bytes())
}

// ─── Erase ───────────────────────────────────────────────────────────────────

/// Erase the current line (EL 2).
#[inline]
pub fn clear_line(w: &mut impl Write) -> io::Result<()> {
    w.write_all(CLEAR_LINE.as_bytes())
}

/// Return to column 0 and erase everything from there to the end of the
/// screen. Used after moving up to the first row of a drawn region.
#[inline]
pub fn erase_below(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\r")?;
    w.write_all(ERASE_BELOW.as_bytes())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
