//! The prompt session: key input, tracked output and colour, bundled.
//!
//! A [`Prompter`] owns everything the three widgets need: a key source,
//! a region-tracking writer and a palette. It also carries the one decision that
//! changes their behaviour wholesale: whether the session is interactive.
//! A non-interactive prompter never reads a key or draws anything; each
//! widget returns its fallback value straight away.
//!
//! The widgets themselves live in [`select`](crate::select),
//! [`multi_select`](crate::multi_select) and [`input`](crate::input) as
//! further `impl` blocks on this type.
//!
//! # Screen protocol
//!
//! List widgets draw a header line plus one row per option, hide the
//! cursor while they run, and erase their whole region on commit before
//! printing a one-line `[OK]` confirmation. On abort they leave the last
//! frame on screen, show the cursor again and print `Aborted.` below it.

use std::io::{self, Write};

use n_term::ansi;
use n_term::color::Palette;
use n_term::input::KeySource;
use n_term::writer::ScreenWriter;

use crate::error::{PromptError, Result};

/// A prompt session over one key source and one output sink.
pub struct Prompter<K, W: Write> {
    pub(crate) keys: K,
    pub(crate) out: ScreenWriter<W>,
    pub(crate) palette: Palette,
    interactive: bool,
}

impl<K: KeySource, W: Write> Prompter<K, W> {
    /// Build a prompter from its parts.
    pub const fn new(keys: K, out: W, palette: Palette, interactive: bool) -> Self {
        Self {
            keys,
            out: ScreenWriter::new(out),
            palette,
            interactive,
        }
    }

    /// Whether widgets read keys and draw, or fall back to defaults.
    #[inline]
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Unwrap the output sink.
    pub fn into_output(self) -> W {
        self.out.into_inner()
    }

    // -- shared chrome ------------------------------------------------------

    /// `[?] prompt` with the marker coloured.
    pub(crate) fn question(&self, prompt: &str) -> String {
        format!("{} {prompt}", self.palette.cyan("[?]"))
    }

    /// Draw a list frame: the header, then one row per entry with the
    /// cursor row marked and coloured. The last row is left unterminated so
    /// the frame occupies exactly `rows + 1` lines.
    pub(crate) fn draw_list<I>(&mut self, prompt: &str, rows: I, cursor: usize) -> io::Result<()>
    where
        I: ExactSizeIterator<Item = String>,
    {
        let header = format!("{}:", self.question(prompt));
        self.out.writeln(&header)?;

        let last = rows.len().saturating_sub(1);
        for (i, row) in rows.enumerate() {
            if i == cursor {
                let marked = self.palette.cyan(&format!("> {row}"));
                self.out.write(&marked)?;
            } else {
                self.out.write(&format!("  {row}"))?;
            }
            if i < last {
                self.out.write("\n")?;
            }
        }
        self.out.flush()
    }

    /// Run `body` with the terminal cursor hidden.
    ///
    /// The cursor is shown again on every exit path. When `body` aborts,
    /// the abort notice follows.
    pub(crate) fn with_hidden_cursor<T>(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.out.forget();
        ansi::cursor_hide(self.out.get_mut())?;

        let result = body(self);

        let shown = ansi::cursor_show(self.out.get_mut()).and_then(|()| self.out.flush());
        match result {
            Err(PromptError::Aborted) => {
                self.abort_notice()?;
                Err(PromptError::Aborted)
            }
            Err(e) => Err(e),
            Ok(value) => {
                shown?;
                Ok(value)
            }
        }
    }

    /// Print `[OK] prompt: shown` on its own line.
    pub(crate) fn confirm(&mut self, prompt: &str, shown: &str) -> io::Result<()> {
        let line = format!("{} {prompt}: {shown}\n", self.palette.green("[OK]"));
        self.out.raw(&line)?;
        self.out.flush()
    }

    /// Print the abort notice below whatever is on screen.
    pub(crate) fn abort_notice(&mut self) -> io::Result<()> {
        log::debug!("prompt aborted");
        let notice = format!("\n{}\n", self.palette.red("Aborted."));
        self.out.raw(&notice)?;
        self.out.flush()
    }
}

// ---------------------------------------------------------------------------
// Test support
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::io;

    use n_term::color::Palette;
    use n_term::input::{Key, KeySource};

    use super::Prompter;

    /// Replays a fixed list of keystrokes, then reports end of input.
    pub struct ScriptedKeys {
        keys: VecDeque<Key>,
    }

    impl KeySource for ScriptedKeys {
        fn next_key(&mut self) -> io::Result<Key> {
            self.keys
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "terminal input closed"))
        }
    }

    pub type TestPrompter = Prompter<ScriptedKeys, Vec<u8>>;

    /// An interactive, colourless prompter that will receive `keys`.
    pub fn interactive(keys: &[&str]) -> TestPrompter {
        let keys = ScriptedKeys {
            keys: keys.iter().map(|&k| Key::from(k)).collect(),
        };
        Prompter::new(keys, Vec::new(), Palette::plain(), true)
    }

    /// A non-interactive prompter. Reading a key from it fails.
    pub fn piped() -> TestPrompter {
        let keys = ScriptedKeys {
            keys: VecDeque::new(),
        };
        Prompter::new(keys, Vec::new(), Palette::plain(), false)
    }

    /// Everything the prompter has drawn so far.
    pub fn drawn(p: TestPrompter) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    pub const UP: &str = "\x1b[A";
    pub const DOWN: &str = "\x1b[B";
    pub const LEFT: &str = "\x1b[D";
    pub const RIGHT: &str = "\x1b[C";
    pub const ENTER: &str = "\r";
    pub const CTRL_A: &str = "\x01";
    pub const CTRL_C: &str = "\x03";
    pub const CTRL_D: &str = "\x04";
    pub const CTRL_E: &str = "\x05";
    pub const CTRL_W: &str = "\x17";
    pub const BACKSPACE: &str = "\x7f";
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn piped_is_not_interactive() {
        assert!(!piped().is_interactive());
        assert!(interactive(&[]).is_interactive());
    }

    #[test]
    fn draw_list_marks_cursor_row_and_leaves_last_row_open() {
        let mut p = interactive(&[]);
        let rows = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
        p.draw_list("Pick", rows.into_iter(), 1).unwrap();
        assert_eq!(p.out.lines_written(), 3);
        assert!(p.out.has_partial_line());
        assert_eq!(drawn(p), "\x1b[2K[?] Pick:\n  a\n> b\n  c");
    }

    #[test]
    fn draw_list_colours_cursor_row() {
        let mut p = interactive(&[]);
        p.palette = Palette::new(true);
        p.draw_list("Pick", vec!["a".to_owned()].into_iter(), 0).unwrap();
        assert_eq!(
            drawn(p),
            "\x1b[2K\x1b[36m[?]\x1b[0m Pick:\n\x1b[36m> a\x1b[0m"
        );
    }

    #[test]
    fn hidden_cursor_is_restored_on_error() {
        let mut p = interactive(&[]);
        let result: Result<()> = p.with_hidden_cursor(|p| {
            p.keys.next_key()?;
            Ok(())
        });
        assert!(matches!(result, Err(PromptError::Io(_))));
        assert_eq!(drawn(p), "\x1b[?25l\x1b[?25h");
    }

    #[test]
    fn hidden_cursor_abort_prints_notice_after_showing_cursor() {
        let mut p = interactive(&[]);
        let result: Result<()> = p.with_hidden_cursor(|_| Err(PromptError::Aborted));
        assert!(result.unwrap_err().is_aborted());
        assert_eq!(drawn(p), "\x1b[?25l\x1b[?25h\nAborted.\n");
    }

    #[test]
    fn confirm_line() {
        let mut p = interactive(&[]);
        p.confirm("Name", "bob").unwrap();
        assert_eq!(drawn(p), "[OK] Name: bob\n");
    }
}
