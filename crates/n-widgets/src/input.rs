//! Single-line text prompt.
//!
//! ```text
//! [?] Name: Ada Lovel|
//! ```
//!
//! The line is redrawn in place on every keystroke and the terminal cursor
//! is parked at the edit position. `q`, `Ctrl-C` and `Ctrl-D` abort as in
//! the list prompts. The list-movement keys `j`, `k` and space have no
//! meaning here and are typed like any other printable character.

use std::io::Write;

use n_term::ansi::{self, CLEAR_LINE};
use n_term::input::{Action, KeySource};
use n_term::width::str_width;

use crate::error::{PromptError, Result};
use crate::line::TextBuffer;
use crate::prompter::Prompter;

impl<K: KeySource, W: Write> Prompter<K, W> {
    /// Ask the user for a line of text, pre-filled with `default`.
    ///
    /// Committing an empty line returns `default`. Non-interactive sessions
    /// return `default` without drawing.
    ///
    /// # Errors
    ///
    /// [`PromptError::Aborted`] when the user quits and [`PromptError::Io`]
    /// when the terminal fails.
    pub fn input(&mut self, prompt: &str, default: &str) -> Result<String> {
        if !self.is_interactive() {
            log::debug!("input {prompt:?}: not a terminal, using default");
            return Ok(default.to_owned());
        }

        self.out.forget();
        let mut buf = TextBuffer::from_text(default);
        loop {
            self.draw_line(prompt, &buf)?;
            let key = self.keys.next_key()?;

            match Action::from_key(&key) {
                Some(Action::Left) => buf.move_left(),
                Some(Action::Right) => buf.move_right(),
                Some(Action::Home) => buf.move_home(),
                Some(Action::End) => buf.move_end(),
                Some(Action::Backspace) => {
                    buf.backspace();
                }
                Some(Action::DeleteWord) => {
                    buf.delete_word();
                }
                Some(Action::Enter) => break,
                Some(Action::Quit) => {
                    self.abort_notice()?;
                    return Err(PromptError::Aborted);
                }
                // List movement has no meaning on a text line: `j`, `k` and
                // space are typed like any other character.
                Some(Action::Up | Action::Down | Action::Toggle) | None => {
                    if let Some(ch) = key.printable_char() {
                        buf.insert_char(ch);
                    }
                }
            }
        }

        let result = if buf.is_empty() {
            default.to_owned()
        } else {
            buf.into_text()
        };
        log::debug!("input {prompt:?}: committed {} chars", result.chars().count());

        let line = format!(
            "\r{CLEAR_LINE}{} {prompt}: {result}\n",
            self.palette.green("[OK]")
        );
        self.out.raw(&line)?;
        self.out.flush()?;
        Ok(result)
    }

    /// Repaint the prompt line and put the cursor at the edit position.
    fn draw_line(&mut self, prompt: &str, buf: &TextBuffer) -> Result<()> {
        let line = format!("\r{CLEAR_LINE}{}: {}", self.question(prompt), buf.text());
        self.out.raw(&line)?;
        ansi::cursor_left(self.out.get_mut(), str_width(buf.suffix()))?;
        self.out.flush()?;
        Ok(())
    }
}
