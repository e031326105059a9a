//! Single-select prompt.
//!
//! ```text
//! [?] Pick a profile:
//! > fast - quick but lossy
//!   slow - exact
//!   auto
//! ```
//!
//! `↑`/`k` and `↓`/`j` move the highlight (wrapping at both ends), Enter
//! picks the highlighted value, `q`/`Ctrl-C`/`Ctrl-D` abort. Any other key
//! just redraws.

use std::io::Write;

use n_term::input::{Action, KeySource};

use crate::choice::Choice;
use crate::cursor::ListCursor;
use crate::error::{PromptError, Result};
use crate::prompter::Prompter;

impl<K: KeySource, W: Write> Prompter<K, W> {
    /// Ask the user to pick one of `choices`.
    ///
    /// The highlight starts on the first option whose value is `default`,
    /// or on the first option. Non-interactive sessions return `default`
    /// when it names an option and the first option's value otherwise.
    ///
    /// # Errors
    ///
    /// [`PromptError::NoChoices`] for an empty list (before any I/O),
    /// [`PromptError::Aborted`] when the user quits, and
    /// [`PromptError::Io`] when the terminal fails.
    pub fn select(&mut self, choices: &[Choice], prompt: &str, default: &str) -> Result<String> {
        let start = choices.iter().position(|c| c.value == default);
        let mut cursor =
            ListCursor::new(choices.len(), start.unwrap_or(0)).ok_or(PromptError::NoChoices)?;

        if !self.is_interactive() {
            let index = start.unwrap_or(0);
            log::debug!("select {prompt:?}: not a terminal, using option {index}");
            return Ok(choices[index].value.clone());
        }

        let index = self.with_hidden_cursor(|p| {
            p.draw_select(choices, prompt, cursor)?;
            loop {
                let key = p.keys.next_key()?;
                match Action::from_key(&key) {
                    Some(Action::Up) => cursor.up(),
                    Some(Action::Down) => cursor.down(),
                    Some(Action::Enter) => break,
                    Some(Action::Quit) => return Err(PromptError::Aborted),
                    _ => {}
                }
                p.out.clear()?;
                p.draw_select(choices, prompt, cursor)?;
            }
            p.out.clear()?;
            Ok(cursor.index())
        })?;

        let value = choices[index].value.clone();
        log::debug!("select {prompt:?}: picked {value:?}");
        self.confirm(prompt, &value)?;
        Ok(value)
    }

    fn draw_select(&mut self, choices: &[Choice], prompt: &str, cursor: ListCursor) -> Result<()> {
        let rows = choices.iter().map(Choice::label);
        self.draw_list(prompt, rows, cursor.index())?;
        Ok(())
    }
}
