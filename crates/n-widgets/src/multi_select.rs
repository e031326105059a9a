//! Multi-select prompt.
//!
//! ```text
//! [?] Features:
//! > [x] tls
//!   [ ] gzip - smaller responses
//!   [x] http2
//! ```
//!
//! Movement and quitting work as in [`select`](crate::select); space
//! toggles the highlighted option. Enter returns every checked value in
//! list order.

use std::collections::BTreeSet;
use std::io::Write;

use n_term::input::{Action, KeySource};

use crate::choice::Choice;
use crate::cursor::ListCursor;
use crate::error::{PromptError, Result};
use crate::prompter::Prompter;

/// Shown in the confirmation line when nothing was checked.
const NONE_CHECKED: &str = "(none)";

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The set of checked option indices.
///
/// Indices, not values: with duplicate values each row is checked on its
/// own. Iteration is in ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    checked: BTreeSet<usize>,
}

impl Selection {
    /// An empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            checked: BTreeSet::new(),
        }
    }

    /// Check every option whose value appears in `defaults`.
    #[must_use]
    pub fn from_defaults(choices: &[Choice], defaults: &[String]) -> Self {
        let checked = choices
            .iter()
            .enumerate()
            .filter(|(_, c)| defaults.contains(&c.value))
            .map(|(i, _)| i)
            .collect();
        Self { checked }
    }

    /// Flip whether `index` is checked.
    pub fn toggle(&mut self, index: usize) {
        if !self.checked.remove(&index) {
            self.checked.insert(index);
        }
    }

    /// Whether the option at `index` is checked.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.checked.contains(&index)
    }

    /// Number of checked options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    /// True when nothing is checked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// The checked values, in list order.
    #[must_use]
    pub fn values(&self, choices: &[Choice]) -> Vec<String> {
        self.checked
            .iter()
            .filter_map(|&i| choices.get(i))
            .map(|c| c.value.clone())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

impl<K: KeySource, W: Write> Prompter<K, W> {
    /// Ask the user to check any number of `choices`.
    ///
    /// Options whose value is in `defaults` start checked and the highlight
    /// starts on the first row. Non-interactive sessions return `defaults`
    /// as given, without checking them against the options.
    ///
    /// # Errors
    ///
    /// [`PromptError::NoChoices`] for an empty list, [`PromptError::Aborted`]
    /// when the user quits, and [`PromptError::Io`] when the terminal fails.
    pub fn select_multi(
        &mut self,
        choices: &[Choice],
        prompt: &str,
        defaults: &[String],
    ) -> Result<Vec<String>> {
        let mut cursor = ListCursor::new(choices.len(), 0).ok_or(PromptError::NoChoices)?;

        if !self.is_interactive() {
            log::debug!("select_multi {prompt:?}: not a terminal, using defaults");
            return Ok(defaults.to_vec());
        }

        let mut selection = Selection::from_defaults(choices, defaults);
        self.with_hidden_cursor(|p| {
            p.draw_checklist(choices, prompt, cursor, &selection)?;
            loop {
                let key = p.keys.next_key()?;
                match Action::from_key(&key) {
                    Some(Action::Up) => cursor.up(),
                    Some(Action::Down) => cursor.down(),
                    Some(Action::Toggle) => selection.toggle(cursor.index()),
                    Some(Action::Enter) => break,
                    Some(Action::Quit) => return Err(PromptError::Aborted),
                    _ => {}
                }
                p.out.clear()?;
                p.draw_checklist(choices, prompt, cursor, &selection)?;
            }
            p.out.clear()?;
            Ok(())
        })?;

        let values = selection.values(choices);
        log::debug!("select_multi {prompt:?}: picked {values:?}");
        let shown = if values.is_empty() {
            NONE_CHECKED.to_owned()
        } else {
            values.join(", ")
        };
        self.confirm(prompt, &shown)?;
        Ok(values)
    }

    fn draw_checklist(
        &mut self,
        choices: &[Choice],
        prompt: &str,
        cursor: ListCursor,
        selection: &Selection,
    ) -> Result<()> {
        let rows = choices.iter().enumerate().map(|(i, c)| {
            let mark = if selection.contains(i) { 'x' } else { ' ' };
            format!("[{mark}] {}", c.label())
        });
        self.draw_list(prompt, rows, cursor.index())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::choice::{parse_choices, split_values};
    use crate::prompter::testing::*;

    use super::*;
    use pretty_assertions::assert_eq;

    fn abc() -> Vec<Choice> {
        parse_choices("a|b|c")
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|&v| v.to_owned()).collect()
    }

    // -- Selection ----------------------------------------------------------

    #[test]
    fn from_defaults_checks_matching_rows() {
        let sel = Selection::from_defaults(&abc(), &strings(&["c", "a", "zzz"]));
        assert_eq!(sel.len(), 2);
        assert!(sel.contains(0));
        assert!(!sel.contains(1));
        assert!(sel.contains(2));
    }

    #[test]
    fn from_defaults_checks_every_duplicate() {
        let choices = parse_choices("x|y|x");
        let sel = Selection::from_defaults(&choices, &strings(&["x"]));
        assert_eq!(sel.values(&choices), strings(&["x", "x"]));
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let mut sel = Selection::new();
        sel.toggle(1);
        assert!(sel.contains(1));
        sel.toggle(1);
        assert!(!sel.contains(1));
        assert!(sel.is_empty());
    }

    #[test]
    fn values_are_in_list_order() {
        let mut sel = Selection::new();
        sel.toggle(2);
        sel.toggle(0);
        assert_eq!(sel.values(&abc()), strings(&["a", "c"]));
    }

    // -- non-interactive ----------------------------------------------------

    #[test]
    fn piped_returns_defaults_unchanged() {
        let mut p = piped();
        let defaults = split_values("c|not-an-option");
        assert_eq!(p.select_multi(&abc(), "Pick", &defaults).unwrap(), defaults);
        assert_eq!(drawn(p), "");
    }

    #[test]
    fn piped_without_defaults_is_empty() {
        let mut p = piped();
        assert!(p.select_multi(&abc(), "Pick", &[]).unwrap().is_empty());
    }

    #[test]
    fn empty_choices_fail_fast() {
        let mut p = piped();
        let err = p.select_multi(&[], "Pick", &strings(&["a"])).unwrap_err();
        assert!(matches!(err, PromptError::NoChoices));
    }

    // -- interactive --------------------------------------------------------

    #[test]
    fn enter_returns_defaults_in_list_order() {
        let mut p = interactive(&[ENTER]);
        let got = p.select_multi(&abc(), "Pick", &strings(&["c", "a"])).unwrap();
        assert_eq!(got, strings(&["a", "c"]));
        assert!(drawn(p).ends_with("[OK] Pick: a, c\n"));
    }

    #[test]
    fn toggle_and_move() {
        let mut p = interactive(&[" ", DOWN, DOWN, " ", ENTER]);
        let got = p.select_multi(&abc(), "Pick", &[]).unwrap();
        assert_eq!(got, strings(&["a", "c"]));
    }

    #[test]
    fn toggle_unchecks_default() {
        let mut p = interactive(&[DOWN, " ", ENTER]);
        let got = p.select_multi(&abc(), "Pick", &strings(&["b"])).unwrap();
        assert!(got.is_empty());
        assert!(drawn(p).ends_with("[OK] Pick: (none)\n"));
    }

    #[test]
    fn cursor_wraps() {
        let mut p = interactive(&[UP, " ", "j", " ", ENTER]);
        let got = p.select_multi(&abc(), "Pick", &[]).unwrap();
        assert_eq!(got, strings(&["a", "c"]));
    }

    #[test]
    fn full_screen_protocol() {
        let mut p = interactive(&[" ", ENTER]);
        p.select_multi(&parse_choices("a|b[two]"), "Pick", &[])
            .unwrap();
        assert_eq!(
            drawn(p),
            concat!(
                "\x1b[?25l",
                "\x1b[2K[?] Pick:\n> [ ] a\n  [ ] b - two",
                "\x1b[2A\r\x1b[J",
                "\x1b[2K[?] Pick:\n> [x] a\n  [ ] b - two",
                "\x1b[2A\r\x1b[J",
                "\x1b[?25h",
                "[OK] Pick: a\n",
            )
        );
    }

    #[test]
    fn quit_discards_selection() {
        let mut p = interactive(&[" ", CTRL_C]);
        let err = p.select_multi(&abc(), "Pick", &[]).unwrap_err();
        assert!(err.is_aborted());
        let out = drawn(p);
        assert!(out.ends_with("\nAborted.\n"));
        assert!(!out.contains("[OK]"));
    }

    #[test]
    fn closed_input_is_io_error() {
        let mut p = interactive(&[" "]);
        let err = p.select_multi(&abc(), "Pick", &[]).unwrap_err();
        assert!(matches!(err, PromptError::Io(_)));
    }
}
