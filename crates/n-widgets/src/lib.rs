//! # n-widgets — Prompt widgets for n-prompt
//!
//! Three inline prompts on top of `n-term`, all driven through one
//! [`Prompter`] session:
//!
//! - **[`select`]** — pick one option from a list
//! - **[`multi_select`]** — check any number of options
//! - **[`input`]** — type a line of text
//!
//! Supporting types:
//!
//! - **[`choice`]** — `value[description]` options and `|`-separated lists
//! - **[`cursor`]** — wrapping list highlight
//! - **[`line`]** — text buffer with readline-style editing
//! - **[`error`]** — `PromptError`, including user abort
//!
//! Widgets never exit the process. Aborting returns
//! [`PromptError::Aborted`] after the terminal has been put back in order.

pub mod choice;
pub mod cursor;
pub mod error;
pub mod input;
pub mod line;
pub mod multi_select;
pub mod prompter;
pub mod select;

pub use choice::{Choice, parse_choices, split_values};
pub use cursor::ListCursor;
pub use error::{PromptError, Result};
pub use line::TextBuffer;
pub use multi_select::Selection;
pub use prompter::Prompter;
