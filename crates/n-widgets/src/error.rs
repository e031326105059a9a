//! Errors a prompt can end with.
//!
//! Only two kinds of failure exist. The user can abort (`q`, `Ctrl-C`,
//! `Ctrl-D`), which is an expected outcome rather than a bug, and the
//! terminal can fail, which is fatal: nothing is retried. Callers decide
//! what an abort means for them; the library never exits the process.

use std::io;

/// Why a prompt did not produce a value.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The user quit the prompt. Anything typed or toggled is discarded.
    #[error("aborted")]
    Aborted,

    /// A list prompt was given no options.
    #[error("no options to choose from")]
    NoChoices,

    /// Reading keys or drawing failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PromptError {
    /// True for a user-initiated abort.
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

/// Result of a prompt.
pub type Result<T> = std::result::Result<T, PromptError>;
