//! Prompt options — the `value[description]` notation.
//!
//! Options reach the prompts as raw strings, usually split off a single
//! `|`-separated command-line argument:
//!
//! ```text
//! fast[quick but lossy]|slow[exact]|auto
//! ```
//!
//! A trailing bracket group is the description; everything before the
//! *last* `[` is the value, so values may themselves contain brackets:
//! `a[b][c]` is value `a[b]` with description `c`.
//!
//! Widgets address options by position, never by value. Duplicate values
//! are allowed; a default that names a duplicated value selects its first
//! occurrence.

use std::fmt;

/// Separator between raw options (and between multi-select defaults).
pub const SEPARATOR: char = '|';

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Choice {
    /// What the prompt returns when this option is picked.
    pub value: String,
    /// Extra text shown after the value. May be empty.
    pub description: String,
}

impl Choice {
    /// Create an option from its parts.
    #[must_use]
    pub fn new(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: description.into(),
        }
    }

    /// Parse `value[description]`. Without a trailing bracket group the
    /// whole string is the value and the description is empty.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some(body) = raw.strip_suffix(']') {
            if let Some(open) = body.rfind('[') {
                return Self::new(&body[..open], &body[open + 1..]);
            }
        }
        Self::new(raw, "")
    }

    /// The text shown for this option: `value - description`, or just the
    /// value when there is no description.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            f.write_str(&self.value)
        } else {
            write!(f, "{} - {}", self.value, self.description)
        }
    }
}

/// Parse a `|`-separated list of raw options, keeping their order.
#[must_use]
pub fn parse_choices(raw: &str) -> Vec<Choice> {
    raw.split(SEPARATOR).map(Choice::parse).collect()
}

/// Split a `|`-separated list of values. An empty string is an empty list.
#[must_use]
pub fn split_values(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(SEPARATOR).map(str::to_owned).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
