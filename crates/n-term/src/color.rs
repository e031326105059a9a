// SPDX-License-Identifier: MIT
//
// Prompt colours — three fixed foreground colours and an on/off switch.
//
// Prompts only ever colour their chrome: the `[?]` marker and the cursor
// row in cyan, the `[OK]` confirmation in green, the `Aborted.` notice in
// red. Whether colour is emitted at all is decided once, when the caller
// builds a `Palette`, and carried by value from there. Turning colour off
// never affects cursor motion or erase sequences, which are required for
// the redraw to work.

use std::fmt;

use crate::ansi::RESET;

// ─── Color ───────────────────────────────────────────────────────────────────

/// One of the three prompt colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Prompt markers and the highlighted row.
    Cyan,
    /// Success confirmation.
    Green,
    /// Abort notice.
    Red,
}

impl Color {
    /// Compact SGR foreground code (30-37 range).
    #[inline]
    #[must_use]
    pub const fn sgr(self) -> u8 {
        match self {
            Self::Red => 31,
            Self::Green => 32,
            Self::Cyan => 36,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.sgr())
    }
}

// ─── Palette ─────────────────────────────────────────────────────────────────

/// Wraps text in colour escapes, or passes it through untouched when colour
/// is disabled.
///
/// ```
/// use n_term::color::Palette;
///
/// assert_eq!(Palette::new(true).green("[OK]"), "\x1b[32m[OK]\x1b[0m");
/// assert_eq!(Palette::new(false).green("[OK]"), "[OK]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Create a palette. `enabled = false` produces plain text everywhere.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that never emits colour.
    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false)
    }

    /// Whether colour escapes are emitted.
    #[inline]
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Wrap `text` in `color` followed by an SGR reset.
    #[must_use]
    pub fn paint(self, color: Color, text: &str) -> String {
        if self.enabled {
            format!("{color}{text}{RESET}")
        } else {
            text.to_owned()
        }
    }

    /// Cyan: `[?]` markers and the highlighted row.
    ///
    /// ```
    /// use n_term::color::Palette;
    ///
    /// assert_eq!(Palette::new(true).cyan("> a"), "\x1b[36m> a\x1b[0m");
    /// assert_eq!(Palette::plain().cyan("> a"), "> a");
    /// ```
    #[must_use]
    pub fn cyan(self, text: &str) -> String {
        self.paint(Color::Cyan, text)
    }

    /// Green: the `[OK]` confirmation.
    #[must_use]
    pub fn green(self, text: &str) -> String {
        self.paint(Color::Green, text)
    }

    /// Red: the `Aborted.` notice.
    #[must_use]
    pub fn red(self, text: &str) -> String {
        self.paint(Color::Red, text)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
