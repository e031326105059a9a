// SPDX-License-Identifier: MIT
//
// Process-level settings, read once at startup.
//
// Two things vary between runs: whether prompts may colour their chrome
// (NO_COLOR, https://no-color.org) and whether there is a terminal to
// prompt on at all (isatty on stdin). Both are resolved here and handed to
// the widgets explicitly; nothing below this layer reads the environment.

use std::env;
use std::ffi::OsStr;

use n_term::color::Palette;
use n_term::terminal;

/// Environment variable that turns colour off when set to anything
/// non-empty.
const NO_COLOR: &str = "NO_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Wrap `[?]`, `[OK]`, the cursor row and `Aborted.` in colour.
    pub color: bool,
    /// Read keys and draw; otherwise every prompt returns its fallback.
    pub interactive: bool,
}

impl Config {
    #[must_use]
    pub const fn new(color: bool, interactive: bool) -> Self {
        Self { color, interactive }
    }

    /// Resolve settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let color = color_enabled(env::var_os(NO_COLOR).as_deref());
        let config = Self::new(color, terminal::is_tty());
        log::debug!("{config:?}");
        config
    }

    /// The palette the widgets should draw with.
    #[must_use]
    pub const fn palette(self) -> Palette {
        Palette::new(self.color)
    }
}

/// Colour stays on unless `NO_COLOR` holds a non-empty value.
fn color_enabled(no_color: Option<&OsStr>) -> bool {
    no_color.is_none_or(OsStr::is_empty)
}
