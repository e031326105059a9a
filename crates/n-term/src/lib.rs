// SPDX-License-Identifier: MIT
//
// n-term — Terminal plumbing for n-prompt.
//
// The layer under the prompts: it reads one whole keystroke at a time from
// a raw-mode terminal, maps it to a prompt action, measures display width
// for wide East-Asian glyphs, and writes output through a sink that knows
// exactly which screen region it has drawn so a redraw can erase that
// region and nothing else.
//
// Like the rest of the workspace, this crate talks to the terminal with
// ANSI escape sequences and raw termios directly. Prompts render inline,
// below the shell's scrollback, never on the alternate screen.

pub mod ansi;
pub mod color;
pub mod input;
pub mod terminal;
pub mod width;
pub mod writer;

pub use color::{Color, Palette};
pub use input::{Action, Key, KeySource};
pub use terminal::TtyKeys;
pub use writer::ScreenWriter;
