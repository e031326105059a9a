// SPDX-License-Identifier: MIT
//
// Keystroke decoding and the prompt key map.
//
// A prompt needs far less than a full terminal input parser: no mouse, no
// paste, no modifiers. What it does need is to hand back one *whole*
// keystroke per read, so that an arrow key never shows up as a stray ESC
// followed by `[A`, and a UTF-8 character never shows up as its lead byte.
//
// Decoding rules, applied to the first byte of a keystroke:
//
//   ESC (0x1b)  — drain up to two more bytes that are already pending:
//                 `ESC [ A` is one token, a lone ESC is a token too.
//   >= 0x80     — drain every pending byte: a multi-byte character (or a
//                 truncated one, returned as-is).
//   otherwise   — the single byte is the token.
//
// The draining reads are non-blocking and best effort. "Nothing pending"
// ends the token, it is never an error.
//
// # Design
//
// Decoding is written against the `ByteSource` trait so it runs the same
// over a raw-mode terminal (`terminal::RawMode`) and over a scripted
// source in tests. The key map is a static table from raw tokens to the
// closed `Action` enum, resolved once per keystroke.

use std::fmt;
use std::io;

/// ESC — lead byte of every CSI sequence.
pub const ESC: u8 = 0x1b;

/// Continuation bytes drained after ESC: enough for `ESC [ X`.
const ESC_TAIL: usize = 2;

// ─── Key ────────────────────────────────────────────────────────────────────

/// One decoded keystroke: the raw bytes the terminal sent for it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Key {
    bytes: Vec<u8>,
}

impl Key {
    /// Wrap raw keystroke bytes.
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The raw bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The token as text, if it is valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    /// The token as a character, if it is exactly one.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.as_str()?.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }

    /// The token as a character that can be inserted into text: exactly one
    /// character that is neither a control nor a format character, and not
    /// whitespace other than a plain space.
    #[must_use]
    pub fn printable_char(&self) -> Option<char> {
        self.as_char().filter(|&ch| {
            !ch.is_control() && !is_format_char(ch) && (ch == ' ' || !ch.is_whitespace())
        })
    }
}

/// Invisible formatting characters (soft hyphen, zero-width and direction
/// marks, word joiner, BOM). They take no column, so they never count as
/// typed text.
const fn is_format_char(ch: char) -> bool {
    matches!(
        ch,
        '\u{00AD}' | '\u{200B}'..='\u{200F}' | '\u{2060}'..='\u{2064}' | '\u{FEFF}'
    )
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes().to_vec())
    }
}

impl From<&[u8]> for Key {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes.to_vec())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({:?})", self.bytes.escape_ascii().to_string())
    }
}

// ─── Action ─────────────────────────────────────────────────────────────────

/// What a keystroke means to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    /// Commit the prompt.
    Enter,
    /// Flip the current row in a multi-select.
    Toggle,
    /// Abort the prompt.
    Quit,
    Backspace,
    Home,
    End,
    /// Kill the word before the edit position.
    DeleteWord,
}

/// Raw token → action bindings.
#[rustfmt::skip]
const KEYMAP: &[(&[u8], Action)] = &[
    (b"\x1b[A", Action::Up),
    (b"\x1b[B", Action::Down),
    (b"\x1b[C", Action::Right),
    (b"\x1b[D", Action::Left),
    (b"k",      Action::Up),
    (b"j",      Action::Down),
    (b"\r",     Action::Enter),
    (b"\n",     Action::Enter),
    (b" ",      Action::Toggle),
    (b"q",      Action::Quit),
    (b"\x03",   Action::Quit),       // Ctrl-C
    (b"\x04",   Action::Quit),       // Ctrl-D
    (b"\x7f",   Action::Backspace),  // DEL
    (b"\x08",   Action::Backspace),  // Ctrl-H
    (b"\x01",   Action::Home),       // Ctrl-A
    (b"\x05",   Action::End),        // Ctrl-E
    (b"\x17",   Action::DeleteWord), // Ctrl-W
];

impl Action {
    /// Look up the action bound to `key`. `None` means the key has no
    /// binding and is passed through as literal input.
    #[must_use]
    pub fn from_key(key: &Key) -> Option<Self> {
        Self::from_bytes(key.as_bytes())
    }

    /// Look up the action bound to a raw token.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        KEYMAP
            .iter()
            .find(|(token, _)| *token == bytes)
            .map(|&(_, action)| action)
    }
}

// ─── Decoding ───────────────────────────────────────────────────────────────

/// A byte-at-a-time input that can tell "blocked" from "nothing pending".
pub trait ByteSource {
    /// Block until one byte is available and return it.
    ///
    /// # Errors
    ///
    /// End of input is `ErrorKind::UnexpectedEof`. Any OS failure is
    /// propagated.
    fn read_byte(&mut self) -> io::Result<u8>;

    /// Return the next byte if one is already pending, without waiting.
    ///
    /// # Errors
    ///
    /// OS failures other than "would block" are propagated.
    fn read_pending(&mut self) -> io::Result<Option<u8>>;
}

/// Read one whole keystroke from `src`.
///
/// # Errors
///
/// Propagates errors from the source. Running out of pending bytes while
/// draining an escape or multi-byte sequence is not an error.
pub fn read_key(src: &mut impl ByteSource) -> io::Result<Key> {
    let first = src.read_byte()?;
    let mut bytes = vec![first];

    if first == ESC {
        for _ in 0..ESC_TAIL {
            match src.read_pending()? {
                Some(b) => bytes.push(b),
                None => break,
            }
        }
    } else if first >= 0x80 {
        while let Some(b) = src.read_pending()? {
            bytes.push(b);
        }
    }

    let key = Key::from_bytes(bytes);
    log::trace!("decoded {key:?}");
    Ok(key)
}

/// Anything that yields keystrokes to a prompt.
pub trait KeySource {
    /// Block until the next keystroke and return it.
    ///
    /// # Errors
    ///
    /// Terminal failures are propagated; there is no retry.
    fn next_key(&mut self) -> io::Result<Key>;
}

// ─── Tests ──────────────────────────────────────────────────────────────────
