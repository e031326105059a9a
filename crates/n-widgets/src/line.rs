//! Single-line text buffer for the input prompt.
//!
//! Tracks the text being typed and an edit position within it. The position
//! is a char offset in `[0, len]`; every operation keeps it in range.
//!
//! Editing operations mirror the usual readline bindings:
//!
//! | Operation            | Key     |
//! |----------------------|---------|
//! | [`TextBuffer::backspace`]   | `BS` / `DEL` |
//! | [`TextBuffer::move_home`]   | `Ctrl-A` |
//! | [`TextBuffer::move_end`]    | `Ctrl-E` |
//! | [`TextBuffer::delete_word`] | `Ctrl-W` |

/// Whether `ch` belongs to a word for [`TextBuffer::delete_word`]:
/// letters, digits and underscore.
#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

// ---------------------------------------------------------------------------
// TextBuffer
// ---------------------------------------------------------------------------

/// The input buffer and its edit position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,

    /// Number of chars in `text`, kept in step with every edit.
    chars: usize,

    /// Edit position within `text` (char offset, 0-indexed).
    cursor: usize,
}

impl TextBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            chars: 0,
            cursor: 0,
        }
    }

    /// Create a buffer holding `text` with the edit position at its end.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let chars = text.chars().count();
        Self {
            text: text.to_owned(),
            chars,
            cursor: chars,
        }
    }

    /// The current text.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the buffer, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// The edit position (char offset).
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the buffer.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chars
    }

    /// True if the buffer is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chars == 0
    }

    /// The text after the edit position.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.text[self.byte_at(self.cursor)..]
    }

    /// Insert `ch` at the edit position and step past it.
    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_at(self.cursor);
        self.text.insert(at, ch);
        self.chars += 1;
        self.cursor += 1;
    }

    /// Remove the character left of the edit position. `false` at the start
    /// of the line.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.remove_chars(self.cursor - 1);
        true
    }

    /// Delete backward to the start of the previous word.
    ///
    /// First removes any non-word characters directly before the edit
    /// position, then the run of word characters before those. Returns
    /// `true` if anything was deleted.
    pub fn delete_word(&mut self) -> bool {
        let mut before = self.text[..self.byte_at(self.cursor)].chars().rev().peekable();
        let mut span = 0;
        while before.next_if(|&ch| !is_word_char(ch)).is_some() {
            span += 1;
        }
        while before.next_if(|&ch| is_word_char(ch)).is_some() {
            span += 1;
        }
        if span == 0 {
            return false;
        }
        self.remove_chars(self.cursor - span);
        true
    }

    /// Move the edit position one character to the left.
    pub const fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the edit position one character to the right.
    pub const fn move_right(&mut self) {
        if self.cursor < self.chars {
            self.cursor += 1;
        }
    }

    /// Move the edit position to the beginning.
    pub const fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the edit position to the end.
    pub const fn move_end(&mut self) {
        self.cursor = self.chars;
    }

    /// Remove the chars in `from..cursor` and leave the edit position at
    /// `from`.
    fn remove_chars(&mut self, from: usize) {
        let range = self.byte_at(from)..self.byte_at(self.cursor);
        self.text.replace_range(range, "");
        self.chars -= self.cursor - from;
        self.cursor = from;
    }

    /// Byte index of char offset `at`; the text length when `at` is the end.
    fn byte_at(&self, at: usize) -> usize {
        self.text
            .char_indices()
            .nth(at)
            .map_or(self.text.len(), |(i, _)| i)
    }
}
