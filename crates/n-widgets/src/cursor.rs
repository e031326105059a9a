//! List cursor — the highlighted row of a select prompt.
//!
//! The cursor is an index into a non-empty option list. Moving past either
//! end wraps around: up from the first row lands on the last, down from the
//! last lands on the first. A cursor over an empty list cannot be built,
//! so the modulo arithmetic never divides by zero.

/// Highlighted row in a list of `len` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCursor {
    index: usize,
    len: usize,
}

impl ListCursor {
    /// A cursor at `index` (clamped to the last row) over `len` rows.
    /// Returns `None` when `len` is zero.
    #[must_use]
    pub fn new(len: usize, index: usize) -> Option<Self> {
        let last = len.checked_sub(1)?;
        Some(Self {
            index: index.min(last),
            len,
        })
    }

    /// The highlighted row.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Move up one row, wrapping from the first to the last.
    pub const fn up(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Move down one row, wrapping from the last to the first.
    pub const fn down(&mut self) {
        self.index = (self.index + 1) % self.len;
    }
}
