// SPDX-License-Identifier: MIT
//
// Display width — how many terminal columns a character occupies.
//
// Only two answers exist here: 1 (narrow) or 2 (wide). The classification
// is a fixed table of East-Asian wide blocks. Everything below U+1100 is
// narrow without consulting the table, which covers ASCII and the Latin,
// Greek and Cyrillic families in a single comparison.
//
// The input widget is the only consumer: it needs the width of the text
// to the right of the edit position to know how far to move the terminal
// cursor back after redrawing the line.

/// First code point that can possibly be wide.
const NARROW_BELOW: u32 = 0x1100;

/// Inclusive code point ranges rendered two columns wide.
const WIDE_RANGES: &[(u32, u32)] = &[
    (0x1100, 0x115F),   // Hangul Jamo
    (0x2E80, 0xA4CF),   // CJK Radicals .. Yi (CJK compat)
    (0xAC00, 0xD7A3),   // Hangul Syllables
    (0xF900, 0xFAFF),   // CJK Compatibility Ideographs
    (0xFE10, 0xFE6F),   // Vertical / CJK Compatibility Forms
    (0xFF00, 0xFF60),   // Fullwidth Forms
    (0xFFE0, 0xFFE6),   // Fullwidth Symbols
    (0x20000, 0x2FFFD), // CJK Extension B .. F
];

/// Number of terminal columns `ch` occupies: 1 or 2.
#[inline]
#[must_use]
pub fn char_width(ch: char) -> usize {
    let cp = u32::from(ch);
    if cp < NARROW_BELOW {
        return 1;
    }
    if WIDE_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&cp))
    {
        2
    } else {
        1
    }
}

/// Sum of [`char_width`] over every character of `s`.
#[must_use]
pub fn str_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
