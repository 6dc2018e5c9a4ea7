//! Immutable text snapshot over a rope.
//!
//! [`Text`] wraps [`ropey::Rope`] and exposes the UTF-16 code-unit indexed
//! surface the rest of the engine consumes. All offsets throughout the
//! crate are code-unit offsets (an astral scalar occupies two), never byte
//! offsets. A snapshot is never mutated: edits produce a new `Text`, so any
//! number of views and fragments may keep reading the old one.

use crate::codepoint::CodeUnits;
use crate::error::{Error, Result};
use crate::range::TextRange;
use ropey::Rope;

/// An immutable handle to the full content backing store.
///
/// Cloning is cheap (the rope shares its tree). `char_count` and
/// `line_count` are O(1); indexed lookups are O(log n) against the rope.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Text {
    rope: Rope,
}

impl Text {
    /// Create an empty text.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a text from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Total length in UTF-16 code units. O(1).
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.rope.len_utf16_cu()
    }

    /// Number of lines. O(1). Empty text contains exactly one empty line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Check if the text holds no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// The full range `[0, char_count)`.
    #[must_use]
    pub fn full_range(&self) -> TextRange {
        TextRange::of(0, self.char_count())
    }

    /// The backing rope, for siblings that run their own descents.
    pub(crate) const fn rope(&self) -> &Rope {
        &self.rope
    }

    /// The code unit at `offset`. O(log n).
    ///
    /// For an astral scalar this resolves to the high or low surrogate
    /// half depending on which unit the offset addresses. Requires
    /// `offset < char_count()`.
    pub(crate) fn unit_at(&self, offset: usize) -> u16 {
        let char_idx = self.rope.utf16_cu_to_char(offset);
        let value = self.rope.char(char_idx) as u32;
        if value < 0x10000 {
            value as u16
        } else if offset == self.rope.char_to_utf16_cu(char_idx) {
            (0xD800 + ((value - 0x10000) >> 10)) as u16
        } else {
            (0xDC00 + ((value - 0x10000) & 0x3FF)) as u16
        }
    }

    /// Extract `[from, to)` as an owned string.
    ///
    /// Offsets are clamped to the text length; an offset splitting a
    /// surrogate pair is rounded down to the scalar boundary.
    #[must_use]
    pub fn string(&self, from: usize, to: usize) -> String {
        let len = self.char_count();
        let from = from.min(to).min(len);
        let to = to.min(len);
        let fc = self.rope.utf16_cu_to_char(from);
        let tc = self.rope.utf16_cu_to_char(to);
        self.rope.slice(fc..tc).to_string()
    }

    /// Start offset of a line. O(log n).
    ///
    /// A line number past the last line maps to the end of the text.
    #[must_use]
    pub fn line_start_offset(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            self.char_count()
        } else {
            self.rope.char_to_utf16_cu(self.rope.line_to_char(line))
        }
    }

    /// Line number at an offset (count of preceding line separators).
    /// O(log n). The offset is clamped to the text length.
    #[must_use]
    pub fn line_at_offset(&self, offset: usize) -> usize {
        let char_idx = self
            .rope
            .utf16_cu_to_char(offset.min(self.char_count()));
        self.rope.char_to_line(char_idx)
    }

    /// Produce a new snapshot with `range` replaced by `replacement`.
    ///
    /// The receiver is untouched; concurrent readers of this snapshot are
    /// unaffected.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfBounds`] if the range extends past the end
    /// of the text.
    pub fn replaced(&self, range: TextRange, replacement: &str) -> Result<Self> {
        let len = self.char_count();
        if range.end() > len {
            return Err(Error::OutOfBounds {
                index: range.end(),
                len,
            });
        }
        let fc = self.rope.utf16_cu_to_char(range.start());
        let tc = self.rope.utf16_cu_to_char(range.end());
        let mut rope = self.rope.clone();
        rope.remove(fc..tc);
        rope.insert(fc, replacement);
        Ok(Self { rope })
    }

    /// Convert the whole text to a string.
    #[must_use]
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }
}

impl CodeUnits for Text {
    fn unit_count(&self) -> usize {
        self.char_count()
    }

    fn unit(&self, offset: usize) -> u16 {
        self.unit_at(offset)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let text = Text::from_str("Hello, world!");
        assert_eq!(text.char_count(), 13);
        assert_eq!(text.line_count(), 1);

        let empty = Text::new();
        assert_eq!(empty.char_count(), 0);
        assert_eq!(empty.line_count(), 1);
    }

    #[test]
    fn test_utf16_offsets() {
        // 😀 is one scalar, two code units.
        let text = Text::from_str("a😀b");
        assert_eq!(text.char_count(), 4);
        assert_eq!(text.unit_at(0), 0x61);
        assert_eq!(text.unit_at(1), 0xD83D);
        assert_eq!(text.unit_at(2), 0xDE00);
        assert_eq!(text.unit_at(3), 0x62);
    }

    #[test]
    fn test_string_extraction() {
        let text = Text::from_str("a😀b");
        assert_eq!(text.string(0, 4), "a😀b");
        assert_eq!(text.string(1, 3), "😀");
        assert_eq!(text.string(3, 4), "b");
        // Splitting the pair rounds down to the scalar boundary.
        assert_eq!(text.string(1, 2), "");
        // Clamped past the end.
        assert_eq!(text.string(3, 99), "b");
    }

    #[test]
    fn test_line_offsets() {
        let text = Text::from_str("ab\ncd\n\nef");
        assert_eq!(text.line_count(), 4);
        assert_eq!(text.line_start_offset(0), 0);
        assert_eq!(text.line_start_offset(1), 3);
        assert_eq!(text.line_start_offset(2), 6);
        assert_eq!(text.line_start_offset(3), 7);
        assert_eq!(text.line_start_offset(99), 9);
        assert_eq!(text.line_at_offset(0), 0);
        assert_eq!(text.line_at_offset(2), 0);
        assert_eq!(text.line_at_offset(3), 1);
        assert_eq!(text.line_at_offset(9), 3);
    }

    #[test]
    fn test_replaced_is_a_new_snapshot() {
        let text = Text::from_str("Hello, world!");
        let edited = text.replaced(TextRange::of(7, 12), "there").unwrap();
        assert_eq!(edited.to_string(), "Hello, there!");
        assert_eq!(text.to_string(), "Hello, world!");
    }

    #[test]
    fn test_replaced_out_of_bounds() {
        let text = Text::from_str("abc");
        assert_eq!(
            text.replaced(TextRange::of(1, 9), "x"),
            Err(Error::OutOfBounds { index: 9, len: 3 })
        );
    }
}
