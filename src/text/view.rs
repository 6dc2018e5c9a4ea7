//! Stateful read accessor over a text snapshot.

use crate::codepoint::CodeUnits;
use crate::error::{Error, Result};
use crate::text::store::Text;
use std::cell::Cell;

/// Last scalar resolved by a view, keyed by its first unit offset.
///
/// `size == 0` marks the cache empty.
#[derive(Clone, Copy, Debug, Default)]
struct ScanCache {
    unit_start: usize,
    char_idx: usize,
    size: usize,
    value: u32,
}

/// A stateful, locality-exploiting accessor over a [`Text`].
///
/// Totals are O(1) and indexed lookups O(log n), but repeated nearby
/// accesses are cheaper than random ones: the view remembers the last
/// scalar it resolved and serves same-scalar and adjacent-scalar requests
/// without a fresh rope descent.
///
/// The cache lives in a [`Cell`], so a view is `!Sync`: thread safety is
/// by confinement. Create one view per session or thread — they are cheap,
/// and any number of views may read the same `Text` since none of them
/// mutates the snapshot.
#[derive(Clone, Debug)]
pub struct TextView {
    text: Text,
    cache: Cell<ScanCache>,
}

impl TextView {
    /// Create a view over a text snapshot.
    #[must_use]
    pub fn new(text: &Text) -> Self {
        Self {
            text: text.clone(),
            cache: Cell::new(ScanCache::default()),
        }
    }

    /// The underlying snapshot.
    #[must_use]
    pub const fn text(&self) -> &Text {
        &self.text
    }

    /// A line index over the same snapshot.
    #[must_use]
    pub fn lines(&self) -> crate::text::TextLines {
        crate::text::TextLines::new(&self.text)
    }

    /// Total length in UTF-16 code units. O(1).
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.char_count()
    }

    /// Number of lines. O(1).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.line_count()
    }

    /// The code unit at `offset`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfBounds`] if `offset >= char_count()`.
    pub fn get(&self, offset: usize) -> Result<u16> {
        let len = self.char_count();
        if offset >= len {
            return Err(Error::OutOfBounds { index: offset, len });
        }
        let entry = self.resolve(offset);
        Ok(unit_of(entry, offset))
    }

    /// Line number at an offset (count of preceding line separators).
    ///
    /// An offset equal to `char_count()` is the caret position past the
    /// last character and maps to the last line.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfBounds`] if `offset > char_count()`.
    pub fn line_at(&self, offset: usize) -> Result<usize> {
        let len = self.char_count();
        if offset > len {
            return Err(Error::OutOfBounds { index: offset, len });
        }
        Ok(self.text.line_at_offset(offset))
    }

    /// Start offset of a line.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfBounds`] if `line >= line_count()`.
    pub fn line_start_offset(&self, line: usize) -> Result<usize> {
        let lines = self.line_count();
        if line >= lines {
            return Err(Error::OutOfBounds {
                index: line,
                len: lines,
            });
        }
        Ok(self.text.line_start_offset(line))
    }

    /// Extract `[from, to)` as an owned string.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidRange`] if `from > to` and
    /// [`Error::OutOfBounds`] if `to` extends past the end.
    pub fn string(&self, from: usize, to: usize) -> Result<String> {
        if from > to {
            return Err(Error::InvalidRange {
                start: from,
                end: to,
            });
        }
        let len = self.char_count();
        if to > len {
            return Err(Error::OutOfBounds { index: to, len });
        }
        Ok(self.text.string(from, to))
    }

    /// Resolve the scalar containing `offset`, consulting the cache.
    ///
    /// Requires `offset < char_count()`.
    fn resolve(&self, offset: usize) -> ScanCache {
        let cached = self.cache.get();
        if cached.size != 0 {
            if offset >= cached.unit_start && offset < cached.unit_start + cached.size {
                return cached;
            }
            // Adjacent scalar forward: one rope lookup, no offset search.
            if offset == cached.unit_start + cached.size {
                return self.fill(cached.unit_start + cached.size, cached.char_idx + 1);
            }
            // Adjacent scalar backward: the preceding scalar is at most
            // two units wide, so a miss here falls through to the search.
            if cached.char_idx > 0 && offset < cached.unit_start && cached.unit_start - offset <= 2
            {
                let entry = self.fill_ending_at(cached.unit_start, cached.char_idx - 1);
                if offset >= entry.unit_start {
                    return entry;
                }
            }
        }
        let char_idx = self.text.rope().utf16_cu_to_char(offset);
        let unit_start = self.text.rope().char_to_utf16_cu(char_idx);
        self.fill(unit_start, char_idx)
    }

    fn fill(&self, unit_start: usize, char_idx: usize) -> ScanCache {
        let value = self.text.rope().char(char_idx) as u32;
        let size = if value >= 0x10000 { 2 } else { 1 };
        let entry = ScanCache {
            unit_start,
            char_idx,
            size,
            value,
        };
        self.cache.set(entry);
        entry
    }

    fn fill_ending_at(&self, unit_end: usize, char_idx: usize) -> ScanCache {
        let value = self.text.rope().char(char_idx) as u32;
        let size = if value >= 0x10000 { 2 } else { 1 };
        let entry = ScanCache {
            unit_start: unit_end - size,
            char_idx,
            size,
            value,
        };
        self.cache.set(entry);
        entry
    }
}

/// Surrogate half (or BMP unit) of a resolved scalar at `offset`.
fn unit_of(entry: ScanCache, offset: usize) -> u16 {
    if entry.value < 0x10000 {
        entry.value as u16
    } else if offset == entry.unit_start {
        (0xD800 + ((entry.value - 0x10000) >> 10)) as u16
    } else {
        (0xDC00 + ((entry.value - 0x10000) & 0x3FF)) as u16
    }
}

impl CodeUnits for TextView {
    fn unit_count(&self) -> usize {
        self.char_count()
    }

    fn unit(&self, offset: usize) -> u16 {
        unit_of(self.resolve(offset), offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_in_and_out_of_bounds() {
        let text = Text::from_str("abc");
        let view = TextView::new(&text);
        assert_eq!(view.get(0), Ok(0x61));
        assert_eq!(view.get(2), Ok(0x63));
        assert_eq!(view.get(3), Err(Error::OutOfBounds { index: 3, len: 3 }));
    }

    #[test]
    fn test_surrogate_halves_through_cache() {
        let text = Text::from_str("a😀b");
        let view = TextView::new(&text);
        // Sequential forward pass exercises the adjacency path.
        assert_eq!(view.get(0).unwrap(), 0x61);
        assert_eq!(view.get(1).unwrap(), 0xD83D);
        assert_eq!(view.get(2).unwrap(), 0xDE00);
        assert_eq!(view.get(3).unwrap(), 0x62);
        // And backward over the same units.
        assert_eq!(view.get(2).unwrap(), 0xDE00);
        assert_eq!(view.get(1).unwrap(), 0xD83D);
        assert_eq!(view.get(0).unwrap(), 0x61);
    }

    #[test]
    fn test_random_access_matches_sequential() {
        let text = Text::from_str("x😀y😀z");
        let sequential = TextView::new(&text);
        let random = TextView::new(&text);
        let units: Vec<u16> = (0..text.char_count())
            .map(|i| sequential.get(i).unwrap())
            .collect();
        for (i, &unit) in units.iter().enumerate().rev() {
            assert_eq!(random.get(i).unwrap(), unit);
        }
    }

    #[test]
    fn test_line_queries() {
        let text = Text::from_str("ab\ncd");
        let view = TextView::new(&text);
        assert_eq!(view.line_count(), 2);
        assert_eq!(view.line_at(0), Ok(0));
        assert_eq!(view.line_at(3), Ok(1));
        assert_eq!(view.line_at(5), Ok(1));
        assert_eq!(view.line_at(6), Err(Error::OutOfBounds { index: 6, len: 5 }));
        assert_eq!(view.line_start_offset(1), Ok(3));
        assert_eq!(
            view.line_start_offset(2),
            Err(Error::OutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_string_errors() {
        let text = Text::from_str("abc");
        let view = TextView::new(&text);
        assert_eq!(view.string(1, 3).unwrap(), "bc");
        assert_eq!(
            view.string(3, 1),
            Err(Error::InvalidRange { start: 3, end: 1 })
        );
        assert_eq!(
            view.string(0, 4),
            Err(Error::OutOfBounds { index: 4, len: 3 })
        );
    }

    #[test]
    fn test_independent_views_over_one_text() {
        let text = Text::from_str("hello");
        let a = TextView::new(&text);
        let b = TextView::new(&text);
        assert_eq!(a.get(0), b.get(0));
        assert_eq!(a.get(4), Ok(u16::from(b'o')));
        assert_eq!(b.get(1), Ok(u16::from(b'e')));
    }
}
