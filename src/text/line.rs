//! Line-oriented queries: line boundaries, numbers, and columns.

use crate::error::{Error, Result};
use crate::text::fragment::TextFragment;
use crate::text::store::Text;

/// A line and column position, both zero-based. The column counts UTF-16
/// code units from the line start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

/// A single line: a fragment plus its line number.
///
/// The end of a line is two different offsets depending on intent:
/// selection "to end of line" wants the content end, deleting a line wants
/// the separator too. Both are exposed; see
/// [`end_excluding_separator`](TextLine::end_excluding_separator) and
/// [`end_including_separator`](TextLine::end_including_separator).
#[derive(Clone, Debug)]
pub struct TextLine {
    text: Text,
    number: usize,
    start: usize,
    content_end: usize,
    full_end: usize,
}

impl TextLine {
    fn build(text: &Text, number: usize) -> Self {
        let start = text.line_start_offset(number);
        let full_end = if number + 1 < text.line_count() {
            text.line_start_offset(number + 1)
        } else {
            text.char_count()
        };
        let content_end = strip_separator(text, start, full_end);
        Self {
            text: text.clone(),
            number,
            start,
            content_end,
            full_end,
        }
    }

    /// Zero-based line number.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Offset of the first character of the line.
    #[must_use]
    pub const fn from_offset(&self) -> usize {
        self.start
    }

    /// End offset of the line content, before the trailing separator.
    #[must_use]
    pub const fn end_excluding_separator(&self) -> usize {
        self.content_end
    }

    /// End offset of the line including its trailing separator.
    ///
    /// Equal to the start of the next line, or the end of the text for the
    /// last line.
    #[must_use]
    pub const fn end_including_separator(&self) -> usize {
        self.full_end
    }

    /// The line content as a fragment, separator excluded.
    #[must_use]
    pub fn content(&self) -> TextFragment {
        TextFragment::of(&self.text, self.start, self.content_end)
    }

    /// The line as a fragment, separator included.
    #[must_use]
    pub fn content_with_separator(&self) -> TextFragment {
        TextFragment::of(&self.text, self.start, self.full_end)
    }

    /// The next line, if any.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        if self.number + 1 < self.text.line_count() {
            Some(Self::build(&self.text, self.number + 1))
        } else {
            None
        }
    }

    /// The previous line, if any.
    #[must_use]
    pub fn prev(&self) -> Option<Self> {
        if self.number > 0 {
            Some(Self::build(&self.text, self.number - 1))
        } else {
            None
        }
    }

    /// Check if the line content is empty or only spaces and tabs.
    #[must_use]
    pub fn is_whitespace_only(&self) -> bool {
        crate::motion::is_blank(&self.content())
    }
}

/// Walk back over the trailing separator of `[start, full_end)`.
///
/// CRLF is one two-unit separator; the single-unit breaks are the ones the
/// rope recognizes (LF, VT, FF, CR, NEL, LS, PS).
fn strip_separator(text: &Text, start: usize, full_end: usize) -> usize {
    if full_end == start {
        return full_end;
    }
    match u32::from(text.unit_at(full_end - 1)) {
        0x0A => {
            if full_end - 1 > start && text.unit_at(full_end - 2) == 0x0D {
                full_end - 2
            } else {
                full_end - 1
            }
        }
        0x0B | 0x0C | 0x0D | 0x85 | 0x2028 | 0x2029 => full_end - 1,
        _ => full_end,
    }
}

/// Random-accessible ordered sequence of [`TextLine`]s keyed by line
/// number, plus offset lookups.
#[derive(Clone, Debug)]
pub struct TextLines {
    text: Text,
}

impl TextLines {
    /// Create a line index over a text snapshot.
    #[must_use]
    pub fn new(text: &Text) -> Self {
        Self { text: text.clone() }
    }

    /// Number of lines. Empty text contains exactly one empty line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.line_count()
    }

    /// The line with the given number.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfBounds`] if `number >= line_count()`.
    pub fn line(&self, number: usize) -> Result<TextLine> {
        let lines = self.line_count();
        if number >= lines {
            return Err(Error::OutOfBounds {
                index: number,
                len: lines,
            });
        }
        Ok(TextLine::build(&self.text, number))
    }

    /// The line containing an offset.
    ///
    /// An offset equal to the text length addresses the last line.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfBounds`] if the offset is past the end.
    pub fn line_at(&self, offset: usize) -> Result<TextLine> {
        let len = self.text.char_count();
        if offset > len {
            return Err(Error::OutOfBounds { index: offset, len });
        }
        Ok(TextLine::build(&self.text, self.text.line_at_offset(offset)))
    }

    /// Convert an offset to a line and column.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfBounds`] if the offset is past the end.
    pub fn position_at(&self, offset: usize) -> Result<LineColumn> {
        let len = self.text.char_count();
        if offset > len {
            return Err(Error::OutOfBounds { index: offset, len });
        }
        let line = self.text.line_at_offset(offset);
        Ok(LineColumn {
            line,
            column: offset - self.text.line_start_offset(line),
        })
    }
}
