//! Bounds-checked, zero-copy windows over a text snapshot.

use crate::codepoint::CodeUnits;
use crate::error::{Error, Result};
use crate::range::TextRange;
use crate::text::store::Text;

/// A `(from, to)` window into a [`Text`].
///
/// A fragment is always fully contained in its backing text; construction
/// outside those bounds fails eagerly and nothing is ever silently
/// clamped. Fragments are cheap to create and re-slice, and sub-fragments
/// compose over the same backing store. "Whole text" is just a fragment
/// whose bounds equal the full extent; there is no separate type.
#[derive(Clone, Debug)]
pub struct TextFragment {
    text: Text,
    from: usize,
    to: usize,
}

impl TextFragment {
    /// Create a fragment over `[from, to)` of a text.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidRange`] if `from > to` and with
    /// [`Error::FragmentBounds`] if the window extends past the text.
    pub fn new(text: &Text, from: usize, to: usize) -> Result<Self> {
        if from > to {
            return Err(Error::InvalidRange {
                start: from,
                end: to,
            });
        }
        let len = text.char_count();
        if to > len {
            return Err(Error::FragmentBounds { from, to, len });
        }
        Ok(Self {
            text: text.clone(),
            from,
            to,
        })
    }

    /// Construct from bounds already known valid.
    pub(crate) fn of(text: &Text, from: usize, to: usize) -> Self {
        debug_assert!(from <= to && to <= text.char_count());
        Self {
            text: text.clone(),
            from,
            to,
        }
    }

    /// Fragment covering the whole text.
    #[must_use]
    pub fn whole(text: &Text) -> Self {
        Self {
            text: text.clone(),
            from: 0,
            to: text.char_count(),
        }
    }

    /// The backing snapshot.
    #[must_use]
    pub const fn text(&self) -> &Text {
        &self.text
    }

    /// Absolute start offset in the backing text.
    #[must_use]
    pub const fn from_char(&self) -> usize {
        self.from
    }

    /// Absolute end offset (exclusive) in the backing text.
    #[must_use]
    pub const fn to_char(&self) -> usize {
        self.to
    }

    /// The window as an absolute range.
    #[must_use]
    pub const fn range(&self) -> TextRange {
        TextRange::of(self.from, self.to)
    }

    /// Length in code units.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.to - self.from
    }

    /// Check if the window covers nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// The code unit at a fragment-relative index.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::OutOfBounds`] carrying the fragment-relative
    /// index, not the absolute offset.
    pub fn get(&self, index: usize) -> Result<u16> {
        if index >= self.len() {
            return Err(Error::OutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok(self.text.unit_at(self.from + index))
    }

    /// Re-slice into a sub-fragment over the same backing store.
    ///
    /// `from` and `to` are fragment-relative.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidRange`] if `from > to` and with
    /// [`Error::FragmentBounds`] if the sub-window is not contained in
    /// this fragment.
    pub fn fragment(&self, from: usize, to: usize) -> Result<Self> {
        if from > to {
            return Err(Error::InvalidRange {
                start: from,
                end: to,
            });
        }
        if to > self.len() {
            return Err(Error::FragmentBounds {
                from,
                to,
                len: self.len(),
            });
        }
        Ok(Self {
            text: self.text.clone(),
            from: self.from + from,
            to: self.from + to,
        })
    }

    /// Extract a fragment-relative `[from, to)` as an owned string.
    ///
    /// # Errors
    ///
    /// Same conditions as [`TextFragment::fragment`].
    pub fn string(&self, from: usize, to: usize) -> Result<String> {
        let sub = self.fragment(from, to)?;
        Ok(self.text.string(sub.from, sub.to))
    }

    /// The whole window as an owned string.
    #[must_use]
    pub fn to_string(&self) -> String {
        self.text.string(self.from, self.to)
    }
}

impl CodeUnits for TextFragment {
    fn unit_count(&self) -> usize {
        self.len()
    }

    fn unit(&self, offset: usize) -> u16 {
        self.text.unit_at(self.from + offset)
    }
}
