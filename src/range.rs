//! Half-open character ranges with containment and intersection algebra.

use crate::error::{Error, Result};

/// A half-open interval `[start, end)` of character offsets.
///
/// The invariant `start <= end` is checked eagerly at construction;
/// [`TextRange::new`] fails with [`Error::InvalidRange`] rather than
/// silently repairing the bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

/// Classified result of [`TextRange::intersect`], carrying the overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intersection {
    /// No overlap.
    None,
    /// Overlapping, with this range starting first.
    Before(TextRange),
    /// Overlapping, with the other range starting first.
    After(TextRange),
    /// This range is fully inside the other.
    Inside(TextRange),
    /// This range fully contains the other.
    Outside(TextRange),
}

impl Intersection {
    /// Swap Before with After and Inside with Outside; None is a fixpoint.
    ///
    /// `a.intersect(b).invert()` classifies the same overlap from `b`'s
    /// point of view.
    #[must_use]
    pub fn invert(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Before(r) => Self::After(r),
            Self::After(r) => Self::Before(r),
            Self::Inside(r) => Self::Outside(r),
            Self::Outside(r) => Self::Inside(r),
        }
    }

    /// The overlapping range, if any.
    #[must_use]
    pub fn range(self) -> Option<TextRange> {
        match self {
            Self::None => None,
            Self::Before(r) | Self::After(r) | Self::Inside(r) | Self::Outside(r) => Some(r),
        }
    }
}

impl TextRange {
    /// Create a new range.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidRange`] if `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create a range whose bounds are known ordered.
    pub(crate) const fn of(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Create an empty range at an offset.
    #[must_use]
    pub const fn empty(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Start offset (inclusive).
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// End offset (exclusive).
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of characters covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the range covers no characters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset lies within the range.
    #[must_use]
    pub const fn contains_offset(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Check if another range is fully contained in this one.
    #[must_use]
    pub const fn contains_range(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Shift both ends by a signed delta, saturating at zero.
    #[must_use]
    pub fn shifted(&self, delta: isize) -> Self {
        let start = self.start.saturating_add_signed(delta);
        let end = self.end.saturating_add_signed(delta);
        Self::of(start.min(end), end)
    }

    /// Clamp both ends into `limits`.
    #[must_use]
    pub fn coerced(&self, limits: Self) -> Self {
        Self::of(
            self.start.clamp(limits.start, limits.end),
            self.end.clamp(limits.start, limits.end),
        )
    }

    /// Strict overlap test: shared characters required, touching does not
    /// count.
    #[must_use]
    pub const fn intersects_strict(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Non-strict overlap test: touching endpoints count.
    #[must_use]
    pub const fn intersects_non_strict(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Intersect with classification.
    ///
    /// A range fully inside the other is `Inside` (checked before the
    /// containing case, so equal ranges classify as `Inside`); fully
    /// containing is `Outside`; overlapping with this range starting first
    /// is `Before`, with the other starting first `After`; disjoint is
    /// `None`.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Intersection {
        if other.contains_range(self) {
            Intersection::Inside(*self)
        } else if self.contains_range(other) {
            Intersection::Outside(*other)
        } else if self.intersects_strict(other) {
            let overlap = Self::of(self.start.max(other.start), self.end.min(other.end));
            if self.start < other.start {
                Intersection::Before(overlap)
            } else {
                Intersection::After(overlap)
            }
        } else {
            Intersection::None
        }
    }
}
