//! Bidirectional codepoint decoding over UTF-16 code units.
//!
//! [`CodepointCursor`] is a lazy, single-pass, non-restartable walk from an
//! offset toward one end of a unit sequence, pairing surrogates as it goes.
//! Malformed pairs never error: an unpaired high surrogate walking forward
//! (and an unpaired low surrogate walking backward) is silently dropped.
//! That omission is long-standing editor behavior and is preserved as is.

/// A random-access source of UTF-16 code units.
///
/// The seam between the decoding/navigation layer and whatever holds the
/// units: a [`TextView`](crate::TextView), a
/// [`TextFragment`](crate::TextFragment), or a plain `[u16]` in tests.
///
/// `unit` requires `offset < unit_count()`; implementations may panic
/// outside that domain.
pub trait CodeUnits {
    /// Total number of code units.
    fn unit_count(&self) -> usize;

    /// The code unit at `offset`.
    fn unit(&self, offset: usize) -> u16;
}

impl CodeUnits for [u16] {
    fn unit_count(&self) -> usize {
        self.len()
    }

    fn unit(&self, offset: usize) -> u16 {
        self[offset]
    }
}

impl CodeUnits for Vec<u16> {
    fn unit_count(&self) -> usize {
        self.len()
    }

    fn unit(&self, offset: usize) -> u16 {
        self[offset]
    }
}

/// Walk direction for decoding and caret motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A decoded Unicode scalar value plus its UTF-16 unit width (1 or 2).
///
/// Created on demand by a decode step; never persisted. A lone low
/// surrogate emitted while walking forward (or a lone high surrogate
/// walking backward) carries the surrogate code itself as `value`, so
/// `as_char` is fallible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Codepoint {
    value: u32,
    size: usize,
}

impl Codepoint {
    /// The scalar value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Width in UTF-16 code units (1 or 2).
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The value as a `char`, unless it is an unpaired surrogate code.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.value)
    }
}

const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

const fn combine(high: u16, low: u16) -> u32 {
    0x10000 + (((high as u32 - 0xD800) << 10) | (low as u32 - 0xDC00))
}

/// Cursor decoding codepoints from an offset toward one end of the source.
///
/// Forward: reads the unit at the position; a high surrogate followed by a
/// low surrogate combines into one scalar and advances by 2, anything else
/// is emitted as its own scalar and advances by 1. Backward mirrors this
/// with low surrogates pairing to the preceding high surrogate.
pub struct CodepointCursor<'a, S: CodeUnits + ?Sized> {
    source: &'a S,
    pos: usize,
    direction: Direction,
}

impl<'a, S: CodeUnits + ?Sized> CodepointCursor<'a, S> {
    /// Create a cursor at `offset` walking in `direction`.
    ///
    /// An offset past the end is clamped; a cursor at the relevant boundary
    /// yields an empty sequence.
    pub fn new(source: &'a S, offset: usize, direction: Direction) -> Self {
        let pos = offset.min(source.unit_count());
        Self {
            source,
            pos,
            direction,
        }
    }

    /// Current position in code units.
    ///
    /// After a `next` that emitted a codepoint this is the offset just past
    /// it (forward) or just before it (backward), including any dropped
    /// unpaired surrogates skipped on the way.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    fn next_forward(&mut self) -> Option<Codepoint> {
        let count = self.source.unit_count();
        while self.pos < count {
            let unit = self.source.unit(self.pos);
            if is_high_surrogate(unit) {
                if self.pos + 1 < count {
                    let low = self.source.unit(self.pos + 1);
                    if is_low_surrogate(low) {
                        self.pos += 2;
                        return Some(Codepoint {
                            value: combine(unit, low),
                            size: 2,
                        });
                    }
                }
                // Unpaired high surrogate: dropped, not an error.
                self.pos += 1;
                continue;
            }
            self.pos += 1;
            return Some(Codepoint {
                value: u32::from(unit),
                size: 1,
            });
        }
        None
    }

    fn next_backward(&mut self) -> Option<Codepoint> {
        while self.pos > 0 {
            let unit = self.source.unit(self.pos - 1);
            if is_low_surrogate(unit) {
                if self.pos >= 2 {
                    let high = self.source.unit(self.pos - 2);
                    if is_high_surrogate(high) {
                        self.pos -= 2;
                        return Some(Codepoint {
                            value: combine(high, unit),
                            size: 2,
                        });
                    }
                }
                // Unpaired low surrogate: dropped, not an error.
                self.pos -= 1;
                continue;
            }
            self.pos -= 1;
            return Some(Codepoint {
                value: u32::from(unit),
                size: 1,
            });
        }
        None
    }
}

impl<S: CodeUnits + ?Sized> Iterator for CodepointCursor<'_, S> {
    type Item = Codepoint;

    fn next(&mut self) -> Option<Codepoint> {
        match self.direction {
            Direction::Forward => self.next_forward(),
            Direction::Backward => self.next_backward(),
        }
    }
}

/// Encode a string as UTF-16 code units.
///
/// Convenience for callers (and tests) that start from `&str`.
#[must_use]
pub fn units_of(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}
