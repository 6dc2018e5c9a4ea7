//! Word and line motion: caret navigation over classified codepoints.
//!
//! One state machine drives both directions: walk codepoints one at a
//! time, classify each, and stop *before* consuming a codepoint whose
//! class transition triggers a stop rule. Direction only breaks the
//! ambiguity of camel-hump transitions, so that hump boundaries land at
//! the start of each hump from either side.

mod whitespace;

pub use whitespace::{
    is_blank, leading_tab_count, leading_whitespace_end, trailing_whitespace_start,
};

use crate::codepoint::{
    CodeUnits, CodepointClass, CodepointCursor, Direction, codepoint_class,
};
use crate::range::TextRange;

/// Per-call options for [`text_right`] and [`text_left`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionOptions {
    /// Treat case transitions and underscores inside identifiers as
    /// sub-word boundaries.
    pub honor_camel_humps: bool,
    /// Stop at the end of a whitespace run instead of gliding over it.
    pub stop_after_space: bool,
}

/// Per-call options for [`text_around`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AroundOptions {
    /// Treat case transitions and underscores inside identifiers as
    /// sub-word boundaries.
    pub honor_camel_humps: bool,
    /// With no word codepoint on either side of the caret, return the
    /// empty range at the caret instead of expanding the non-word run.
    pub require_word_at_caret: bool,
}

/// Stop decision for consuming a codepoint of class `next` after `prev`.
///
/// First match wins. `prev` is the Caret sentinel before anything has been
/// consumed; no rule fires on the first codepoint or while the class is
/// unchanged.
fn stops(
    prev: CodepointClass,
    next: CodepointClass,
    direction: Direction,
    opts: MotionOptions,
) -> bool {
    use CodepointClass::{Caret, Lowercase, Newline, Separator, Space, Underscore, Uppercase};

    if prev == Caret || next == prev {
        return false;
    }
    if prev == Space {
        return opts.stop_after_space;
    }
    if prev == Separator || matches!(next, Separator | Newline | Space) {
        return true;
    }
    if prev == Underscore || next == Underscore {
        return opts.honor_camel_humps;
    }
    if prev == Lowercase && next == Uppercase {
        return opts.honor_camel_humps && direction == Direction::Forward;
    }
    if prev == Uppercase && next == Lowercase {
        return opts.honor_camel_humps && direction == Direction::Backward;
    }
    true
}

fn motion<S: CodeUnits + ?Sized>(
    source: &S,
    offset: usize,
    bound: TextRange,
    direction: Direction,
    opts: MotionOptions,
) -> usize {
    let bound = bound.coerced(TextRange::of(0, source.unit_count()));
    let start = offset.clamp(bound.start(), bound.end());
    let mut cursor = CodepointCursor::new(source, start, direction);
    let mut prev = CodepointClass::Caret;
    loop {
        let at = cursor.pos();
        let at_edge = match direction {
            Direction::Forward => at >= bound.end(),
            Direction::Backward => at <= bound.start(),
        };
        if at_edge {
            return at;
        }
        let Some(cp) = cursor.next() else {
            return at;
        };
        // Never consume past the range, even when no stop rule fires.
        let past_edge = match direction {
            Direction::Forward => cursor.pos() > bound.end(),
            Direction::Backward => cursor.pos() < bound.start(),
        };
        if past_edge {
            return at;
        }
        let class = codepoint_class(cp.value());
        if stops(prev, class, direction, opts) {
            return at;
        }
        prev = class;
    }
}

/// Walk right from `offset`, bounded by `bound`, and return the boundary
/// offset where the next stop rule fires. Reaching the bound edge is
/// itself a stop.
pub fn text_right<S: CodeUnits + ?Sized>(
    source: &S,
    offset: usize,
    bound: TextRange,
    opts: MotionOptions,
) -> usize {
    motion(source, offset, bound, Direction::Forward, opts)
}

/// Walk left from `offset`, bounded by `bound`, and return the boundary
/// offset where the next stop rule fires.
pub fn text_left<S: CodeUnits + ?Sized>(
    source: &S,
    offset: usize,
    bound: TextRange,
    opts: MotionOptions,
) -> usize {
    motion(source, offset, bound, Direction::Backward, opts)
}

/// Select the word at the caret.
///
/// If a word codepoint (a letter or underscore) sits to the immediate
/// left, right, or both sides of `offset`, the result is the enclosing
/// maximal run found via [`text_left`]/[`text_right`] with
/// `stop_after_space` off. With no word codepoint on either side, the
/// result is the empty range at the caret when
/// [`AroundOptions::require_word_at_caret`] is set, otherwise the
/// non-word run under the caret. Never fails.
pub fn text_around<S: CodeUnits + ?Sized>(
    source: &S,
    offset: usize,
    opts: AroundOptions,
) -> TextRange {
    let offset = offset.min(source.unit_count());
    let left = CodepointCursor::new(source, offset, Direction::Backward).next();
    let right = CodepointCursor::new(source, offset, Direction::Forward).next();
    let word_left = left.is_some_and(|cp| codepoint_class(cp.value()).is_word());
    let word_right = right.is_some_and(|cp| codepoint_class(cp.value()).is_word());

    let full = TextRange::of(0, source.unit_count());
    if word_left || word_right {
        let expand = MotionOptions {
            honor_camel_humps: opts.honor_camel_humps,
            stop_after_space: false,
        };
        let start = if word_left {
            text_left(source, offset, full, expand)
        } else {
            offset
        };
        let end = if word_right {
            text_right(source, offset, full, expand)
        } else {
            offset
        };
        TextRange::of(start, end)
    } else if opts.require_word_at_caret {
        TextRange::empty(offset)
    } else {
        let run = MotionOptions {
            honor_camel_humps: false,
            stop_after_space: true,
        };
        let start = if left.is_some() {
            text_left(source, offset, full, run)
        } else {
            offset
        };
        let end = if right.is_some() {
            text_right(source, offset, full, run)
        } else {
            offset
        };
        TextRange::of(start, end)
    }
}
