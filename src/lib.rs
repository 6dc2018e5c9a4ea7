//! `textcore` - Character-indexed text buffer engine
//!
//! A queryable, navigable view over a large mutable string for interactive
//! editors: rope-backed snapshots with UTF-16 code-unit indexing, bounds-
//! checked fragments, a line index, and Unicode-aware caret navigation
//! (word motion, camel humps, display-width classification).
//!
//! The backing store is an immutable snapshot: edits produce a new
//! [`Text`], so views and fragments over an old snapshot keep reading it
//! safely. All offsets everywhere are UTF-16 code-unit offsets.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional surrogate-half casts
#![allow(clippy::missing_errors_doc)] // Error conditions documented inline
#![allow(clippy::module_name_repetitions)] // TextRange, TextView etc.
#![allow(clippy::inherent_to_string)] // to_string on snapshots is convenient
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::redundant_pub_crate)] // Explicit pub(crate) at module seams
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod codepoint;
pub mod error;
pub mod motion;
pub mod range;
pub mod text;

// Re-export core types at crate root
pub use codepoint::{
    CodeUnits, Codepoint, CodepointClass, CodepointCursor, Direction, char_width,
    codepoint_class, is_double_width, is_emoji, is_full_width, is_iso_control, is_space_char,
};
pub use error::{Error, Result};
pub use motion::{
    AroundOptions, MotionOptions, is_blank, leading_tab_count, leading_whitespace_end,
    text_around, text_left, text_right, trailing_whitespace_start,
};
pub use range::{Intersection, TextRange};
pub use text::{LineColumn, Text, TextFragment, TextLine, TextLines, TextView};
