//! Codepoint decoding, lexical classification, and display width.
//!
//! Leaf utilities of the engine: [`CodepointCursor`] decodes UTF-16 code
//! units into scalar values in either direction, [`codepoint_class`] maps
//! a scalar to the small lexical alphabet the word-motion machine runs on,
//! and the width functions answer single- vs double-column questions for
//! monospaced rendering.

mod classify;
mod decode;
mod width;

pub use classify::{CodepointClass, codepoint_class, is_iso_control, is_space_char};
pub use decode::{CodeUnits, Codepoint, CodepointCursor, Direction, units_of};
pub use width::{char_width, is_double_width, is_emoji, is_full_width};
