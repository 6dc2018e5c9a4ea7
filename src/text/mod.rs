//! Text snapshots, views, fragments, and the line index.
//!
//! [`Text`] is the immutable rope-backed snapshot; [`TextView`] is the
//! stateful read accessor the higher layers run on; [`TextFragment`] is a
//! bounds-checked window; [`TextLines`]/[`TextLine`] answer line-oriented
//! queries.
//!
//! # Examples
//!
//! ```
//! use textcore::{Text, TextView, TextLines};
//!
//! let text = Text::from_str("hello\nworld");
//! let view = TextView::new(&text);
//! assert_eq!(view.char_count(), 11);
//! assert_eq!(view.line_count(), 2);
//!
//! let lines = TextLines::new(&text);
//! assert_eq!(lines.line(1).unwrap().content().to_string(), "world");
//! ```

mod fragment;
mod line;
mod store;
mod view;

pub use fragment::TextFragment;
pub use line::{LineColumn, TextLine, TextLines};
pub use store::Text;
pub use view::TextView;
