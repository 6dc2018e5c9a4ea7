//! Indentation and whitespace scans.
//!
//! Simple linear scans over the space/tab set only, independent of the
//! lexical classifier. They operate on any unit source: a fragment, a
//! line's content, or a whole view.

use crate::codepoint::CodeUnits;

const fn is_space_or_tab(unit: u16) -> bool {
    unit == 0x20 || unit == 0x09
}

/// Offset of the first unit that is not a space or tab.
///
/// Equals `unit_count()` when the source is blank.
pub fn leading_whitespace_end<S: CodeUnits + ?Sized>(source: &S) -> usize {
    let count = source.unit_count();
    let mut offset = 0;
    while offset < count && is_space_or_tab(source.unit(offset)) {
        offset += 1;
    }
    offset
}

/// Offset just past the last unit that is not a space or tab.
///
/// Equals 0 when the source is blank.
pub fn trailing_whitespace_start<S: CodeUnits + ?Sized>(source: &S) -> usize {
    let mut offset = source.unit_count();
    while offset > 0 && is_space_or_tab(source.unit(offset - 1)) {
        offset -= 1;
    }
    offset
}

/// Number of tabs in the leading whitespace run.
pub fn leading_tab_count<S: CodeUnits + ?Sized>(source: &S) -> usize {
    let mut tabs = 0;
    for offset in 0..leading_whitespace_end(source) {
        if source.unit(offset) == 0x09 {
            tabs += 1;
        }
    }
    tabs
}

/// Check if the source is empty or contains only spaces and tabs.
pub fn is_blank<S: CodeUnits + ?Sized>(source: &S) -> bool {
    leading_whitespace_end(source) == source.unit_count()
}
