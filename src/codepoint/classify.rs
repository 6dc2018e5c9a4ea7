//! Lexical classification of codepoints for word-boundary decisions.

/// Small lexical class of a codepoint.
///
/// `Caret` is the sentinel "no previous class" used by the motion state
/// machine before the first codepoint is consumed; `classify` never
/// returns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodepointClass {
    Caret,
    Separator,
    Newline,
    Space,
    Underscore,
    Uppercase,
    Lowercase,
}

impl CodepointClass {
    /// Classes making up a word: letters and the underscore.
    #[must_use]
    pub const fn is_word(self) -> bool {
        matches!(self, Self::Underscore | Self::Uppercase | Self::Lowercase)
    }
}

/// The fixed separator set. Space is not a separator; it has its own class.
const SEPARATORS: &str = "`~!@#$%^&*()-=+[{]}\\|;:'\",.<>/?";

/// Classify a scalar value.
///
/// Lowercase is the fallback for all remaining scripts, including
/// non-cased scripts and undecodable values such as unpaired surrogate
/// codes.
#[must_use]
pub fn codepoint_class(value: u32) -> CodepointClass {
    let Some(c) = char::from_u32(value) else {
        return CodepointClass::Lowercase;
    };
    if c == '\n' || c == '\r' {
        CodepointClass::Newline
    } else if c == '_' {
        CodepointClass::Underscore
    } else if SEPARATORS.contains(c) {
        CodepointClass::Separator
    } else if is_whitespace(value) {
        CodepointClass::Space
    } else if c.is_uppercase() {
        CodepointClass::Uppercase
    } else {
        CodepointClass::Lowercase
    }
}

/// Unicode space-separator test as a direct range check.
///
/// A deliberate simplification over the full Zs/Zl/Zp property lookup,
/// reproduced exactly: the space separators, the no-break spaces, and the
/// line/paragraph separators.
#[must_use]
pub const fn is_space_char(value: u32) -> bool {
    matches!(
        value,
        0x20 | 0xA0 | 0x1680 | 0x2000..=0x200A | 0x2028 | 0x2029 | 0x202F | 0x205F | 0x3000
    )
}

/// ISO control test: C0 plus DEL and C1.
#[must_use]
pub const fn is_iso_control(value: u32) -> bool {
    value <= 0x1F || (value >= 0x7F && value <= 0x9F)
}

/// Whitespace for classification: tab, the vertical-space controls, and
/// the space separators. Newlines are classified first and never reach
/// this test from `codepoint_class`.
const fn is_whitespace(value: u32) -> bool {
    matches!(value, 0x09 | 0x0B | 0x0C | 0x1C..=0x1F) || is_space_char(value)
}
