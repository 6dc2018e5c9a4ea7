//! Integration tests driving the full stack: snapshot, view, line index,
//! and caret motion through the public API.

use textcore::{
    AroundOptions, Error, LineColumn, MotionOptions, Text, TextFragment, TextLines, TextRange,
    TextView, char_width, codepoint_class, is_double_width, is_full_width, text_around,
    text_left, text_right, CodepointClass,
};

fn view_of(s: &str) -> (Text, TextView) {
    let text = Text::from_str(s);
    let view = TextView::new(&text);
    (text, view)
}

fn full(view: &TextView) -> TextRange {
    TextRange::new(0, view.char_count()).unwrap()
}

#[test]
fn word_motion_over_a_view() {
    let (_, view) = view_of("fooBar baz");
    let camel = MotionOptions {
        honor_camel_humps: true,
        stop_after_space: false,
    };
    let plain = MotionOptions::default();

    assert_eq!(text_right(&view, 0, full(&view), camel), 3);
    assert_eq!(text_right(&view, 0, full(&view), plain), 6);
    assert_eq!(text_left(&view, 6, full(&view), camel), 3);
    assert_eq!(text_right(&view, 7, full(&view), plain), 10);
}

#[test]
fn select_word_at_caret() {
    let (_, view) = view_of("foo bar");
    let opts = AroundOptions {
        honor_camel_humps: false,
        require_word_at_caret: false,
    };
    // Caret between "foo" and the space: the word is to the left.
    assert_eq!(text_around(&view, 3, opts), TextRange::new(0, 3).unwrap());
    // Caret inside "bar".
    assert_eq!(text_around(&view, 5, opts), TextRange::new(4, 7).unwrap());
}

#[test]
fn motion_across_astral_scalars() {
    // Each emoji is two code units; motion lands on scalar boundaries.
    let (_, view) = view_of("ab😀😀cd");
    let plain = MotionOptions::default();
    // Emoji classify as Lowercase fallback, so the run is one word.
    assert_eq!(text_right(&view, 0, full(&view), plain), 8);
    assert_eq!(text_left(&view, 8, full(&view), plain), 0);
}

#[test]
fn line_index_end_to_end() {
    let text = Text::from_str("fn main() {\n    body\n}\n");
    let lines = TextLines::new(&text);
    assert_eq!(lines.line_count(), 4);

    let first = lines.line(0).unwrap();
    assert_eq!(first.content().to_string(), "fn main() {");
    assert_eq!(first.end_including_separator(), 12);

    let second = first.next().unwrap();
    assert_eq!(second.content().to_string(), "    body");
    assert!(!second.is_whitespace_only());
    assert_eq!(
        textcore::leading_whitespace_end(&second.content()),
        4
    );

    assert_eq!(
        lines.position_at(16).unwrap(),
        LineColumn { line: 1, column: 4 }
    );
    assert_eq!(lines.line_at(16).unwrap().number(), 1);
}

#[test]
fn fragments_bound_motion() {
    let text = Text::from_str("alpha beta gamma");
    let frag = TextFragment::new(&text, 6, 10).unwrap();
    assert_eq!(frag.to_string(), "beta");
    // Motion inside the fragment is fragment-relative and bounded.
    let bound = TextRange::new(0, frag.len()).unwrap();
    assert_eq!(text_right(&frag, 0, bound, MotionOptions::default()), 4);
}

#[test]
fn fragment_bounds_violations_surface_as_errors() {
    let text = Text::from_str("0123456789");
    let frag = TextFragment::new(&text, 2, 8).unwrap();
    assert!(matches!(
        frag.fragment(0, 7),
        Err(Error::FragmentBounds { .. })
    ));
    assert!(matches!(frag.get(6), Err(Error::OutOfBounds { .. })));
    assert!(matches!(
        TextFragment::new(&text, 4, 11),
        Err(Error::FragmentBounds { .. })
    ));
}

#[test]
fn edits_produce_new_snapshots() {
    let text = Text::from_str("one two three");
    let view = TextView::new(&text);
    let edited = text
        .replaced(TextRange::new(4, 7).unwrap(), "2")
        .unwrap();
    // The old view still reads the old snapshot.
    assert_eq!(view.string(4, 7).unwrap(), "two");
    assert_eq!(edited.to_string(), "one 2 three");
}

#[test]
fn classifier_and_width_surface() {
    assert_eq!(codepoint_class(u32::from('\n')), CodepointClass::Newline);
    assert_eq!(codepoint_class(u32::from('_')), CodepointClass::Underscore);
    assert_eq!(codepoint_class(u32::from('A')), CodepointClass::Uppercase);
    assert_eq!(codepoint_class(u32::from('a')), CodepointClass::Lowercase);
    assert_eq!(codepoint_class(u32::from('(')), CodepointClass::Separator);

    assert!(is_full_width(0x4E2D));
    assert!(!is_full_width(0x0041));

    for value in 0..=0xA0 {
        assert!(!is_double_width(value, true));
    }
    assert_eq!(char_width(0x07, false), -1);
}

#[test]
fn many_views_share_one_snapshot() {
    let text = Text::from_str("shared content");
    let views: Vec<TextView> = (0..4).map(|_| TextView::new(&text)).collect();
    for view in &views {
        assert_eq!(view.string(0, 6).unwrap(), "shared");
    }
}
