use sycx::infrastructure::rendering::{chars_per_line, latin1_safe, parse_hex_color, wrap_text};

#[test]
fn given_words_when_wrapping_then_lines_fit_width() {
    assert_eq!(wrap_text("aaa bbb ccc", 7), vec!["aaa bbb", "ccc"]);
}

#[test]
fn given_word_longer_than_line_when_wrapping_then_word_is_hard_split() {
    assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
}

#[test]
fn given_explicit_newlines_when_wrapping_then_each_line_starts_fresh() {
    assert_eq!(wrap_text("one\ntwo three", 20), vec!["one", "two three"]);
}

#[test]
fn given_larger_font_when_measuring_then_fewer_characters_fit() {
    assert!(chars_per_line(165.0, 24.0) < chars_per_line(165.0, 12.0));
}

#[test]
fn given_hex_colours_when_parsing_then_returns_unit_components() {
    assert_eq!(parse_hex_color("#FF0000"), Some((1.0, 0.0, 0.0)));
    assert_eq!(parse_hex_color("00ff00"), Some((0.0, 1.0, 0.0)));
    assert_eq!(parse_hex_color("#GG0000"), None);
    assert_eq!(parse_hex_color("#123"), None);
}

#[test]
fn given_typographic_text_when_folding_to_latin1_then_replaces_unsupported_glyphs() {
    assert_eq!(
        latin1_safe("\u{201C}Hi\u{201D} \u{2014} café \u{2713}"),
        "\"Hi\" - café ?"
    );
}
