use sycx::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_text_with_fi_ligature_when_sanitizing_then_decomposes_to_fi() {
    assert_eq!(sanitize_extracted_text("ﬁnding the ﬁle"), "finding the file");
}

#[test]
fn given_word_hyphenated_across_lines_when_sanitizing_then_rejoins_word() {
    assert_eq!(
        sanitize_extracted_text("the infor-\nmation age"),
        "the information age"
    );
}

#[test]
fn given_text_with_excessive_newlines_when_sanitizing_then_collapses_to_paragraph_breaks() {
    assert_eq!(
        sanitize_extracted_text("paragraph one\n\n\n\n\nparagraph two"),
        "paragraph one\n\nparagraph two"
    );
}

#[test]
fn given_control_characters_when_sanitizing_then_they_are_dropped() {
    assert_eq!(sanitize_extracted_text("a\u{0}b\u{7}c   d"), "abc d");
}

#[test]
fn given_whitespace_only_text_when_sanitizing_then_returns_empty() {
    assert_eq!(sanitize_extracted_text("   \n\n  "), "");
}
