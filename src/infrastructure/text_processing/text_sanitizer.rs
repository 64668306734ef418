use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").unwrap());

/// Normalises extracted text before it is sent to a summarizer: NFKC,
/// control characters dropped, words split across lines rejoined, runs of
/// blank lines folded to one paragraph break, inner whitespace collapsed.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect();
    let de_hyphenated = HYPHEN_NEWLINE.replace_all(&normalized, "$prefix$suffix");

    let mut result = String::with_capacity(de_hyphenated.len());
    let mut pending_break = false;

    for line in de_hyphenated.lines().map(str::trim) {
        if line.is_empty() {
            pending_break = !result.is_empty();
            continue;
        }

        if !result.is_empty() {
            result.push_str(if pending_break { "\n\n" } else { "\n" });
        }
        collapse_internal_whitespace(line, &mut result);
        pending_break = false;
    }

    result
}

fn collapse_internal_whitespace(line: &str, out: &mut String) {
    let mut prev_was_space = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
}
