//! Point-reference emphasis pass.
//!
//! The record bolds its agenda cross-references ("Primer Punto", "punto
//! dos") wherever they occur, including mid-sentence. The pass splits a
//! line around the fixed vocabulary and emits one run per segment, so
//! concatenating the run texts always reproduces the input byte for byte.

use once_cell::sync::Lazy;
use regex::Regex;

use acta_layout::TextRun;

use crate::constants::POINT_KEYWORDS;

static KEYWORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = POINT_KEYWORDS.join("|");
    Regex::new(&format!("(?i)({alternation})")).expect("keyword pattern is valid")
});

/// Splits `text` into runs, bolding and uppercasing every point reference.
///
/// Plain segments between matches stay as single plain runs; adjacent plain
/// segments are never merged or re-split. Matching is case-insensitive but
/// the run keeps the text exactly as written (the renderer applies the
/// uppercase transform).
pub fn emphasise(text: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut last_end = 0;

    for matched in KEYWORD_PATTERN.find_iter(text) {
        if matched.start() > last_end {
            runs.push(TextRun::plain(&text[last_end..matched.start()]));
        }
        runs.push(TextRun::emphasised(matched.as_str()));
        last_end = matched.end();
    }
    if last_end < text.len() {
        runs.push(TextRun::plain(&text[last_end..]));
    }
    if runs.is_empty() {
        runs.push(TextRun::plain(text));
    }

    runs
}
