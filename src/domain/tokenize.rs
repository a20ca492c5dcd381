//! Word tokenization shared by the lexicon classifier and keyword extractor

use regex::Regex;
use std::sync::OnceLock;

/// Maximal runs of ASCII letters and apostrophes: `don't`, `i'm`, `grateful`
fn word_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[a-zA-Z']+").expect("Invalid regex: word pattern"))
}

/// Lowercase the text and split it into word tokens.
///
/// Lowercasing happens before matching, so the token set is exactly what a
/// reader would get from scanning the lowercased entry.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
