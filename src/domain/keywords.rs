//! Keyword extraction by term frequency
//!
//! Stopwords and tokens of two characters or fewer are dropped; the rest are
//! ranked by count, with ties kept in order of first appearance.

use super::tokenize::tokenize;
use crate::error::{CoachError, Result};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Number of keywords kept per journal entry unless configured otherwise
pub const DEFAULT_TOP_K: usize = 5;

/// Separator used when a keyword list is stored as a single string
pub const STORAGE_SEPARATOR: char = ',';

/// Common English function words
const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "should", "now",
];

fn stopwords() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORDS.iter().copied().collect())
}

fn is_content_word(token: &str) -> bool {
    token.len() > 2 && !stopwords().contains(token)
}

/// Extract up to `top_k` keywords from text.
///
/// # Errors
///
/// Returns `InvalidArgument` if `top_k` is zero.
pub fn extract(text: &str, top_k: usize) -> Result<Vec<String>> {
    if top_k == 0 {
        return Err(CoachError::InvalidArgument(
            "keyword limit must be at least 1".to_string(),
        ));
    }

    // `order` holds each distinct token once, in first-appearance order.
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for token in tokenize(text) {
        if !is_content_word(&token) {
            continue;
        }
        let count = counts.entry(token.clone()).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    // sort_by is stable, so equal counts stay in first-appearance order
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(top_k);
    Ok(order)
}

/// Join keywords into the comma-separated form kept in the record store
pub fn join_for_storage(keywords: &[String]) -> String {
    keywords.join(&STORAGE_SEPARATOR.to_string())
}

/// Split a stored keyword string back into a list; empty input gives an empty list
pub fn split_from_storage(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }
    stored
        .split(STORAGE_SEPARATOR)
        .map(|k| k.to_string())
        .collect()
}
