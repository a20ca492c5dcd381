//! Lexicon sentiment scoring
//!
//! Scores text against two fixed word lists. A word counts once per
//! occurrence; words outside both lists are neutral.

use super::tokenize::tokenize;

/// Words that pull a score towards +1.0
pub const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "great",
    "awesome",
    "good",
    "love",
    "progress",
    "proud",
    "win",
    "positive",
    "confident",
    "calm",
    "energized",
    "motivated",
    "peaceful",
    "hopeful",
    "inspired",
    "grateful",
];

/// Words that pull a score towards -1.0
pub const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "bad",
    "terrible",
    "angry",
    "hate",
    "stuck",
    "anxious",
    "stressed",
    "worried",
    "tired",
    "frustrated",
    "lost",
    "hopeless",
    "overwhelmed",
    "bored",
    "guilty",
    "regret",
];

/// Polarity of a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub fn of(token: &str) -> Self {
        if POSITIVE_WORDS.contains(&token) {
            Polarity::Positive
        } else if NEGATIVE_WORDS.contains(&token) {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

/// Score text in [-1.0, 1.0], rounded to 3 decimal places.
///
/// Returns 0.0 for empty text or text with no lexicon words.
pub fn score(text: &str) -> f64 {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return 0.0;
    }

    let (mut pos, mut neg) = (0u32, 0u32);
    for token in &tokens {
        match Polarity::of(token) {
            Polarity::Positive => pos += 1,
            Polarity::Negative => neg += 1,
            Polarity::Neutral => {}
        }
    }

    let raw = (f64::from(pos) - f64::from(neg)) / f64::from((pos + neg).max(1));
    round3(raw)
}

/// Round on the exact decimal expansion of `value`, not of `value * 1000`
fn round3(value: f64) -> f64 {
    format!("{:.3}", value).parse().unwrap_or(value)
}
