//! Recommendation composer
//!
//! Suggestions are appended in a fixed order (base, goals, mood, keyword)
//! and then deduplicated keeping the first occurrence. The random source and
//! the calendar day are passed in so callers control reproducibility.

use super::goal::Goal;
use chrono::NaiveDate;
use rand::Rng;
use std::collections::HashSet;

/// Generic wellness suggestions; exactly one is drawn per call
pub const BASE_SUGGESTIONS: [&str; 5] = [
    "Take a 10-minute mindful walk today.",
    "Write three things you're grateful for.",
    "Plan one 25-minute deep work sprint.",
    "Drink water and take a short stretch break.",
    "Send a quick 'thank you' note to someone.",
];

/// Only this many goals (from the front of the list) are considered
pub const GOAL_SUGGESTION_LIMIT: usize = 3;

pub const LOW_MOOD_SUGGESTION: &str =
    "Low mood detected. Try a short breathing exercise: inhale 4s, hold 4s, exhale 6s, repeat x4.";

pub const HIGH_MOOD_SUGGESTION: &str =
    "You're on a roll! Use that energy to tackle a small but meaningful task now.";

const LOW_MOOD_MAX: i64 = 2;
const HIGH_MOOD_MIN: i64 = 4;

pub fn goal_suggestion(title: &str, today: NaiveDate) -> String {
    format!(
        "Break goal '{}' into a 20-minute next step and schedule it today ({}).",
        title, today
    )
}

pub fn keyword_suggestion(keyword: &str) -> String {
    format!(
        "Since '{}' came up, read a 5-minute article or note about it and jot one takeaway.",
        keyword
    )
}

/// Compose suggestions from goals, the latest mood and the latest keywords.
///
/// Always returns at least one suggestion. Absent mood or empty goal and
/// keyword lists simply contribute nothing.
pub fn recommend<R: Rng + ?Sized>(
    goals: &[Goal],
    last_mood: Option<i64>,
    keywords: &[String],
    today: NaiveDate,
    rng: &mut R,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    let base = BASE_SUGGESTIONS[rng.gen_range(0..BASE_SUGGESTIONS.len())];
    suggestions.push(base.to_string());

    for goal in goals.iter().take(GOAL_SUGGESTION_LIMIT) {
        if !goal.status.is_done() {
            suggestions.push(goal_suggestion(&goal.title, today));
        }
    }

    match last_mood {
        Some(mood) if mood <= LOW_MOOD_MAX => suggestions.push(LOW_MOOD_SUGGESTION.to_string()),
        Some(mood) if mood >= HIGH_MOOD_MIN => {
            suggestions.push(HIGH_MOOD_SUGGESTION.to_string())
        }
        _ => {}
    }

    if let Some(first) = keywords.first() {
        suggestions.push(keyword_suggestion(first));
    }

    dedup_preserving_order(suggestions)
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
