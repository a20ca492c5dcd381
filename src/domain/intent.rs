//! Intent classification using ordered regex rules
//!
//! Rules are evaluated top to bottom and the first match wins, so the order
//! of [`INTENT_RULES`] decides between entries that mention several topics
//! ("advice about my goal" is a goal update).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Coarse purpose of a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    GoalUpdate,
    MoodCheckin,
    AdviceRequest,
    JournalEntry,
    #[default]
    General,
}

impl Intent {
    /// Stable label used for storage and display
    pub fn label(&self) -> &'static str {
        match self {
            Intent::GoalUpdate => "goal_update",
            Intent::MoodCheckin => "mood_checkin",
            Intent::AdviceRequest => "advice_request",
            Intent::JournalEntry => "journal_entry",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "goal_update" => Ok(Intent::GoalUpdate),
            "mood_checkin" => Ok(Intent::MoodCheckin),
            "advice_request" => Ok(Intent::AdviceRequest),
            "journal_entry" => Ok(Intent::JournalEntry),
            "general" => Ok(Intent::General),
            _ => Err(format!("Invalid intent: '{}'", s)),
        }
    }
}

/// Ordered (pattern, intent) rules, matched against lowercased text.
///
/// The journal rule is kept in its literal alternation form: the word
/// boundary binds to `journal` on the left and `reflection` on the right,
/// while bare `reflect` matches anywhere (e.g. inside "reflected").
pub const INTENT_RULES: &[(&str, Intent)] = &[
    (r"\b(goal|target|plan|milestone)\b", Intent::GoalUpdate),
    (r"\b(feel|mood|emotion)\b", Intent::MoodCheckin),
    (r"\b(help|advice|suggest|recommend)\b", Intent::AdviceRequest),
    (r"\bjournal|reflect|reflection\b", Intent::JournalEntry),
];

fn compiled_rules() -> &'static [(Regex, Intent)] {
    static RULES: OnceLock<Vec<(Regex, Intent)>> = OnceLock::new();
    RULES.get_or_init(|| {
        INTENT_RULES
            .iter()
            .map(|(pattern, intent)| {
                let regex = Regex::new(pattern).expect("Invalid regex: intent rule");
                (regex, *intent)
            })
            .collect()
    })
}

/// Classify text into exactly one intent; `General` when no rule matches.
pub fn classify(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    compiled_rules()
        .iter()
        .find(|(regex, _)| regex.is_match(&lowered))
        .map(|(_, intent)| *intent)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_rule_precedes_advice_rule() {
        assert_eq!(classify("I want advice about my goal"), Intent::GoalUpdate);
    }

    #[test]
    fn test_each_rule() {
        assert_eq!(
            classify("Made some progress on my project goal."),
            Intent::GoalUpdate
        );
        assert_eq!(classify("What a MOOD today"), Intent::MoodCheckin);
        assert_eq!(
            classify("Requesting advice on how to stick to habits."),
            Intent::AdviceRequest
        );
        assert_eq!(classify("Quick journal before bed"), Intent::JournalEntry);
    }

    #[test]
    fn test_mood_rule_precedes_advice_rule() {
        assert_eq!(
            classify("I feel like I need help"),
            Intent::MoodCheckin
        );
    }

    #[test]
    fn test_no_match_is_general() {
        assert_eq!(classify("Tired and a bit stressed today."), Intent::General);
        assert_eq!(classify(""), Intent::General);
    }

    #[test]
    fn test_word_boundaries_on_grouped_rules() {
        // "feeling" and "planning" are not bounded matches for feel / plan
        assert_eq!(classify("feeling fine, planning ahead"), Intent::General);
        assert_eq!(classify("goals"), Intent::General);
    }

    #[test]
    fn test_journal_rule_literal_boundaries() {
        // left boundary only on "journal"
        assert_eq!(classify("journaling again"), Intent::JournalEntry);
        assert_eq!(classify("myjournal"), Intent::General);
        // bare "reflect" has no boundary at all
        assert_eq!(classify("I reflected a lot"), Intent::JournalEntry);
        assert_eq!(classify("selfreflect"), Intent::JournalEntry);
    }

    #[test]
    fn test_label_round_trip() {
        for intent in [
            Intent::GoalUpdate,
            Intent::MoodCheckin,
            Intent::AdviceRequest,
            Intent::JournalEntry,
            Intent::General,
        ] {
            assert_eq!(Intent::from_str(intent.label()), Ok(intent));
            assert_eq!(intent.to_string(), intent.label());
        }
        assert!(Intent::from_str("chitchat").is_err());
    }
}
