//! Output formatting utilities

use crate::application::CoachingReport;
use crate::domain::JournalAnalysis;
use crate::infrastructure::{Checkin, GoalRecord, JournalRecord};

/// Widest mood bar drawn by `format_checkins`
const MAX_BAR: i64 = 10;

fn format_keywords(keywords: &[String]) -> String {
    if keywords.is_empty() {
        "(none)".to_string()
    } else {
        keywords.join(", ")
    }
}

/// Format the result of analyzing one entry
pub fn format_analysis(analysis: &JournalAnalysis) -> String {
    format!(
        "Sentiment: {:.3}\nIntent: {}\nKeywords: {}\n",
        analysis.sentiment,
        analysis.intent,
        format_keywords(&analysis.keywords)
    )
}

/// Format journal entries for display
pub fn format_entry_list(entries: &[JournalRecord]) -> String {
    if entries.is_empty() {
        return "No journal entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "#{}  {}  mood {}  sentiment {:.3}  {}\n",
            entry.id,
            entry.created_at.format("%d-%m-%Y %H:%M"),
            entry.mood,
            entry.sentiment,
            entry.intent
        ));
        output.push_str(&format!("    {}\n", entry.content));
        output.push_str(&format!(
            "    keywords: {}\n",
            format_keywords(&entry.keyword_list())
        ));
    }
    output
}

/// Format goals for display
pub fn format_goal_list(goals: &[GoalRecord]) -> String {
    if goals.is_empty() {
        return "No goals found".to_string();
    }

    let mut output = String::new();
    for goal in goals {
        output.push_str(&format!(
            "#{}  [{}]  {}%  {}\n",
            goal.id, goal.status, goal.progress, goal.title
        ));
    }
    output
}

/// Format check-ins as a text mood chart
pub fn format_checkins(checkins: &[Checkin]) -> String {
    if checkins.is_empty() {
        return "No check-ins found".to_string();
    }

    let mut output = String::new();
    for checkin in checkins {
        let width = checkin.mood.clamp(0, MAX_BAR) as usize;
        output.push_str(&format!(
            "{}  {}  {}\n",
            checkin.day.format("%d-%m-%Y"),
            checkin.mood,
            "#".repeat(width)
        ));
    }
    output
}

/// Format recommendations with the inputs they came from
pub fn format_coaching(report: &CoachingReport) -> String {
    let mood = report
        .last_mood
        .map(|m| m.to_string())
        .unwrap_or_else(|| "none".to_string());

    let mut output = format!(
        "Last mood: {}\nKeywords: {}\nRecommendations:\n",
        mood,
        format_keywords(&report.keywords)
    );
    for (i, suggestion) in report.recommendations.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, suggestion));
    }
    output
}
