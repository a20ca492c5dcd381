//! One pass of the journal analysis pipeline

use super::intent::{self, Intent};
use super::{keywords, sentiment};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Derived fields computed once when an entry is submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalAnalysis {
    pub sentiment: f64,
    pub intent: Intent,
    pub keywords: Vec<String>,
}

impl JournalAnalysis {
    /// Keywords in their comma-joined stored form
    pub fn keywords_for_storage(&self) -> String {
        keywords::join_for_storage(&self.keywords)
    }
}

/// Run sentiment, intent and keyword extraction over `text`.
pub fn analyze(text: &str, top_k: usize) -> Result<JournalAnalysis> {
    Ok(JournalAnalysis {
        sentiment: sentiment::score(text),
        intent: intent::classify(text),
        keywords: keywords::extract(text, top_k)?,
    })
}
