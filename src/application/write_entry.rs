//! Journal submission use case
//!
//! Runs the analysis pipeline once, stores the entry with its derived
//! fields and logs a check-in for the day.

use crate::domain::{analyze, JournalAnalysis};
use crate::error::Result;
use crate::infrastructure::repository::CoachRepository;
use crate::infrastructure::{Checkin, FileSystemRepository, JournalRecord};
use chrono::{DateTime, Local, NaiveDate, Utc};

/// Mood used when none is given
pub const DEFAULT_MOOD: i64 = 3;

/// Service for writing journal entries
pub struct WriteEntryService {
    repository: FileSystemRepository,
}

impl WriteEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        WriteEntryService { repository }
    }

    /// Analyze and store an entry written now.
    pub fn execute(&self, content: &str, mood: Option<i64>) -> Result<JournalRecord> {
        self.execute_at(content, mood, Utc::now(), Local::now().date_naive())
    }

    /// Analyze and store an entry with explicit timestamps.
    pub fn execute_at(
        &self,
        content: &str,
        mood: Option<i64>,
        created_at: DateTime<Utc>,
        day: NaiveDate,
    ) -> Result<JournalRecord> {
        let config = self.repository.load_config()?;
        let mood = mood.unwrap_or(DEFAULT_MOOD);

        let analysis = analyze(content, config.keyword_limit)?;
        let record = self
            .repository
            .add_journal(content, mood, &analysis, created_at)?;
        self.repository.add_checkin(Checkin { day, mood })?;

        tracing::info!(
            id = record.id,
            mood,
            sentiment = record.sentiment,
            intent = %record.intent,
            "journal entry saved"
        );
        Ok(record)
    }
}

/// Run the pipeline on text without storing anything.
pub fn preview(repository: Option<&FileSystemRepository>, content: &str) -> Result<JournalAnalysis> {
    let limit = match repository {
        Some(repo) => repo.load_config()?.keyword_limit,
        None => crate::domain::keywords::DEFAULT_TOP_K,
    };
    analyze(content, limit)
}
