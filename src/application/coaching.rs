//! Coaching use case
//!
//! Gathers the current goals and the latest journal entry, then runs the
//! recommendation composer. Recommendations are never stored.

use crate::domain::{recommend, Goal};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Recommendations together with the inputs they were derived from
#[derive(Debug, Clone, PartialEq)]
pub struct CoachingReport {
    pub last_mood: Option<i64>,
    pub keywords: Vec<String>,
    pub goals: Vec<Goal>,
    pub recommendations: Vec<String>,
}

/// Service for producing recommendations
pub struct CoachingService {
    repository: FileSystemRepository,
}

impl CoachingService {
    pub fn new(repository: FileSystemRepository) -> Self {
        CoachingService { repository }
    }

    /// Recommend for today. A seed makes the base suggestion reproducible.
    pub fn execute(&self, seed: Option<u64>) -> Result<CoachingReport> {
        let today = Local::now().date_naive();
        match seed {
            Some(seed) => self.execute_with(today, &mut StdRng::seed_from_u64(seed)),
            None => self.execute_with(today, &mut rand::thread_rng()),
        }
    }

    /// Recommend with an explicit day and random source.
    pub fn execute_with<R: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<CoachingReport> {
        let latest = self.repository.latest_journal()?;
        let last_mood = latest.as_ref().map(|j| j.mood);
        let keywords = latest.map(|j| j.keyword_list()).unwrap_or_default();

        let mut records = self.repository.load_goals()?;
        records.sort_by(|a, b| b.id.cmp(&a.id));
        let goals: Vec<Goal> = records.iter().map(|r| r.to_goal()).collect();

        let recommendations = recommend(&goals, last_mood, &keywords, today, rng);
        tracing::debug!(
            count = recommendations.len(),
            ?last_mood,
            goals = goals.len(),
            "composed recommendations"
        );
        for suggestion in &recommendations {
            tracing::debug!(%suggestion, "recommendation");
        }

        Ok(CoachingReport {
            last_mood,
            keywords,
            goals,
            recommendations,
        })
    }
}
