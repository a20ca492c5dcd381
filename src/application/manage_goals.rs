//! Goal management use case

use crate::domain::GoalStatus;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, GoalRecord};
use chrono::Utc;

/// Service for adding, updating and listing goals
pub struct GoalService {
    repository: FileSystemRepository,
}

impl GoalService {
    pub fn new(repository: FileSystemRepository) -> Self {
        GoalService { repository }
    }

    /// Add a new active goal
    pub fn add(&self, title: &str, progress: i64) -> Result<GoalRecord> {
        let goal = self.repository.add_goal(title, progress, Utc::now())?;
        tracing::info!(id = goal.id, title = %goal.title, progress, "goal added");
        Ok(goal)
    }

    /// Set progress and status of a goal.
    ///
    /// Any status string is accepted; only `done` removes the goal from
    /// recommendations.
    pub fn update(&self, id: u64, progress: i64, status: &str) -> Result<GoalRecord> {
        let status = GoalStatus::from(status.to_string());
        let goal = self.repository.update_goal(id, progress, status)?;
        tracing::info!(id, progress, status = %goal.status, "goal updated");
        Ok(goal)
    }

    /// Goals newest first
    pub fn list(&self) -> Result<Vec<GoalRecord>> {
        let mut goals = self.repository.load_goals()?;
        goals.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(goals)
    }
}
