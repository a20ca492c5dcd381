//! Goals and their status

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Goal status. Unknown values are kept verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GoalStatus {
    #[default]
    Active,
    Done,
    Other(String),
}

impl GoalStatus {
    pub fn as_str(&self) -> &str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Done => "done",
            GoalStatus::Other(s) => s,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, GoalStatus::Done)
    }
}

impl From<String> for GoalStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => GoalStatus::Active,
            "done" => GoalStatus::Done,
            _ => GoalStatus::Other(s),
        }
    }
}

impl From<GoalStatus> for String {
    fn from(status: GoalStatus) -> Self {
        status.as_str().to_string()
    }
}

impl FromStr for GoalStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(GoalStatus::from(s.to_string()))
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-defined objective as seen by the recommendation composer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub title: String,
    pub status: GoalStatus,
    /// Percent complete; not range-checked
    pub progress: i64,
}

impl Goal {
    pub fn new(title: impl Into<String>, status: GoalStatus, progress: i64) -> Self {
        Self {
            title: title.into(),
            status,
            progress,
        }
    }

    /// Active goal with no progress yet
    pub fn active(title: impl Into<String>) -> Self {
        Self::new(title, GoalStatus::Active, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!("active".parse::<GoalStatus>().unwrap(), GoalStatus::Active);
        assert_eq!("done".parse::<GoalStatus>().unwrap(), GoalStatus::Done);
        assert_eq!(
            "paused".parse::<GoalStatus>().unwrap(),
            GoalStatus::Other("paused".to_string())
        );
    }

    #[test]
    fn test_status_is_case_sensitive() {
        // Only the exact "done" value closes a goal
        assert!(!"Done".parse::<GoalStatus>().unwrap().is_done());
        assert!("done".parse::<GoalStatus>().unwrap().is_done());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GoalStatus::Active.to_string(), "active");
        assert_eq!(GoalStatus::Other("paused".into()).to_string(), "paused");
    }

    #[test]
    fn test_active_constructor() {
        let goal = Goal::active("Morning jog 3x/week");
        assert_eq!(goal.status, GoalStatus::Active);
        assert_eq!(goal.progress, 0);
    }
}
