//! Error types for coachlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the coaching journal
#[derive(Debug, Error)]
pub enum CoachError {
    #[error("Not a coach directory: {0}")]
    NotCoachDirectory(PathBuf),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Goal not found: {0}")]
    GoalNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl CoachError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CoachError::NotCoachDirectory(_) => 2,
            CoachError::InvalidArgument(_) => 3,
            CoachError::GoalNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            CoachError::NotCoachDirectory(path) => {
                format!(
                    "Not a coach directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'coach init' in this directory to start a new journal\n\
                    • Run 'coach init --demo' to start with sample goals and entries\n\
                    • Set COACH_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            CoachError::GoalNotFound(id) => {
                format!(
                    "Goal not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'coach goal list' to see goal ids\n\
                    • Add a goal first: coach goal add \"Read 10 pages daily\"",
                    id
                )
            }
            CoachError::InvalidArgument(msg) => {
                if msg.contains("keyword limit") {
                    format!(
                        "Invalid argument: {}\n\n\
                        The keyword limit must be a positive integer.\n\
                        Example: coach config keyword_limit 5",
                        msg
                    )
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using CoachError
pub type Result<T> = std::result::Result<T, CoachError>;
