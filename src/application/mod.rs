//! Application layer - Use cases and orchestration

pub mod coaching;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod manage_goals;
pub mod write_entry;

pub use coaching::{CoachingReport, CoachingService};
pub use init::{init, InitOptions};
pub use list_entries::{list_entries, mood_history};
pub use manage_config::ConfigService;
pub use manage_goals::GoalService;
pub use write_entry::WriteEntryService;
