//! Domain layer - Text analysis and recommendation rules

pub mod analysis;
pub mod goal;
pub mod intent;
pub mod keywords;
pub mod recommend;
pub mod sentiment;
pub mod tokenize;

pub use analysis::{analyze, JournalAnalysis};
pub use goal::{Goal, GoalStatus};
pub use intent::Intent;
pub use recommend::recommend;
