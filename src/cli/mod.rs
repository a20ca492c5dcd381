//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, GoalCommands};
pub use output::{
    format_analysis, format_checkins, format_coaching, format_entry_list, format_goal_list,
};
