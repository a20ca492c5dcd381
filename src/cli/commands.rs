//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coach")]
#[command(about = "Mood journal with rule-based coaching", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Profile name
        #[arg(short, long)]
        name: Option<String>,

        /// Seed sample goals and a week of entries
        #[arg(long)]
        demo: bool,
    },

    /// Write a journal entry and store its analysis
    Write {
        /// Entry text
        text: String,

        /// Mood from 1 (low) to 5 (high)
        #[arg(short, long, allow_negative_numbers = true)]
        mood: Option<i64>,
    },

    /// List journal entries, newest first
    Journal {
        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Analyze text without storing it
    Analyze {
        /// Text to analyze
        text: String,
    },

    /// Manage goals
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },

    /// Show mood check-ins by day
    Checkins,

    /// Get recommendations from goals, mood and keywords
    Coach {
        /// Seed for a reproducible base suggestion
        #[arg(long)]
        seed: Option<u64>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Add an active goal
    Add {
        /// Goal title
        title: String,

        /// Initial progress
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        progress: i64,
    },

    /// Set a goal's progress and status
    Update {
        /// Goal id (see `coach goal list`)
        id: u64,

        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        progress: i64,

        /// active, done, or any other label
        #[arg(short, long, default_value = "active")]
        status: String,
    },

    /// List goals, newest first
    List,
}
