//! Initialize journal use case

use crate::domain::analyze;
use crate::error::Result;
use crate::infrastructure::{Checkin, CoachRepository, Config, FileSystemRepository};
use chrono::{DateTime, Duration, Local, Utc};
use std::fs;
use std::path::Path;

const DEMO_GOALS: [&str; 3] = [
    "Read 10 pages daily",
    "Morning jog 3x/week",
    "Build portfolio project",
];
const DEMO_GOAL_PROGRESS: i64 = 20;

/// Seven days of sample entries, oldest first, as (mood, text)
const DEMO_ENTRIES: [(i64, &str); 7] = [
    (3, "Feeling good and confident about my study plan."),
    (4, "Requesting advice on how to stick to habits."),
    (2, "Tired and a bit stressed today."),
    (5, "Great focus sprint this morning, proud of progress."),
    (3, "A bit lost but hopeful."),
    (4, "Made some progress on my project goal."),
    (2, "Frustrated and anxious about deadlines."),
];

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Profile name stored in config
    pub name: Option<String>,
    /// Seed sample goals, entries and check-ins
    pub demo: bool,
}

/// Initialize a new journal at the specified path.
pub fn init(path: &Path, options: InitOptions) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new(options.name);
    repo.save_config(&config)?;
    tracing::info!(root = %path.display(), name = %config.name, "initialized journal");

    println!("Initialized coach journal at {}", path.display());
    println!("Profile: {}", config.name);

    if options.demo {
        seed_demo(&repo, &config, Local::now())?;
        println!(
            "Seeded {} goals and {} journal entries",
            DEMO_GOALS.len(),
            DEMO_ENTRIES.len()
        );
    }

    Ok(())
}

/// Fill an empty journal with sample data, one entry per day ending at `now`.
///
/// The newest entry is stamped `now`, so anything written afterwards sorts
/// after it regardless of time zone.
pub fn seed_demo(
    repo: &FileSystemRepository,
    config: &Config,
    now: DateTime<Local>,
) -> Result<()> {
    for title in DEMO_GOALS {
        repo.add_goal(title, DEMO_GOAL_PROGRESS, now.with_timezone(&Utc))?;
    }

    let today = now.date_naive();
    let last = DEMO_ENTRIES.len() as i64 - 1;
    for (i, (mood, text)) in DEMO_ENTRIES.iter().enumerate() {
        let days_ago = Duration::days(last - i as i64);
        let analysis = analyze(text, config.keyword_limit)?;
        repo.add_journal(text, *mood, &analysis, (now - days_ago).with_timezone(&Utc))?;
        repo.add_checkin(Checkin {
            day: today - days_ago,
            mood: *mood,
        })?;
    }

    tracing::debug!(
        goals = DEMO_GOALS.len(),
        entries = DEMO_ENTRIES.len(),
        "seeded demo data"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Intent;
    use chrono::{NaiveDate, TimeZone};
    use tempfile::TempDir;

    fn demo_repo(temp: &TempDir) -> FileSystemRepository {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo
    }

    #[test]
    fn test_seed_demo() {
        let temp = TempDir::new().unwrap();
        let repo = demo_repo(&temp);
        let config = Config::new(None);
        let now = Local.with_ymd_and_hms(2025, 1, 17, 12, 0, 0).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();

        seed_demo(&repo, &config, now).unwrap();

        assert_eq!(repo.load_goals().unwrap().len(), 3);

        let checkins = repo.load_checkins().unwrap();
        assert_eq!(checkins.len(), 7);
        assert_eq!(checkins[0].day, NaiveDate::from_ymd_opt(2025, 1, 11).unwrap());
        assert_eq!(checkins[6].day, today);

        let latest = repo.latest_journal().unwrap().unwrap();
        assert_eq!(latest.content, "Frustrated and anxious about deadlines.");
        assert_eq!(latest.mood, 2);
        assert_eq!(latest.intent, Intent::General);
        assert_eq!(latest.keywords, "frustrated,anxious,deadlines");
        assert_eq!(latest.created_at, now.with_timezone(&Utc));
    }

    #[test]
    fn test_entry_written_after_demo_is_latest() {
        let temp = TempDir::new().unwrap();
        let repo = demo_repo(&temp);
        let config = Config::new(None);

        seed_demo(&repo, &config, Local::now()).unwrap();
        let text = "Written right after the demo";
        let analysis = analyze(text, config.keyword_limit).unwrap();
        let added = repo.add_journal(text, 5, &analysis, Utc::now()).unwrap();

        assert_eq!(repo.latest_journal().unwrap().unwrap().id, added.id);
    }
}
