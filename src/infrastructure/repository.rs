//! File system repository
//!
//! Journal entries, goals and check-ins live in TOML files under `.coach/`.
//! Each command reads a whole file and rewrites it in place.

use crate::domain::{Goal, GoalStatus, Intent, JournalAnalysis};
use crate::error::{CoachError, Result};
use crate::infrastructure::config::COACH_DIR;
use crate::infrastructure::Config;
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const JOURNALS_FILE: &str = "journals.toml";
const GOALS_FILE: &str = "goals.toml";
const CHECKINS_FILE: &str = "checkins.toml";

/// A stored journal entry with its analysis fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalRecord {
    pub id: u64,
    pub content: String,
    pub mood: i64,
    pub sentiment: f64,
    pub intent: Intent,
    /// Comma-joined keyword list
    pub keywords: String,
    pub created_at: DateTime<Utc>,
}

impl JournalRecord {
    pub fn keyword_list(&self) -> Vec<String> {
        crate::domain::keywords::split_from_storage(&self.keywords)
    }

    /// The stored analysis fields, keywords split back into a list
    pub fn analysis(&self) -> JournalAnalysis {
        JournalAnalysis {
            sentiment: self.sentiment,
            intent: self.intent,
            keywords: self.keyword_list(),
        }
    }
}

/// A stored goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default)]
    pub progress: i64,
    pub created_at: DateTime<Utc>,
}

impl GoalRecord {
    pub fn to_goal(&self) -> Goal {
        Goal::new(self.title.clone(), self.status.clone(), self.progress)
    }
}

/// A daily mood sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkin {
    pub day: NaiveDate,
    pub mood: i64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct JournalFile {
    #[serde(default, rename = "entry")]
    entries: Vec<JournalRecord>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct GoalFile {
    #[serde(default, rename = "goal")]
    goals: Vec<GoalRecord>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CheckinFile {
    #[serde(default, rename = "checkin")]
    checkins: Vec<Checkin>,
}

/// Abstract repository for journal operations
pub trait CoachRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .coach/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .coach/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .coach directory exists
    fn is_initialized(&self) -> bool;

    /// Create .coach directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of CoachRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks COACH_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("COACH_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_coach_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(CoachError::Config(format!(
                    "COACH_ROOT is set to '{}' but no .coach directory found. \
                    Run 'coach init' in that directory or unset COACH_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_coach_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(CoachError::NotCoachDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_coach_dir(path: &Path) -> bool {
        path.join(COACH_DIR).is_dir()
    }

    fn store_path(&self, file: &str) -> PathBuf {
        self.root.join(COACH_DIR).join(file)
    }
}

impl CoachRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_coach_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let coach_dir = self.root.join(COACH_DIR);

        if coach_dir.exists() {
            return Err(CoachError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&coach_dir)?;
        Ok(())
    }
}

// Record store operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// All journal entries in insertion order
    pub fn load_journals(&self) -> Result<Vec<JournalRecord>> {
        let file: JournalFile = self.read_store(JOURNALS_FILE)?;
        Ok(file.entries)
    }

    /// Store a new journal entry and return it with its assigned id
    pub fn add_journal(
        &self,
        content: &str,
        mood: i64,
        analysis: &JournalAnalysis,
        created_at: DateTime<Utc>,
    ) -> Result<JournalRecord> {
        let mut file: JournalFile = self.read_store(JOURNALS_FILE)?;
        let record = JournalRecord {
            id: next_id(file.entries.iter().map(|e| e.id)),
            content: content.to_string(),
            mood,
            sentiment: analysis.sentiment,
            intent: analysis.intent,
            keywords: analysis.keywords_for_storage(),
            created_at,
        };
        file.entries.push(record.clone());
        self.write_store(JOURNALS_FILE, &file)?;
        Ok(record)
    }

    /// Most recent journal entry by creation time (later id wins ties)
    pub fn latest_journal(&self) -> Result<Option<JournalRecord>> {
        let entries = self.load_journals()?;
        Ok(entries
            .into_iter()
            .max_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id))))
    }

    /// All goals in insertion order
    pub fn load_goals(&self) -> Result<Vec<GoalRecord>> {
        let file: GoalFile = self.read_store(GOALS_FILE)?;
        Ok(file.goals)
    }

    /// Store a new active goal
    pub fn add_goal(
        &self,
        title: &str,
        progress: i64,
        created_at: DateTime<Utc>,
    ) -> Result<GoalRecord> {
        let mut file: GoalFile = self.read_store(GOALS_FILE)?;
        let record = GoalRecord {
            id: next_id(file.goals.iter().map(|g| g.id)),
            title: title.to_string(),
            status: GoalStatus::Active,
            progress,
            created_at,
        };
        file.goals.push(record.clone());
        self.write_store(GOALS_FILE, &file)?;
        Ok(record)
    }

    /// Overwrite progress and status of an existing goal
    pub fn update_goal(&self, id: u64, progress: i64, status: GoalStatus) -> Result<GoalRecord> {
        let mut file: GoalFile = self.read_store(GOALS_FILE)?;
        let goal = file
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(CoachError::GoalNotFound(id))?;
        goal.progress = progress;
        goal.status = status;
        let updated = goal.clone();
        self.write_store(GOALS_FILE, &file)?;
        Ok(updated)
    }

    /// All check-ins in insertion order
    pub fn load_checkins(&self) -> Result<Vec<Checkin>> {
        let file: CheckinFile = self.read_store(CHECKINS_FILE)?;
        Ok(file.checkins)
    }

    pub fn add_checkin(&self, checkin: Checkin) -> Result<()> {
        let mut file: CheckinFile = self.read_store(CHECKINS_FILE)?;
        file.checkins.push(checkin);
        self.write_store(CHECKINS_FILE, &file)
    }

    /// Read a store file; a missing file is an empty store
    fn read_store<T: DeserializeOwned + Default>(&self, file: &str) -> Result<T> {
        let path = self.store_path(file);
        if !path.exists() {
            if !self.is_initialized() {
                return Err(CoachError::NotCoachDirectory(self.root.clone()));
            }
            return Ok(T::default());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Write a store file using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_store<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let path = self.store_path(file);
        if !self.is_initialized() {
            return Err(CoachError::NotCoachDirectory(self.root.clone()));
        }

        let contents = toml::to_string_pretty(value)?;
        let tmp_path = path.with_file_name(format!("{}.coach-tmp-{}", file, std::process::id()));

        fs::write(&tmp_path, contents)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analyze;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn init_repo() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        (temp, repo)
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".coach")).unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let repo = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_from_fails_without_coach_dir() {
        let temp = TempDir::new().unwrap();
        let result = FileSystemRepository::discover_from(temp.path());
        assert!(matches!(result, Err(CoachError::NotCoachDirectory(_))));
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (_temp, repo) = init_repo();
        assert!(repo.is_initialized());
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_empty_stores() {
        let (_temp, repo) = init_repo();
        assert!(repo.load_journals().unwrap().is_empty());
        assert!(repo.load_goals().unwrap().is_empty());
        assert!(repo.load_checkins().unwrap().is_empty());
        assert!(repo.latest_journal().unwrap().is_none());
    }

    #[test]
    fn test_uninitialized_store_errors() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert!(matches!(
            repo.load_goals(),
            Err(CoachError::NotCoachDirectory(_))
        ));
    }

    #[test]
    fn test_add_journal_assigns_ids_and_round_trips() {
        let (_temp, repo) = init_repo();
        let text = "Frustrated and anxious about deadlines.";
        let analysis = analyze(text, 5).unwrap();

        let first = repo.add_journal(text, 2, &analysis, at(10, 9)).unwrap();
        let quiet = analyze("Quiet day.", 5).unwrap();
        let second = repo.add_journal("Quiet day.", 3, &quiet, at(11, 9)).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let stored = repo.load_journals().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0], first);
        assert_eq!(stored[0].keywords, "frustrated,anxious,deadlines");
        assert_eq!(stored[0].sentiment, -1.0);
        assert_eq!(stored[0].analysis(), analysis);
    }

    #[test]
    fn test_latest_journal_by_created_at() {
        let (_temp, repo) = init_repo();
        let analysis = analyze("", 5).unwrap();
        repo.add_journal("later", 4, &analysis, at(12, 9)).unwrap();
        repo.add_journal("earlier", 1, &analysis, at(3, 9)).unwrap();

        let latest = repo.latest_journal().unwrap().unwrap();
        assert_eq!(latest.content, "later");
        assert_eq!(latest.mood, 4);
        assert!(latest.keyword_list().is_empty());
    }

    #[test]
    fn test_goal_add_and_update() {
        let (_temp, repo) = init_repo();
        let goal = repo.add_goal("Read 10 pages daily", 20, at(1, 8)).unwrap();
        assert_eq!(goal.id, 1);
        assert_eq!(goal.status, GoalStatus::Active);

        let updated = repo.update_goal(1, 100, GoalStatus::Done).unwrap();
        assert_eq!(updated.progress, 100);
        assert!(updated.status.is_done());

        let stored = repo.load_goals().unwrap();
        assert_eq!(stored[0].status, GoalStatus::Done);
        assert_eq!(stored[0].to_goal().title, "Read 10 pages daily");
    }

    #[test]
    fn test_update_missing_goal() {
        let (_temp, repo) = init_repo();
        assert!(matches!(
            repo.update_goal(9, 10, GoalStatus::Active),
            Err(CoachError::GoalNotFound(9))
        ));
    }

    #[test]
    fn test_custom_status_survives_storage() {
        let (_temp, repo) = init_repo();
        repo.add_goal("Learn piano", 0, at(1, 8)).unwrap();
        repo.update_goal(1, 5, GoalStatus::Other("paused".to_string()))
            .unwrap();
        let stored = repo.load_goals().unwrap();
        assert_eq!(stored[0].status, GoalStatus::Other("paused".to_string()));
    }

    #[test]
    fn test_checkins_round_trip() {
        let (_temp, repo) = init_repo();
        let day = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        repo.add_checkin(Checkin { day, mood: 4 }).unwrap();
        assert_eq!(repo.load_checkins().unwrap(), vec![Checkin { day, mood: 4 }]);
    }
}
