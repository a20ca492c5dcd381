//! List journal entries and mood history

use crate::error::Result;
use crate::infrastructure::{Checkin, FileSystemRepository, JournalRecord};

/// Journal entries newest first, optionally limited.
pub fn list_entries(
    repository: &FileSystemRepository,
    limit: Option<usize>,
) -> Result<Vec<JournalRecord>> {
    let mut entries = repository.load_journals()?;
    entries.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    Ok(entries)
}

/// Check-ins ordered by day; same-day samples keep their logging order.
pub fn mood_history(repository: &FileSystemRepository) -> Result<Vec<Checkin>> {
    let mut checkins = repository.load_checkins()?;
    checkins.sort_by_key(|c| c.day);
    Ok(checkins)
}
