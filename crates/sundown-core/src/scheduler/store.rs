//! Best-effort persistence of the current schedule entry.

use std::path::{Path, PathBuf};

use log::warn;

use crate::{
    error::Result,
    models::ScheduleEntry,
    storage::{read_json, remove_if_exists, run_blocking, write_json_atomic},
};

/// JSON file mirroring the scheduler state. Absence of the file means Idle.
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    path: PathBuf,
}

impl ScheduleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted entry. Any read or parse error counts as no entry.
    pub async fn load(&self) -> Option<ScheduleEntry> {
        let path = self.path.clone();
        match run_blocking(move || read_json::<ScheduleEntry>(&path)).await {
            Ok(entry) => entry,
            Err(e) => {
                warn!(
                    "Ignoring unreadable schedule {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Writes `entry`, or deletes the file when there is none.
    pub async fn save(&self, entry: Option<&ScheduleEntry>) -> Result<()> {
        let path = self.path.clone();
        let entry = entry.cloned();
        run_blocking(move || match entry {
            Some(entry) => write_json_atomic(&path, &entry),
            None => remove_if_exists(&path),
        })
        .await
    }
}
