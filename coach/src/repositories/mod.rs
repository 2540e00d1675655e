//! History repositories
//!
//! Each history lives in one JSON file holding an array ordered
//! most-recent-first. Reads never fail: a missing or unreadable file is an
//! empty history, and single entries that do not parse or validate are
//! dropped. Writes go through a temp file and a rename.

pub mod nutrition_history;
pub mod workout_history;

pub use nutrition_history::NutritionHistoryRepository;
pub use workout_history::WorkoutHistoryRepository;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fitness_coach_shared::validation::validate_record;
use fitness_coach_shared::{BoundedHistory, HistoryEntry};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use validator::Validate;

use crate::error::AppResult;

/// JSON file backing one bounded history
#[derive(Debug, Clone)]
pub(crate) struct HistoryFile {
    path: PathBuf,
    capacity: usize,
    label: &'static str,
    // serializes read-modify-write cycles within the process
    write_lock: Arc<Mutex<()>>,
}

impl HistoryFile {
    pub(crate) fn new(path: PathBuf, capacity: usize, label: &'static str) -> Self {
        Self {
            path,
            capacity,
            label,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored history, degrading to empty on any failure
    pub(crate) async fn load<T>(&self) -> BoundedHistory<T>
    where
        T: HistoryEntry + DeserializeOwned + Validate,
    {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return BoundedHistory::new(self.capacity);
            }
            Err(e) => {
                warn!(
                    history = self.label,
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read history, using empty history"
                );
                return BoundedHistory::new(self.capacity);
            }
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                warn!(
                    history = self.label,
                    path = %self.path.display(),
                    error = %e,
                    "History file is not a JSON array, using empty history"
                );
                return BoundedHistory::new(self.capacity);
            }
        };

        let mut entries = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            let entry: T = match serde_json::from_value(value) {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(history = self.label, index, error = %e, "Dropping unparsable history entry");
                    continue;
                }
            };
            match validate_record(&entry) {
                Ok(()) => entries.push(entry),
                Err(err) => {
                    warn!(
                        history = self.label,
                        index,
                        error = %err.user_message(),
                        "Dropping invalid history entry"
                    );
                }
            }
        }

        BoundedHistory::from_entries(entries, self.capacity)
    }

    /// Load, apply `update`, and write back
    pub(crate) async fn update<T, F>(&self, update: F) -> AppResult<BoundedHistory<T>>
    where
        T: HistoryEntry + DeserializeOwned + Serialize + Validate,
        F: FnOnce(&mut BoundedHistory<T>),
    {
        let _guard = self.write_lock.lock().await;
        let mut history = self.load().await;
        update(&mut history);
        self.save(&history).await?;
        Ok(history)
    }

    async fn save<T: HistoryEntry + Serialize>(&self, history: &BoundedHistory<T>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(history.entries())?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).await?;
        fs::rename(&tmp_path, &self.path).await?;

        debug!(history = self.label, entries = history.len(), "History saved");
        Ok(())
    }

    pub(crate) async fn clear(&self) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
