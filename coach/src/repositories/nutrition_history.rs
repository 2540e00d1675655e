//! Daily nutrition history repository

use std::path::{Path, PathBuf};

use fitness_coach_shared::{BoundedHistory, NutritionLog, NUTRITION_HISTORY_CAPACITY};
use tracing::info;

use super::HistoryFile;
use crate::error::AppResult;

/// One nutrition snapshot per calendar day, newest first, at most 14
#[derive(Debug, Clone)]
pub struct NutritionHistoryRepository {
    file: HistoryFile,
}

impl NutritionHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: HistoryFile::new(path.into(), NUTRITION_HISTORY_CAPACITY, "nutrition"),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Record a day's intake, replacing any earlier log for the same day
    pub async fn log_daily_intake(&self, entry: NutritionLog) -> AppResult<()> {
        let day = entry.day_key();

        let history: BoundedHistory<NutritionLog> = self
            .file
            .update(|history| {
                history.record(entry);
            })
            .await?;

        info!(day = %day, stored = history.len(), "Daily intake logged");
        Ok(())
    }

    /// Stored logs, most recent first
    pub async fn get_history(&self) -> Vec<NutritionLog> {
        self.file.load::<NutritionLog>().await.into_vec()
    }

    pub async fn clear(&self) -> AppResult<()> {
        self.file.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("fitness-coach-{}", uuid::Uuid::new_v4()))
            .join("nutrition_history.json")
    }

    fn log_at(hours: i64, protein: i32) -> NutritionLog {
        NutritionLog {
            timestamp: Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap() + Duration::hours(hours),
            calories_goal: 2300,
            calories_consumed: 1900,
            protein_goal: 160,
            protein_consumed: protein,
            carbs_goal: 260,
            carbs_consumed: 230,
            fat_goal: 75,
            fat_consumed: 70,
        }
    }

    #[tokio::test]
    async fn test_same_day_replaces() {
        let repo = NutritionHistoryRepository::new(temp_path());
        repo.log_daily_intake(log_at(9, 40)).await.unwrap();
        repo.log_daily_intake(log_at(21, 150)).await.unwrap();

        let history = repo.get_history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].protein_consumed, 150);
    }

    #[tokio::test]
    async fn test_keeps_fourteen_days() {
        let repo = NutritionHistoryRepository::new(temp_path());
        for day in 0..20 {
            repo.log_daily_intake(log_at(day * 24 + 12, 100 + day as i32)).await.unwrap();
        }

        let history = repo.get_history().await;
        assert_eq!(history.len(), NUTRITION_HISTORY_CAPACITY);
        assert_eq!(history[0].protein_consumed, 119);
        assert_eq!(history[13].protein_consumed, 106);
    }
}
