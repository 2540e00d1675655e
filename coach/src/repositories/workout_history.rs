//! Workout session history repository

use std::path::{Path, PathBuf};

use fitness_coach_shared::{BoundedHistory, WorkoutSession, WORKOUT_HISTORY_CAPACITY};
use tracing::info;

use super::HistoryFile;
use crate::error::AppResult;

/// Completed workout sessions, newest first, at most 40
#[derive(Debug, Clone)]
pub struct WorkoutHistoryRepository {
    file: HistoryFile,
}

impl WorkoutHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: HistoryFile::new(path.into(), WORKOUT_HISTORY_CAPACITY, "workout"),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Record a session, replacing any earlier one for the same
    /// workout, week and day
    pub async fn log_session(&self, session: WorkoutSession) -> AppResult<()> {
        let workout_id = session.workout_id.clone();
        let (week, day) = (session.week_number, session.day_number);

        let history: BoundedHistory<WorkoutSession> = self
            .file
            .update(|history| {
                history.record(session);
            })
            .await?;

        info!(
            workout_id = %workout_id,
            week,
            day,
            stored = history.len(),
            "Workout session logged"
        );
        Ok(())
    }

    /// Stored sessions, most recent first
    pub async fn get_history(&self) -> Vec<WorkoutSession> {
        self.file.load::<WorkoutSession>().await.into_vec()
    }

    pub async fn clear(&self) -> AppResult<()> {
        self.file.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("fitness-coach-{}", uuid::Uuid::new_v4()))
            .join("workout_history.json")
    }

    fn session(day: i32, minutes: i32) -> WorkoutSession {
        WorkoutSession {
            workout_id: "prog-1".to_string(),
            workout_name: "Strength".to_string(),
            duration_minutes: minutes,
            completed_at: Utc.with_ymd_and_hms(2025, 4, 1, 7, 0, 0).unwrap(),
            calories_burned: 210,
            week_number: 1,
            day_number: day,
            focus_areas: vec!["Legs".to_string()],
            intensity_label: "Moderate".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let repo = WorkoutHistoryRepository::new(temp_path());
        assert!(repo.get_history().await.is_empty());
    }

    #[tokio::test]
    async fn test_log_session_round_trip() {
        let repo = WorkoutHistoryRepository::new(temp_path());
        repo.log_session(session(1, 30)).await.unwrap();
        repo.log_session(session(2, 40)).await.unwrap();
        repo.log_session(session(1, 45)).await.unwrap();

        let history = repo.get_history().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].day_number, 1);
        assert_eq!(history[0].duration_minutes, 45);
        assert_eq!(history[1].day_number, 2);
    }

    #[tokio::test]
    async fn test_capacity_enforced_on_write() {
        let repo = WorkoutHistoryRepository::new(temp_path());
        for day in 0..(WORKOUT_HISTORY_CAPACITY as i32 + 5) {
            repo.log_session(session(day, 30)).await.unwrap();
        }
        let history = repo.get_history().await;
        assert_eq!(history.len(), WORKOUT_HISTORY_CAPACITY);
        assert_eq!(history[0].day_number, WORKOUT_HISTORY_CAPACITY as i32 + 4);
    }

    #[tokio::test]
    async fn test_corrupt_file_degrades_to_empty() {
        let path = temp_path();
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, "{not json").await.unwrap();

        let repo = WorkoutHistoryRepository::new(&path);
        assert!(repo.get_history().await.is_empty());

        // logging over a corrupt file starts a fresh history
        repo.log_session(session(1, 30)).await.unwrap();
        assert_eq!(repo.get_history().await.len(), 1);
    }

    #[tokio::test]
    async fn test_bad_entries_are_dropped() {
        let path = temp_path();
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        let good = serde_json::to_value(session(2, 30)).unwrap();
        let mut invalid = serde_json::to_value(session(3, 30)).unwrap();
        invalid["duration_minutes"] = serde_json::json!(-10);
        let body = serde_json::json!([good, {"workout_id": 7}, invalid]);
        tokio::fs::write(&path, body.to_string()).await.unwrap();

        let history = WorkoutHistoryRepository::new(&path).get_history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].day_number, 2);
    }

    #[tokio::test]
    async fn test_clear() {
        let repo = WorkoutHistoryRepository::new(temp_path());
        repo.clear().await.unwrap();
        repo.log_session(session(1, 30)).await.unwrap();
        repo.clear().await.unwrap();
        assert!(repo.get_history().await.is_empty());
    }
}
