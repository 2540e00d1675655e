//! Application state management
//!
//! The shared state handed to every service call: configuration plus the
//! history repositories built from it.

use crate::config::AppConfig;
use crate::repositories::{NutritionHistoryRepository, WorkoutHistoryRepository};
use std::sync::Arc;

/// Shared application state
///
/// All fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub workouts: WorkoutHistoryRepository,
    pub nutrition: NutritionHistoryRepository,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        let workouts = WorkoutHistoryRepository::new(config.workout_history_path());
        let nutrition = NutritionHistoryRepository::new(config.nutrition_history_path());

        Self {
            config: Arc::new(config),
            workouts,
            nutrition,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repositories_follow_config() {
        let config = AppConfig::default().with_data_dir("/tmp/coach-state");
        let state = AppState::new(config);

        assert_eq!(state.workouts.path(), state.config().workout_history_path().as_path());
        assert_eq!(state.nutrition.path(), state.config().nutrition_history_path().as_path());

        // Clone should be O(1) - just Arc increments
        let _cloned = state.clone();
    }
}
