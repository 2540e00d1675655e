//! Common test utilities for integration tests
//!
//! Each test gets its own history directory under the system temp dir.

#![allow(dead_code)]

use std::path::PathBuf;

use fitness_coach::{config::AppConfig, state::AppState};
use fitness_coach_shared::{
    ActiveWorkoutProgram, DurationRange, Exercise, ProgramDay, ProgramWeek, UserProfile,
};

/// Test application wrapper
pub struct TestCoach {
    pub state: AppState,
    pub data_dir: PathBuf,
}

impl TestCoach {
    /// Create a new test app with an empty history directory
    pub fn new() -> Self {
        let data_dir = std::env::temp_dir().join(format!("fitness-coach-it-{}", uuid::Uuid::new_v4()));
        let config = AppConfig::default().with_data_dir(data_dir.to_string_lossy());
        Self {
            state: AppState::new(config),
            data_dir,
        }
    }

    /// Clean up test data
    pub async fn cleanup(&self) {
        tokio::fs::remove_dir_all(&self.data_dir).await.ok();
    }
}

pub fn exercise(name: &str, muscle: &str, duration_secs: i32) -> Exercise {
    Exercise {
        name: name.to_string(),
        duration_secs,
        expected_duration: DurationRange {
            min_secs: 30,
            max_secs: 60,
        },
        primary_muscle: Some(muscle.to_string()),
    }
}

/// Two-week program: legs dominate, then back, then core
pub fn sample_program() -> ActiveWorkoutProgram {
    ActiveWorkoutProgram {
        id: "strength-base".to_string(),
        name: "Strength Base".to_string(),
        min_per_day: Some(45),
        weeks: vec![
            ProgramWeek {
                week_number: 1,
                days: vec![
                    ProgramDay {
                        day_number: 1,
                        day_type: "Strength".to_string(),
                        exercises: vec![
                            exercise("Back Squat", "Legs", 600),
                            exercise("Lunge", "Legs", 420),
                            exercise("Row", "Back", 480),
                        ],
                    },
                    ProgramDay {
                        day_number: 2,
                        day_type: "Rest Day".to_string(),
                        exercises: vec![exercise("Plank", "Core", 300)],
                    },
                ],
            },
            ProgramWeek {
                week_number: 2,
                days: vec![ProgramDay {
                    day_number: 1,
                    day_type: "HIIT Blast".to_string(),
                    exercises: vec![exercise("Jump Squat", "Legs", 540)],
                }],
            },
        ],
    }
}

pub fn sample_profile() -> UserProfile {
    UserProfile {
        weight_kg: Some(90),
        target_weight_kg: Some(82),
        fitness_goal: Some("Lose weight".to_string()),
        preferred_days: vec!["mon".into(), "wed".into(), "fri".into()],
        workout_frequency: 3,
    }
}
