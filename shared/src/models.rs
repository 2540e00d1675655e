//! Data models for the Fitness Coach
//!
//! Plain records exchanged between the caller layer (storage, UI, front ends)
//! and the coaching computations. Every optional field deserializes to the
//! default the engine documents, so partially filled JSON is always usable.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::history::HistoryEntry;
use crate::round_half_up;

// ============================================================================
// User Profile
// ============================================================================

/// Static user attributes and stated training preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Current body weight in kilograms
    pub weight_kg: Option<i32>,
    /// Target body weight in kilograms
    pub target_weight_kg: Option<i32>,
    /// Free-form goal text, e.g. "Build Muscle Mass" or "Lose weight"
    pub fitness_goal: Option<String>,
    /// Preferred training days in the order the user picked them
    pub preferred_days: Vec<String>,
    /// Sessions per week; zero or negative means "not stated"
    pub workout_frequency: i32,
}

// ============================================================================
// Workout History
// ============================================================================

/// One completed workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WorkoutSession {
    #[validate(length(min = 1))]
    pub workout_id: String,
    pub workout_name: String,
    #[validate(range(min = 0, max = 1440))]
    pub duration_minutes: i32,
    pub completed_at: DateTime<Utc>,
    #[validate(range(min = 0))]
    pub calories_burned: i32,
    #[validate(range(min = 0))]
    pub week_number: i32,
    #[validate(range(min = 0))]
    pub day_number: i32,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    pub intensity_label: String,
}

impl HistoryEntry for WorkoutSession {
    type Key = (String, i32, i32);

    fn history_key(&self) -> Self::Key {
        (self.workout_id.clone(), self.week_number, self.day_number)
    }
}

// ============================================================================
// Nutrition History
// ============================================================================

/// One day's nutrition snapshot, rounded to whole units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NutritionLog {
    pub timestamp: DateTime<Utc>,
    #[validate(range(min = 0))]
    pub calories_goal: i32,
    #[validate(range(min = 0))]
    pub calories_consumed: i32,
    #[validate(range(min = 0))]
    pub protein_goal: i32,
    #[validate(range(min = 0))]
    pub protein_consumed: i32,
    #[validate(range(min = 0))]
    pub carbs_goal: i32,
    #[validate(range(min = 0))]
    pub carbs_consumed: i32,
    #[validate(range(min = 0))]
    pub fat_goal: i32,
    #[validate(range(min = 0))]
    pub fat_consumed: i32,
}

impl NutritionLog {
    /// Freeze a live intake snapshot into a history record
    pub fn from_intake(intake: &TodayIntake, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            calories_goal: round_half_up(intake.calories_goal),
            calories_consumed: round_half_up(intake.calories_intake),
            protein_goal: round_half_up(intake.protein_goal),
            protein_consumed: round_half_up(intake.protein_consumed),
            carbs_goal: round_half_up(intake.carbs_goal),
            carbs_consumed: round_half_up(intake.carbs_consumed),
            fat_goal: round_half_up(intake.fat_goal),
            fat_consumed: round_half_up(intake.fat_consumed),
        }
    }

    /// Calendar day (UTC) this log belongs to
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Day key in `yyyyMMdd` form
    pub fn day_key(&self) -> String {
        self.timestamp.format("%Y%m%d").to_string()
    }
}

impl HistoryEntry for NutritionLog {
    type Key = NaiveDate;

    fn history_key(&self) -> Self::Key {
        self.day()
    }
}

/// Live, same-day nutrition counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TodayIntake {
    #[validate(range(min = 0.0))]
    pub calories_goal: f64,
    #[validate(range(min = 0.0))]
    pub calories_intake: f64,
    #[validate(range(min = 0.0))]
    pub protein_goal: f64,
    #[validate(range(min = 0.0))]
    pub protein_consumed: f64,
    #[validate(range(min = 0.0))]
    pub carbs_goal: f64,
    #[validate(range(min = 0.0))]
    pub carbs_consumed: f64,
    #[validate(range(min = 0.0))]
    pub fat_goal: f64,
    #[validate(range(min = 0.0))]
    pub fat_consumed: f64,
}

// ============================================================================
// Workout Program
// ============================================================================

/// The multi-week program the user is currently enrolled in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveWorkoutProgram {
    pub id: String,
    pub name: String,
    /// Planned session length in minutes
    pub min_per_day: Option<i32>,
    pub weeks: Vec<ProgramWeek>,
}

impl ActiveWorkoutProgram {
    /// Look up a day by its week and day numbers
    pub fn day(&self, week_number: i32, day_number: i32) -> Option<&ProgramDay> {
        self.weeks
            .iter()
            .filter(|week| week.week_number == week_number)
            .flat_map(|week| week.days.iter())
            .find(|day| day.day_number == day_number)
    }

    /// Every exercise of every day of every week, in program order
    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.weeks
            .iter()
            .flat_map(|week| week.days.iter())
            .flat_map(|day| day.exercises.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramWeek {
    pub week_number: i32,
    pub days: Vec<ProgramDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramDay {
    pub day_number: i32,
    /// Day type label such as "HIIT Blast" or "Rest Day"
    pub day_type: String,
    pub exercises: Vec<Exercise>,
}

/// A single exercise inside a program day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exercise {
    pub name: String,
    /// Fixed work duration in seconds
    pub duration_secs: i32,
    /// Expected extra time range in seconds (transitions, rest)
    pub expected_duration: DurationRange,
    /// Primary target muscle group
    pub primary_muscle: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationRange {
    pub min_secs: i32,
    pub max_secs: i32,
}
