//! Workout analytics
//!
//! Estimates session duration and energy expenditure from program data, and
//! classifies day types into coarse intensity levels.
//!
//! All functions are total: missing or out-of-range inputs fall back to
//! documented defaults instead of failing.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::models::{Exercise, ProgramDay, WorkoutSession};
use crate::round_half_up;

/// Body weight assumed when the profile has none
pub const DEFAULT_WEIGHT_KG: i32 = 72;

/// Lowest body weight used in calorie estimates
pub const MIN_CALORIE_WEIGHT_KG: i32 = 40;

/// Focus label for a session whose exercises name no muscle group
pub const FULL_BODY_FOCUS: &str = "Full body";

// MET values per intensity label
const MET_INTENSE: f64 = 8.5;
const MET_MODERATE: f64 = 6.0;
const MET_LIGHT: f64 = 4.0;
const MET_DEFAULT: f64 = 5.5;

// ============================================================================
// Intensity
// ============================================================================

/// Coarse intensity derived from a day type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    Recovery,
    Intense,
    Moderate,
    Light,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Recovery => "Recovery",
            Intensity::Intense => "Intense",
            Intensity::Moderate => "Moderate",
            Intensity::Light => "Light",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a day type label
///
/// Rules are checked in order and the first substring match wins:
/// rest, then hiit/intense/power, then cardio/strength, then yoga/mobility.
/// Anything else is moderate.
pub fn resolve_intensity(day_type: &str) -> Intensity {
    let normalized = day_type.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| normalized.contains(n));

    if has(&["rest"]) {
        Intensity::Recovery
    } else if has(&["hiit", "intense", "power"]) {
        Intensity::Intense
    } else if has(&["cardio", "strength"]) {
        Intensity::Moderate
    } else if has(&["yoga", "mobility"]) {
        Intensity::Light
    } else {
        Intensity::Moderate
    }
}

/// MET constant for an intensity label (case-insensitive)
pub fn met_for_label(intensity_label: &str) -> f64 {
    match intensity_label.to_lowercase().as_str() {
        "intense" | "hiit" | "power" => MET_INTENSE,
        "moderate" => MET_MODERATE,
        "recovery" | "light" => MET_LIGHT,
        _ => MET_DEFAULT,
    }
}

// ============================================================================
// Duration and Calories
// ============================================================================

/// Estimate how long a list of exercises takes, in whole minutes
///
/// Sums each exercise's fixed duration plus the low end of its expected
/// range, then floors to minutes. A non-empty list is never under a minute.
pub fn estimate_duration_minutes(exercises: &[Exercise]) -> i32 {
    if exercises.is_empty() {
        return 0;
    }
    let total_secs: i64 = exercises
        .iter()
        .map(|e| i64::from(e.duration_secs) + i64::from(e.expected_duration.min_secs))
        .sum();
    let minutes = total_secs.div_euclid(60).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    minutes.max(1)
}

/// Estimate calories burned
///
/// Formula: MET × 3.5 × weight(kg) ÷ 200 × minutes
pub fn estimate_calories(weight_kg: Option<i32>, duration_minutes: i32, intensity_label: &str) -> i32 {
    let weight = weight_kg.unwrap_or(DEFAULT_WEIGHT_KG).max(MIN_CALORIE_WEIGHT_KG);
    let met = met_for_label(intensity_label);
    let calories = met * 3.5 * f64::from(weight) / 200.0 * f64::from(duration_minutes);
    round_half_up(calories)
}

/// Estimate calories from a wearable step count
///
/// Effort per step scales with heart rate: 0.06 above 150 bpm,
/// 0.05 above 120 bpm, 0.04 otherwise.
pub fn estimate_calories_from_steps(steps: i32, heart_rate_bpm: i32) -> i32 {
    if steps <= 0 {
        return 0;
    }
    let effort = if heart_rate_bpm > 150 {
        0.06
    } else if heart_rate_bpm > 120 {
        0.05
    } else {
        0.04
    };
    round_half_up(f64::from(steps) * effort)
}

// ============================================================================
// Session Summary
// ============================================================================

/// Build the history record for a finished program day
pub fn summarize_completed_day(
    workout_id: &str,
    week_number: i32,
    day: &ProgramDay,
    weight_kg: Option<i32>,
    completed_at: DateTime<Utc>,
) -> WorkoutSession {
    let intensity = resolve_intensity(&day.day_type);
    let duration_minutes = estimate_duration_minutes(&day.exercises);
    let calories_burned = estimate_calories(weight_kg, duration_minutes, intensity.as_str());

    let muscles: IndexSet<&str> = day
        .exercises
        .iter()
        .filter_map(|e| e.primary_muscle.as_deref())
        .collect();
    let focus_areas = if muscles.is_empty() {
        vec![FULL_BODY_FOCUS.to_string()]
    } else {
        muscles.into_iter().map(str::to_string).collect()
    };

    WorkoutSession {
        workout_id: workout_id.to_string(),
        workout_name: day.day_type.clone(),
        duration_minutes,
        completed_at,
        calories_burned,
        week_number,
        day_number: day.day_number,
        focus_areas,
        intensity_label: intensity.to_string(),
    }
}
