//! Fitness Coach Shared Library
//!
//! This crate contains the coaching domain: records, workout analytics, the
//! recommendation engine and bounded history lists. It performs no I/O and is
//! used by the command-line app and the WASM module alike.

pub mod analytics;
pub mod errors;
pub mod history;
pub mod models;
pub mod recommendation;
pub mod validation;

// Re-export commonly used items
pub use analytics::{
    estimate_calories, estimate_calories_from_steps, estimate_duration_minutes,
    resolve_intensity, summarize_completed_day, Intensity,
};
pub use errors::*;
pub use history::{
    BoundedHistory, HistoryEntry, NUTRITION_HISTORY_CAPACITY, WORKOUT_HISTORY_CAPACITY,
};
pub use models::*;
pub use recommendation::{
    CoachRecommendation, CoachingRequest, DietPlanRecommendation, MacroTargets, MealSuggestion,
    RecommendationEngine, WorkoutActionItem, WorkoutPlanRecommendation,
};

/// Round to the nearest integer, halves rounding up (toward positive infinity)
pub fn round_half_up(value: f64) -> i32 {
    let rounded = (value + 0.5).floor();
    if rounded.is_nan() {
        0
    } else {
        // `as` saturates at the i32 bounds
        rounded as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(f64::NAN), 0);
        assert_eq!(round_half_up(1e12), i32::MAX);
    }
}
