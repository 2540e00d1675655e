//! Recommendation engine
//!
//! Turns a user profile, recent workout and nutrition history, the active
//! program and today's intake into a weekly workout plan and a daily diet
//! plan. The engine is a pure function of its inputs: it never mutates them,
//! never performs I/O and returns identical output for identical input.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::analytics::{DEFAULT_WEIGHT_KG, FULL_BODY_FOCUS};
use crate::models::{ActiveWorkoutProgram, NutritionLog, TodayIntake, UserProfile, WorkoutSession};
use crate::round_half_up;

/// Week used when the profile names no preferred days
pub const DEFAULT_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Sessions per week when the profile states none
pub const DEFAULT_WEEKLY_FREQUENCY: i32 = 4;

/// Session length in minutes when no program is active
pub const DEFAULT_SESSION_MINUTES: i32 = 35;

/// Focus areas when neither program nor history names any
pub const DEFAULT_FOCUS_AREAS: [&str; 3] = ["Mobility", "Strength", "Cardio"];

/// Number of most recent records averaged for trends
pub const RECENT_WINDOW: usize = 5;

/// Inclusive calorie target bounds
pub const CALORIE_TARGET_RANGE: (i32, i32) = (1400, 3800);

/// Inclusive hydration goal bounds in millilitres
pub const HYDRATION_RANGE_ML: (i32, i32) = (2000, 4200);

/// Hydration per kilogram of body weight
pub const HYDRATION_ML_PER_KG: i32 = 35;

/// Reminders kept per plan
pub const MAX_REMINDERS: usize = 3;

/// Share of a goal below which intake counts as behind
const BEHIND_THRESHOLD: f64 = 0.8;

const RECOVERY_CUE: &str = " • Active recovery";

// ============================================================================
// Output Types
// ============================================================================

/// Complete coaching output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachRecommendation {
    pub workout_plan: WorkoutPlanRecommendation,
    pub diet_plan: DietPlanRecommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlanRecommendation {
    pub weekly_minutes: i32,
    /// Focus areas ranked by priority
    pub focus_areas: Vec<String>,
    pub action_items: Vec<WorkoutActionItem>,
    /// Suggested session length in minutes
    pub recommended_duration: i32,
}

/// One scheduled day of the weekly plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutActionItem {
    pub day_label: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlanRecommendation {
    pub calorie_target: i32,
    pub macro_targets: MacroTargets,
    pub reminders: Vec<String>,
    pub hydration_goal_ml: i32,
    pub meals: Vec<MealSuggestion>,
}

/// Daily macro targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein: i32,
    pub carbs: i32,
    pub fats: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSuggestion {
    pub title: String,
    pub description: String,
}

// ============================================================================
// Macro Splits
// ============================================================================

/// Protein/carb/fat share of daily calories
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroSplit {
    pub const MUSCLE_GAIN: MacroSplit = MacroSplit {
        protein: 0.35,
        carbs: 0.30,
        fats: 0.35,
    };
    pub const FAT_LOSS: MacroSplit = MacroSplit {
        protein: 0.35,
        carbs: 0.35,
        fats: 0.30,
    };
    pub const BALANCED: MacroSplit = MacroSplit {
        protein: 0.30,
        carbs: 0.40,
        fats: 0.30,
    };

    /// Pick a split from goal text; "muscle" is checked before "lose"
    pub fn for_goal(goal: &str) -> Self {
        let goal = goal.to_lowercase();
        if goal.contains("muscle") {
            Self::MUSCLE_GAIN
        } else if goal.contains("lose") {
            Self::FAT_LOSS
        } else {
            Self::BALANCED
        }
    }

    /// Gram targets for a calorie budget (4 kcal/g protein and carbs, 9 kcal/g fat)
    pub fn targets(&self, calories: i32) -> MacroTargets {
        let calories = f64::from(calories);
        MacroTargets {
            protein: round_half_up(calories * self.protein / 4.0),
            carbs: round_half_up(calories * self.carbs / 4.0),
            fats: round_half_up(calories * self.fats / 9.0),
        }
    }
}

// ============================================================================
// Engine
// ============================================================================

/// All engine inputs as one record, for callers that exchange JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachingRequest {
    pub profile: Option<UserProfile>,
    pub workout_history: Vec<WorkoutSession>,
    pub nutrition_history: Vec<NutritionLog>,
    pub active_program: Option<ActiveWorkoutProgram>,
    pub today_intake: Option<TodayIntake>,
}

impl CoachingRequest {
    pub fn recommend(&self) -> CoachRecommendation {
        RecommendationEngine::generate_plan(
            self.profile.as_ref(),
            &self.workout_history,
            &self.nutrition_history,
            self.active_program.as_ref(),
            self.today_intake.as_ref(),
        )
    }
}

/// Rule-based workout and diet planner
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Build a full recommendation
    ///
    /// Histories must be ordered most-recent-first.
    pub fn generate_plan(
        profile: Option<&UserProfile>,
        workout_history: &[WorkoutSession],
        nutrition_history: &[NutritionLog],
        active_program: Option<&ActiveWorkoutProgram>,
        today_intake: Option<&TodayIntake>,
    ) -> CoachRecommendation {
        CoachRecommendation {
            workout_plan: Self::build_workout_plan(profile, workout_history, active_program),
            diet_plan: Self::build_diet_plan(profile, nutrition_history, today_intake),
        }
    }

    pub fn build_workout_plan(
        profile: Option<&UserProfile>,
        workout_history: &[WorkoutSession],
        active_program: Option<&ActiveWorkoutProgram>,
    ) -> WorkoutPlanRecommendation {
        let preferred_days: Vec<&str> = match profile {
            Some(p) if !p.preferred_days.is_empty() => {
                p.preferred_days.iter().map(String::as_str).collect()
            }
            _ => DEFAULT_DAYS.to_vec(),
        };
        let weekly_frequency = profile
            .map(|p| p.workout_frequency)
            .filter(|f| *f > 0)
            .unwrap_or(DEFAULT_WEEKLY_FREQUENCY);
        let base_duration = active_program
            .map(|program| program.min_per_day.unwrap_or(DEFAULT_SESSION_MINUTES))
            .unwrap_or(DEFAULT_SESSION_MINUTES);
        let weekly_minutes = weekly_frequency.saturating_mul(base_duration);

        let focus_areas = match (active_program, workout_history.first()) {
            (Some(program), _) => rank_focus_areas(program),
            (None, Some(latest)) => latest.focus_areas.clone(),
            (None, None) => default_focus_areas(),
        };

        let last_index = preferred_days.len() - 1;
        let action_items = preferred_days
            .iter()
            .take(weekly_frequency as usize)
            .enumerate()
            .map(|(index, day)| {
                let focus = if focus_areas.is_empty() {
                    FULL_BODY_FOCUS
                } else {
                    focus_areas[index % focus_areas.len()].as_str()
                };
                let recovery_cue = if index == last_index { RECOVERY_CUE } else { "" };
                WorkoutActionItem {
                    day_label: capitalize_first(day),
                    summary: format!("{focus} focus{recovery_cue} - {base_duration}min"),
                }
            })
            .collect();

        let recent = &workout_history[..RECENT_WINDOW.min(workout_history.len())];
        let recommended_duration = if recent.is_empty() {
            base_duration
        } else {
            average(recent.iter().map(|s| s.duration_minutes)).max(base_duration)
        };

        WorkoutPlanRecommendation {
            weekly_minutes,
            focus_areas,
            action_items,
            recommended_duration,
        }
    }

    pub fn build_diet_plan(
        profile: Option<&UserProfile>,
        nutrition_history: &[NutritionLog],
        today_intake: Option<&TodayIntake>,
    ) -> DietPlanRecommendation {
        let weight = profile
            .and_then(|p| p.weight_kg)
            .unwrap_or(DEFAULT_WEIGHT_KG);
        let target_weight = profile
            .and_then(|p| p.target_weight_kg)
            .unwrap_or(weight);
        let goal = profile
            .and_then(|p| p.fitness_goal.as_deref())
            .unwrap_or_default();

        let calorie_target = calorie_target(weight, target_weight);
        let macro_targets = MacroSplit::for_goal(goal).targets(calorie_target);
        let hydration_goal_ml = weight
            .saturating_mul(HYDRATION_ML_PER_KG)
            .clamp(HYDRATION_RANGE_ML.0, HYDRATION_RANGE_ML.1);

        let mut reminders = Vec::new();
        if let Some(intake) = today_intake {
            if intake.calories_goal > 0.0
                && intake.calories_intake < intake.calories_goal * BEHIND_THRESHOLD
            {
                let behind = round_half_up(
                    (intake.calories_goal - intake.calories_intake) / intake.calories_goal * 100.0,
                );
                reminders.push(format!(
                    "You are {behind}% behind today's calories, schedule a balanced snack."
                ));
            }
            if intake.protein_consumed < f64::from(macro_targets.protein) * BEHIND_THRESHOLD {
                reminders.push(format!(
                    "Prioritize lean protein at the next meal to reach {}g target.",
                    macro_targets.protein
                ));
            }
        }

        let recent = &nutrition_history[..RECENT_WINDOW.min(nutrition_history.len())];
        if !recent.is_empty() {
            let average_protein = average(recent.iter().map(|log| log.protein_consumed));
            if average_protein < macro_targets.protein {
                reminders.push(format!(
                    "Average protein intake ({average_protein}g) is under the goal, add an evening shake."
                ));
            }
        }
        reminders.truncate(MAX_REMINDERS);

        DietPlanRecommendation {
            calorie_target,
            macro_targets,
            reminders,
            hydration_goal_ml,
            meals: default_meals(),
        }
    }
}

/// Daily calories for moving from `weight` toward `target_weight`
///
/// Cut: weight × 32 − 350. Bulk: weight × 36 + 200. Maintain: weight × 34.
/// Always clamped to [1400, 3800].
pub fn calorie_target(weight_kg: i32, target_weight_kg: i32) -> i32 {
    let raw = if target_weight_kg < weight_kg {
        weight_kg.saturating_mul(32).saturating_sub(350)
    } else if target_weight_kg > weight_kg {
        weight_kg.saturating_mul(36).saturating_add(200)
    } else {
        weight_kg.saturating_mul(34)
    };
    raw.clamp(CALORIE_TARGET_RANGE.0, CALORIE_TARGET_RANGE.1)
}

/// Rank muscle groups across the whole program by how often they are the
/// primary target; ties keep first-seen order
pub fn rank_focus_areas(program: &ActiveWorkoutProgram) -> Vec<String> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for muscle in program.exercises().filter_map(|e| e.primary_muscle.as_deref()) {
        *counts.entry(muscle).or_insert(0) += 1;
    }
    if counts.is_empty() {
        return default_focus_areas();
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // stable sort keeps insertion order among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().map(|(name, _)| name.to_string()).collect()
}

fn default_focus_areas() -> Vec<String> {
    DEFAULT_FOCUS_AREAS.iter().map(|s| s.to_string()).collect()
}

fn default_meals() -> Vec<MealSuggestion> {
    [
        ("Power Breakfast", "Greek yogurt, berries, and oats for steady energy"),
        ("Training Lunch", "Lean protein + complex carbs + greens"),
        ("Recovery Dinner", "Focus on colorful veggies and slow carbs"),
        ("Hydration Snack", "Electrolyte-rich smoothie between workouts"),
    ]
    .into_iter()
    .map(|(title, description)| MealSuggestion {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn average(values: impl ExactSizeIterator<Item = i32>) -> i32 {
    let count = values.len();
    let total: i64 = values.map(i64::from).sum();
    round_half_up(total as f64 / count as f64)
}

/// Titlecase the first character when it is lowercase; anything else is kept
fn capitalize_first(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            let mut capitalized = titlecase(first);
            capitalized.extend(chars);
            capitalized
        }
        Some(_) => label.to_string(),
        None => String::new(),
    }
}

/// Unicode titlecase of a single character
///
/// Only the four Latin digraphs have a titlecase form distinct from upper
/// case; otherwise the first uppercase char is kept and any expansion is
/// lowered ('ß' becomes "Ss").
fn titlecase(c: char) -> String {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ".to_string(),
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ".to_string(),
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ".to_string(),
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ".to_string(),
        _ => {
            let mut upper = c.to_uppercase();
            let mut titled = String::new();
            if let Some(first) = upper.next() {
                titled.push(first);
            }
            titled.extend(upper.flat_map(char::to_lowercase));
            titled
        }
    }
}
