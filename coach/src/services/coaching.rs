//! Coaching service
//!
//! Provides the caller side of the coaching engine:
//! - Gathering history before asking for a recommendation
//! - Turning a finished program day into a logged session
//! - Freezing today's intake into the nutrition history

use chrono::{DateTime, Utc};
use fitness_coach_shared::validation::{validate_profile, validate_record};
use fitness_coach_shared::{
    summarize_completed_day, ActiveWorkoutProgram, CoachRecommendation, NutritionLog,
    RecommendationEngine, TodayIntake, UserProfile, WorkoutSession,
};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Which history a maintenance call targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Workouts,
    Nutrition,
}

/// Coaching service for business logic
pub struct CoachingService;

impl CoachingService {
    /// Build a recommendation from stored history and caller-supplied data
    pub async fn recommend(
        state: &AppState,
        profile: Option<&UserProfile>,
        active_program: Option<&ActiveWorkoutProgram>,
        today_intake: Option<&TodayIntake>,
    ) -> AppResult<CoachRecommendation> {
        if let Some(profile) = profile {
            validate_profile(profile)?;
        }

        let (workout_history, nutrition_history) =
            tokio::join!(state.workouts.get_history(), state.nutrition.get_history());
        debug!(
            workouts = workout_history.len(),
            nutrition_logs = nutrition_history.len(),
            has_program = active_program.is_some(),
            has_intake = today_intake.is_some(),
            "Generating recommendation"
        );

        let recommendation = RecommendationEngine::generate_plan(
            profile,
            &workout_history,
            &nutrition_history,
            active_program,
            today_intake,
        );

        info!(
            weekly_minutes = recommendation.workout_plan.weekly_minutes,
            recommended_duration = recommendation.workout_plan.recommended_duration,
            calorie_target = recommendation.diet_plan.calorie_target,
            reminders = recommendation.diet_plan.reminders.len(),
            "Recommendation generated"
        );
        Ok(recommendation)
    }

    /// Log a finished program day as a workout session
    pub async fn complete_workout(
        state: &AppState,
        program: &ActiveWorkoutProgram,
        week_number: i32,
        day_number: i32,
        weight_kg: Option<i32>,
        completed_at: DateTime<Utc>,
    ) -> AppResult<WorkoutSession> {
        let day = program.day(week_number, day_number).ok_or_else(|| {
            AppError::NotFound(format!(
                "Program '{}' has no day {} in week {}",
                program.id, day_number, week_number
            ))
        })?;

        let session = summarize_completed_day(&program.id, week_number, day, weight_kg, completed_at);
        validate_record(&session)?;
        state.workouts.log_session(session.clone()).await?;
        Ok(session)
    }

    /// Log today's intake snapshot into the nutrition history
    pub async fn log_daily_intake(
        state: &AppState,
        intake: &TodayIntake,
        timestamp: DateTime<Utc>,
    ) -> AppResult<NutritionLog> {
        validate_record(intake)?;
        let entry = NutritionLog::from_intake(intake, timestamp);
        validate_record(&entry)?;
        state.nutrition.log_daily_intake(entry.clone()).await?;
        Ok(entry)
    }

    pub async fn workout_history(state: &AppState) -> Vec<WorkoutSession> {
        state.workouts.get_history().await
    }

    pub async fn nutrition_history(state: &AppState) -> Vec<NutritionLog> {
        state.nutrition.get_history().await
    }

    /// Remove stored history; `None` clears both
    pub async fn clear_history(state: &AppState, kind: Option<HistoryKind>) -> AppResult<()> {
        if kind != Some(HistoryKind::Nutrition) {
            state.workouts.clear().await?;
        }
        if kind != Some(HistoryKind::Workouts) {
            state.nutrition.clear().await?;
        }
        info!(?kind, "History cleared");
        Ok(())
    }
}
