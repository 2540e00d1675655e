//! Integration tests for the coaching flow

mod common;

use chrono::{Duration, TimeZone, Utc};
use fitness_coach::services::CoachingService;
use fitness_coach_shared::{TodayIntake, NUTRITION_HISTORY_CAPACITY};

#[tokio::test]
async fn test_recommendation_without_history() {
    let app = common::TestCoach::new();

    let recommendation = CoachingService::recommend(&app.state, None, None, None)
        .await
        .unwrap();

    let workout = &recommendation.workout_plan;
    assert_eq!(workout.weekly_minutes, 140);
    assert_eq!(workout.focus_areas, vec!["Mobility", "Strength", "Cardio"]);
    assert_eq!(workout.recommended_duration, 35);
    assert_eq!(workout.action_items.len(), 4);

    let diet = &recommendation.diet_plan;
    assert_eq!(diet.calorie_target, 2448);
    assert_eq!(diet.hydration_goal_ml, 2520);
    assert_eq!(diet.meals.len(), 4);

    app.cleanup().await;
}

#[tokio::test]
async fn test_full_week_flow() {
    let app = common::TestCoach::new();
    let program = common::sample_program();
    let profile = common::sample_profile();
    let start = Utc.with_ymd_and_hms(2025, 5, 5, 18, 0, 0).unwrap();

    for (offset, (week, day)) in [(1, 1), (1, 2), (2, 1)].into_iter().enumerate() {
        CoachingService::complete_workout(
            &app.state,
            &program,
            week,
            day,
            profile.weight_kg,
            start + Duration::days(offset as i64),
        )
        .await
        .unwrap();
    }

    // Two logs on the same day collapse into one
    let low_protein = TodayIntake {
        calories_goal: 2500.0,
        calories_intake: 1800.0,
        protein_goal: 190.0,
        protein_consumed: 60.0,
        ..TodayIntake::default()
    };
    CoachingService::log_daily_intake(&app.state, &low_protein, start)
        .await
        .unwrap();
    CoachingService::log_daily_intake(&app.state, &low_protein, start + Duration::hours(2))
        .await
        .unwrap();
    assert_eq!(CoachingService::nutrition_history(&app.state).await.len(), 1);

    let today = TodayIntake {
        calories_goal: 2500.0,
        calories_intake: 1000.0,
        protein_goal: 190.0,
        protein_consumed: 40.0,
        ..TodayIntake::default()
    };
    let recommendation =
        CoachingService::recommend(&app.state, Some(&profile), Some(&program), Some(&today))
            .await
            .unwrap();

    let workout = &recommendation.workout_plan;
    assert_eq!(workout.focus_areas, vec!["Legs", "Back", "Core"]);
    assert_eq!(workout.weekly_minutes, 135);
    assert_eq!(workout.recommended_duration, 45);
    let lines: Vec<String> = workout
        .action_items
        .iter()
        .map(|a| format!("{}: {}", a.day_label, a.summary))
        .collect();
    assert_eq!(
        lines,
        vec![
            "Mon: Legs focus - 45min",
            "Wed: Back focus - 45min",
            "Fri: Core focus • Active recovery - 45min",
        ]
    );

    // cut: 90 * 32 - 350 = 2530; lose split protein 2530 * 0.35 / 4 = 221.375
    let diet = &recommendation.diet_plan;
    assert_eq!(diet.calorie_target, 2530);
    assert_eq!(diet.macro_targets.protein, 221);
    assert_eq!(diet.hydration_goal_ml, 3150);
    assert_eq!(
        diet.reminders,
        vec![
            "You are 60% behind today's calories, schedule a balanced snack.",
            "Prioritize lean protein at the next meal to reach 221g target.",
            "Average protein intake (60g) is under the goal, add an evening shake.",
        ]
    );

    app.cleanup().await;
}

#[tokio::test]
async fn test_history_is_bounded_across_days() {
    let app = common::TestCoach::new();
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap();
    let intake = TodayIntake {
        calories_goal: 2200.0,
        calories_intake: 2100.0,
        protein_goal: 150.0,
        protein_consumed: 140.0,
        ..TodayIntake::default()
    };

    for day in 0..(NUTRITION_HISTORY_CAPACITY as i64 + 3) {
        CoachingService::log_daily_intake(&app.state, &intake, start + Duration::days(day))
            .await
            .unwrap();
    }

    let history = CoachingService::nutrition_history(&app.state).await;
    assert_eq!(history.len(), NUTRITION_HISTORY_CAPACITY);
    assert!(history.windows(2).all(|pair| pair[0].timestamp > pair[1].timestamp));

    app.cleanup().await;
}

#[tokio::test]
async fn test_repeated_recommendations_are_identical() {
    let app = common::TestCoach::new();
    let program = common::sample_program();
    let profile = common::sample_profile();

    CoachingService::complete_workout(&app.state, &program, 1, 1, None, Utc::now())
        .await
        .unwrap();

    let first = CoachingService::recommend(&app.state, Some(&profile), Some(&program), None)
        .await
        .unwrap();
    let second = CoachingService::recommend(&app.state, Some(&profile), Some(&program), None)
        .await
        .unwrap();
    assert_eq!(first, second);

    app.cleanup().await;
}
