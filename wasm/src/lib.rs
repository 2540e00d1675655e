//! Fitness Coach WASM Module
//!
//! Exposes the recommendation engine and the workout estimators to the
//! browser. Structured values cross the boundary as JSON strings; the plain
//! numeric estimators take and return numbers directly.

use fitness_coach_shared::{analytics, CoachError, CoachResult, CoachingRequest, Exercise};
use wasm_bindgen::prelude::*;

/// Build a recommendation from a JSON `CoachingRequest`
///
/// Every field of the request is optional. Returns the recommendation as JSON.
#[wasm_bindgen]
pub fn generate_plan(request_json: &str) -> Result<String, JsValue> {
    plan_json(request_json).map_err(to_js_error)
}

/// Calories burned for a session; `weight_kg` may be undefined
#[wasm_bindgen]
pub fn estimate_calories(weight_kg: Option<i32>, duration_minutes: i32, intensity_label: &str) -> i32 {
    analytics::estimate_calories(weight_kg, duration_minutes, intensity_label)
}

/// Intensity label ("Recovery", "Intense", "Moderate" or "Light") for a day type
#[wasm_bindgen]
pub fn resolve_intensity(day_type: &str) -> String {
    analytics::resolve_intensity(day_type).to_string()
}

/// Whole minutes for a JSON array of exercises
#[wasm_bindgen]
pub fn estimate_duration_minutes(exercises_json: &str) -> Result<i32, JsValue> {
    duration_from_json(exercises_json).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn estimate_calories_from_steps(steps: i32, heart_rate_bpm: i32) -> i32 {
    analytics::estimate_calories_from_steps(steps, heart_rate_bpm)
}

fn plan_json(request_json: &str) -> CoachResult<String> {
    let request: CoachingRequest = serde_json::from_str(request_json)?;
    Ok(serde_json::to_string(&request.recommend())?)
}

fn duration_from_json(exercises_json: &str) -> CoachResult<i32> {
    let exercises: Vec<Exercise> = serde_json::from_str(exercises_json)?;
    Ok(analytics::estimate_duration_minutes(&exercises))
}

fn to_js_error(err: CoachError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
