//! Input validation functions
//!
//! Range checks for user input and stored history records. Record-level
//! rules are declared with the `validator` derive on the models; this module
//! adds the profile checks and turns failures into user-facing messages.

use validator::Validate;

use crate::models::UserProfile;

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: i32) -> Result<(), String> {
    if weight_kg < 20 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate a preferred day label
pub fn validate_day_label(day: &str) -> Result<(), String> {
    if day.trim().is_empty() {
        return Err("Day label cannot be blank".to_string());
    }
    Ok(())
}

// ============================================================================
// Profile Validation
// ============================================================================

/// Validate a user profile before it is handed to the engine
///
/// Absent values are always fine, and so is any workout frequency: the
/// engine substitutes defaults for those.
pub fn validate_profile(profile: &UserProfile) -> Result<(), ValidationError> {
    if let Some(weight) = profile.weight_kg {
        validate_weight_kg(weight).map_err(|msg| ValidationError::new("weight_kg", &msg))?;
    }
    if let Some(target) = profile.target_weight_kg {
        validate_weight_kg(target)
            .map_err(|msg| ValidationError::new("target_weight_kg", &msg))?;
    }
    for day in &profile.preferred_days {
        validate_day_label(day).map_err(|msg| ValidationError::new("preferred_days", &msg))?;
    }
    Ok(())
}

/// Run the derived rules on a record, reporting the first failing field
///
/// Fields are reported in name order so the message is stable.
pub fn validate_record<T: Validate>(record: &T) -> Result<(), ValidationError> {
    let errors = match record.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    match fields.first() {
        Some((field, errs)) => {
            let message = errs
                .first()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("failed {} check", e.code),
                })
                .unwrap_or_else(|| "is invalid".to_string());
            Err(ValidationError::new(field, &message))
        }
        None => Err(ValidationError::new("record", "is invalid")),
    }
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight_kg" => "Current Weight",
        "target_weight_kg" => "Target Weight",
        "preferred_days" => "Preferred Days",
        "workout_id" => "Workout",
        "duration_minutes" => "Duration",
        "calories_burned" => "Calories Burned",
        "week_number" => "Week",
        "day_number" => "Day",
        "calories_goal" => "Calorie Goal",
        "calories_intake" | "calories_consumed" => "Calories Consumed",
        "protein_goal" => "Protein Goal",
        "protein_consumed" => "Protein Consumed",
        "carbs_goal" => "Carb Goal",
        "carbs_consumed" => "Carbs Consumed",
        "fat_goal" => "Fat Goal",
        "fat_consumed" => "Fat Consumed",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}
