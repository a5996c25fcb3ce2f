//! Survey boundary validation
//!
//! Range checks that the input collector is responsible for. The engine
//! itself never validates — it degrades bad answers to neutral defaults —
//! so the JSON API and CLI run these checks before invoking it.

use std::fmt;

use crate::models::SurveyInput;

/// A single out-of-range answer.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Age outside 18-100.
    InvalidAge(u8),

    /// Self-rating slider outside 1-10.
    InvalidRating { field: &'static str, value: u8 },

    /// Body fat percentage outside 0-100.
    InvalidBodyFat(f64),

    /// Negative measurement or amount.
    NegativeValue { field: &'static str, value: f64 },

    /// More ranked hobbies than the form allows.
    TooManyHobbies(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidAge(age) => {
                write!(f, "Invalid age: {}. Must be between 18 and 100", age)
            }
            ValidationError::InvalidRating { field, value } => {
                write!(f, "Invalid rating {}: {}. Must be between 1 and 10", field, value)
            }
            ValidationError::InvalidBodyFat(value) => {
                write!(f, "Invalid body fat percentage: {}. Must be between 0 and 100", value)
            }
            ValidationError::NegativeValue { field, value } => {
                write!(f, "Invalid {}: {}. Must not be negative", field, value)
            }
            ValidationError::TooManyHobbies(count) => {
                write!(f, "Too many hobbies: {}. At most 3 ranked hobbies are scored", count)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Survey validation utility.
pub struct SurveyValidator;

impl SurveyValidator {
    /// Check every answered field against the collector's declared ranges.
    /// Collects all violations instead of stopping at the first.
    pub fn validate(survey: &SurveyInput) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(age) = survey.age {
            if !(18..=100).contains(&age) {
                errors.push(ValidationError::InvalidAge(age));
            }
        }

        for (field, value) in [
            ("facialAttractiveness", survey.facial_attractiveness),
            ("styleGrooming", survey.style_grooming),
        ] {
            if let Some(v) = value {
                if !(1..=10).contains(&v) {
                    errors.push(ValidationError::InvalidRating { field, value: v });
                }
            }
        }

        if let Some(body_fat) = survey.body_fat_percentage {
            if !(0.0..=100.0).contains(&body_fat) {
                errors.push(ValidationError::InvalidBodyFat(body_fat));
            }
        }

        for (field, value) in [
            ("height.feet", survey.height.feet),
            ("height.inches", survey.height.inches),
            ("height.cm", survey.height.cm),
            ("weight.lbs", survey.weight.lbs),
            ("weight.kg", survey.weight.kg),
            ("maxBench", survey.max_bench),
            ("maxSquat", survey.max_squat),
            ("maxDeadlift", survey.max_deadlift),
            ("yearlyIncome", survey.yearly_income),
        ] {
            if let Some(v) = value {
                if v < 0.0 {
                    errors.push(ValidationError::NegativeValue { field, value: v });
                }
            }
        }

        if survey.hobbies.len() > 3 {
            errors.push(ValidationError::TooManyHobbies(survey.hobbies.len()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
