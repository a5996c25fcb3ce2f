//! BMI computation and band evaluation
//!
//! Height and weight answers arrive in either unit system; metric wins
//! when both are present. The band evaluation maps BMI into one of four
//! fixed percentile scores around an ideal range that drifts upward with
//! age.

use crate::models::{HeightInput, WeightInput};

use super::helpers::DEFAULT_PERCENTILE;

const METERS_PER_FOOT: f64 = 0.3048;
const METERS_PER_INCH: f64 = 0.0254;
const KG_PER_LB: f64 = 0.453592;

/// Base ideal BMI range for an adult male, before any age shift.
const IDEAL_LOWER: f64 = 18.5;
const IDEAL_UPPER: f64 = 25.0;

/// BMI in kg/m², or `None` when either height or weight is unanswered.
pub fn compute_bmi(height: &HeightInput, weight: &WeightInput) -> Option<f64> {
    let height_m = match (height.cm, height.feet) {
        (Some(cm), _) => cm / 100.0,
        (None, Some(feet)) => {
            feet * METERS_PER_FOOT + height.inches.unwrap_or(0.0) * METERS_PER_INCH
        }
        (None, None) => return None,
    };
    let weight_kg = match (weight.kg, weight.lbs) {
        (Some(kg), _) => kg,
        (None, Some(lbs)) => lbs * KG_PER_LB,
        (None, None) => return None,
    };
    if height_m <= 0.0 || weight_kg <= 0.0 {
        return None;
    }
    Some(weight_kg / (height_m * height_m))
}

/// Map a BMI onto a fixed percentile: 80 inside the ideal range, 60 near
/// it, 40 at a moderate deviation, 20 at a severe one. The ideal range
/// shifts upward by +0.5 / +1.0 / +1.5 at ages 30 / 40 / 50. No BMI data
/// yields the neutral default.
pub fn evaluate_bmi(bmi: Option<f64>, age: Option<u8>) -> u8 {
    let Some(bmi) = bmi else {
        return DEFAULT_PERCENTILE;
    };

    let shift = match age {
        Some(a) if a >= 50 => 1.5,
        Some(a) if a >= 40 => 1.0,
        Some(a) if a >= 30 => 0.5,
        _ => 0.0,
    };
    let lower = IDEAL_LOWER + shift;
    let upper = IDEAL_UPPER + shift;

    if bmi >= lower && bmi < upper {
        80
    } else if (bmi >= lower - 1.5 && bmi < lower) || (bmi >= upper && bmi < upper + 5.0) {
        60
    } else if (bmi >= lower - 2.5 && bmi < lower - 1.5) || (bmi >= upper + 5.0 && bmi < upper + 10.0)
    {
        40
    } else {
        20
    }
}
