//! Scoring engine
//!
//! Pure transforms from one survey snapshot to a score report:
//! - percentile normalization against national averages (`helpers`)
//! - BMI computation and band evaluation (`bmi`)
//! - the shared physical-prime age factor (`age`)
//! - the six category calculators (`categories`)
//! - aggregation into the final report (`aggregate`)

pub mod age;
pub mod aggregate;
pub mod bmi;
pub mod categories;
pub mod helpers;

pub use age::physical_age_factor;
pub use aggregate::{calculate, calculate_with_seed};
pub use bmi::{compute_bmi, evaluate_bmi};
pub use categories::{
    calculate_attractiveness, calculate_income_career, calculate_lifestyle,
    calculate_relationship_dating, calculate_social_life, calculate_strength_fitness,
};
pub use helpers::{
    percentile, percentile_age_aware, percentile_to_score, percentile_with_multiplier,
    DEFAULT_PERCENTILE, MAX_PERCENTILE, MIN_PERCENTILE,
};
