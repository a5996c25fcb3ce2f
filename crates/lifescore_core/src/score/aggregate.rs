//! Top-level calculation
//!
//! Runs the six category calculators against one survey snapshot and folds
//! the results into a `ScoreReport`. Stateless and deterministic apart
//! from tip sampling, which draws from the injected RNG; the seeded
//! entrypoint pins that down for reproducible runs.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::data::ReferenceData;
use crate::models::{Category, CategoryScores, ScoreReport, SurveyInput};

use super::categories::{
    calculate_attractiveness, calculate_income_career, calculate_lifestyle,
    calculate_relationship_dating, calculate_social_life, calculate_strength_fitness,
};

/// Calculate the full score report for one survey submission.
///
/// `rng` drives tip selection only; every score and percentile is a pure
/// function of `input` and `reference`.
pub fn calculate<R: Rng + ?Sized>(
    input: &SurveyInput,
    reference: &ReferenceData,
    rng: &mut R,
) -> ScoreReport {
    let categories = CategoryScores {
        attractiveness: calculate_attractiveness(input, reference, rng),
        strength_fitness: calculate_strength_fitness(input, reference, rng),
        income_career: calculate_income_career(input, reference, rng),
        relationship_dating: calculate_relationship_dating(input, reference, rng),
        social_life: calculate_social_life(input, reference, rng),
        lifestyle: calculate_lifestyle(input, reference, rng),
    };

    let entries = categories.iter();

    let score_sum: u32 = entries.iter().map(|(_, c)| c.score as u32).sum();
    let percentile_sum: u32 = entries.iter().map(|(_, c)| c.percentile as u32).sum();
    let overall_score = (score_sum as f64 / entries.len() as f64).round() as u8;
    let overall_percentile = (percentile_sum as f64 / entries.len() as f64).round() as u8;

    // Stable descending sort: ties keep the fixed declaration order, so
    // the tie-break is deterministic.
    let mut ranked: [(Category, u8); 6] = entries.map(|(category, c)| (category, c.score));
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    let strongest_category = ranked[0].0;
    let weakest_category = ranked[ranked.len() - 1].0;

    let summary = overall_summary(overall_score).to_string();
    let primary_improvement = format!(
        "Focus on improving your {} to see the biggest overall gains.",
        weakest_category.display_name()
    );

    log::debug!(
        "calculated overall {} ({}th percentile), strongest {:?}, weakest {:?}",
        overall_score,
        overall_percentile,
        strongest_category,
        weakest_category
    );

    ScoreReport {
        overall_score,
        overall_percentile,
        strongest_category,
        weakest_category,
        categories,
        summary,
        primary_improvement,
    }
}

/// Seeded convenience wrapper: same seed, same report (tips included).
pub fn calculate_with_seed(input: &SurveyInput, reference: &ReferenceData, seed: u64) -> ScoreReport {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    calculate(input, reference, &mut rng)
}

fn overall_summary(overall_score: u8) -> &'static str {
    if overall_score >= 8 {
        "You're in the top tier of men overall, with exceptional results across most categories."
    } else if overall_score >= 6 {
        "You're above average compared to most men, with solid performance in multiple areas."
    } else if overall_score >= 4 {
        "You're on par with the average man, with a balanced mix of strengths and areas for improvement."
    } else {
        "Your current stats show room for growth across several key areas of manhood."
    }
}
