//! Category calculators
//!
//! One pure function per life domain. Each combines its metric percentiles
//! with its own age bracket table — the tables deliberately differ between
//! categories and must not be unified — then maps the result onto the 1-10
//! score scale, picks a fixed explanation band and samples one level-up tip
//! from the category's pool via the injected RNG.

use rand::Rng;

use crate::data::{ReferenceData, DEFAULT_PERCENTILE};
use crate::models::{Category, CategoryScore, RankedHobby, RelationshipStatus, SurveyInput};

use super::age::physical_age_factor;
use super::bmi::{compute_bmi, evaluate_bmi};
use super::helpers::{
    clamp_percentile, percentile, percentile_age_aware, percentile_to_score,
    percentile_with_multiplier, MAX_PERCENTILE,
};

/// Degressive weights for the first, second and third ranked hobby.
const HOBBY_RANK_WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];

fn pick_tip<R: Rng + ?Sized>(reference: &ReferenceData, category: Category, rng: &mut R) -> String {
    let pool = reference.tips.pool(category);
    if pool.is_empty() {
        // Unreachable for validated reference data.
        return String::new();
    }
    pool[rng.gen_range(0..pool.len())].clone()
}

/// Fixed four-band explanation selection (>=8 / >=6 / >=4 / else).
fn band_explanation(score: u8, bands: [&str; 4]) -> String {
    let text = if score >= 8 {
        bands[0]
    } else if score >= 6 {
        bands[1]
    } else if score >= 4 {
        bands[2]
    } else {
        bands[3]
    };
    text.to_string()
}

/// Attractiveness: self-rated face and style, BMI influence, prime-age boost.
pub fn calculate_attractiveness<R: Rng + ?Sized>(
    input: &SurveyInput,
    reference: &ReferenceData,
    rng: &mut R,
) -> CategoryScore {
    let face = input.facial_attractiveness.unwrap_or(5) as f64;
    let style = input.style_grooming.unwrap_or(5) as f64;

    let bmi = compute_bmi(&input.height, &input.weight);
    let bmi_percentile = evaluate_bmi(bmi, input.age) as f64;

    let age_factor = physical_age_factor(input.age);

    let raw = (face * 0.5 + style * 0.3 + bmi_percentile / 10.0 * 0.2) * age_factor;
    let score = raw.clamp(1.0, 10.0).round() as u8;
    let percentile = (score * 10).min(MAX_PERCENTILE);

    CategoryScore {
        score,
        percentile,
        explanation: band_explanation(
            score,
            [
                "You're in the top tier of physical attractiveness, with strong facial features and excellent style.",
                "You're above average in attractiveness with good style choices that complement your features.",
                "You have average attractiveness, with room to optimize your style and grooming.",
                "Your self-assessment suggests opportunities to improve your styling and grooming routine.",
            ],
        ),
        level_up_tip: pick_tip(reference, Category::Attractiveness, rng),
    }
}

/// Strength & fitness: body composition plus the three compound lifts
/// against national 1RM averages, each lift age-scaled by its own bracket
/// table (older lifters are graded against a friendlier bar).
pub fn calculate_strength_fitness<R: Rng + ?Sized>(
    input: &SurveyInput,
    reference: &ReferenceData,
    rng: &mut R,
) -> CategoryScore {
    let averages = &reference.averages;

    let body_fat_percentile = input
        .body_fat_percentage
        .map(|v| percentile_age_aware(v, averages.body_fat_percentage, false, input.age))
        .unwrap_or(DEFAULT_PERCENTILE);

    let lift_multiplier = match input.age {
        None => 1.0,
        Some(a) if a < 25 => 0.9,
        Some(a) if a <= 35 => 1.0,
        Some(a) if a <= 45 => 1.1,
        Some(a) if a <= 55 => 1.2,
        Some(_) => 1.3,
    };
    let lift_percentile = |lift: Option<f64>, average: f64| {
        lift.map(|v| percentile_with_multiplier(v, average, true, lift_multiplier))
            .unwrap_or(DEFAULT_PERCENTILE)
    };
    let bench_percentile = lift_percentile(input.max_bench, averages.max_bench);
    let squat_percentile = lift_percentile(input.max_squat, averages.max_squat);
    let deadlift_percentile = lift_percentile(input.max_deadlift, averages.max_deadlift);

    let bmi_percentile = evaluate_bmi(compute_bmi(&input.height, &input.weight), input.age);

    let age_factor = physical_age_factor(input.age);

    let sum = body_fat_percentile as f64
        + bench_percentile as f64
        + squat_percentile as f64
        + deadlift_percentile as f64
        + bmi_percentile as f64;
    let avg_percentile = clamp_percentile(sum / 5.0 * age_factor);
    let score = percentile_to_score(avg_percentile);

    CategoryScore {
        score,
        percentile: avg_percentile,
        explanation: band_explanation(
            score,
            [
                "You're significantly stronger than average with excellent body composition.",
                "You're stronger than most men and have above-average fitness levels.",
                "You have average strength and fitness compared to other men.",
                "Your strength metrics indicate room for improvement in your fitness regimen.",
            ],
        ),
        level_up_tip: pick_tip(reference, Category::StrengthFitness, rng),
    }
}

/// Income & career: ordinal education lookup plus income vs the national
/// median, the income side boosted for young earners.
pub fn calculate_income_career<R: Rng + ?Sized>(
    input: &SurveyInput,
    reference: &ReferenceData,
    rng: &mut R,
) -> CategoryScore {
    let education_percentile = reference.education_percentiles.percentile(input.education_level);

    let income_percentile = match input.yearly_income {
        Some(income) => {
            let base = percentile(income, reference.averages.yearly_income, true) as f64;
            let age_adjustment = match input.age {
                None => 1.0,
                Some(a) if a < 25 => 1.5,
                Some(a) if a < 30 => 1.3,
                Some(a) if a < 40 => 1.1,
                Some(a) if a < 55 => 1.0,
                Some(_) => 0.9,
            };
            clamp_percentile(base * age_adjustment)
        }
        // No age adjustment on the neutral default.
        None => DEFAULT_PERCENTILE,
    };

    let avg_percentile =
        clamp_percentile((education_percentile as f64 + income_percentile as f64) / 2.0);
    let score = percentile_to_score(avg_percentile);

    CategoryScore {
        score,
        percentile: avg_percentile,
        explanation: band_explanation(
            score,
            [
                "Your income and career achievements put you in the top tier professionally.",
                "You're doing better than average in your professional life and earnings.",
                "Your career metrics are on par with the average man in your country.",
                "There's significant room for growth in your professional development and earning potential.",
            ],
        ),
        level_up_tip: pick_tip(reference, Category::IncomeCareer, rng),
    }
}

/// Relationship & dating: status lookup weighted 70/30 against lifetime
/// partner count, with age expectations shifting both sides.
pub fn calculate_relationship_dating<R: Rng + ?Sized>(
    input: &SurveyInput,
    reference: &ReferenceData,
    rng: &mut R,
) -> CategoryScore {
    let status_percentile =
        reference.relationship_percentiles.percentile(input.relationship_status) as f64;

    let partner_percentile = match input.women_slept_with {
        Some(count) => {
            let base = percentile(count as f64, reference.averages.partner_count, true) as f64;
            let age_adjustment = match input.age {
                None => 1.0,
                Some(a) if a < 25 => 1.2,
                Some(a) if a < 40 => 1.0,
                Some(_) => 0.9,
            };
            clamp_percentile(base * age_adjustment) as f64
        }
        None => DEFAULT_PERCENTILE as f64,
    };

    // Expectations around relationship status change with age: being single
    // is graded gently under 25 and harshly past 35.
    let status_age_factor = match input.age {
        Some(a) if a < 25 => 1.2,
        Some(a)
            if a > 35 && matches!(input.relationship_status, Some(RelationshipStatus::Single)) =>
        {
            0.8
        }
        _ => 1.0,
    };

    let avg_percentile =
        clamp_percentile(status_percentile * 0.7 * status_age_factor + partner_percentile * 0.3);
    let score = percentile_to_score(avg_percentile);

    CategoryScore {
        score,
        percentile: avg_percentile,
        explanation: band_explanation(
            score,
            [
                "You have exceptional relationship and dating success compared to most men.",
                "Your relationship and dating life is above average, with good romantic prospects.",
                "You have an average dating and relationship history compared to other men.",
                "Your dating history suggests opportunities for improving your relationship outcomes.",
            ],
        ),
        level_up_tip: pick_tip(reference, Category::RelationshipDating, rng),
    }
}

/// Social life: close-friend count and monthly event count, each graded
/// against its average with the same age tilt (younger men are expected to
/// be more social).
pub fn calculate_social_life<R: Rng + ?Sized>(
    input: &SurveyInput,
    reference: &ReferenceData,
    rng: &mut R,
) -> CategoryScore {
    let age_adjustment = match input.age {
        Some(a) if a < 25 => 0.9,
        Some(a) if a > 40 => 1.2,
        _ => 1.0,
    };
    let social_percentile = |count: Option<u32>, average: f64| match count {
        Some(c) => clamp_percentile(percentile(c as f64, average, true) as f64 * age_adjustment),
        None => DEFAULT_PERCENTILE,
    };

    let friends_percentile =
        social_percentile(input.close_friends, reference.averages.close_friends);
    let events_percentile = social_percentile(
        input.social_events_per_month,
        reference.averages.social_events_per_month,
    );

    let avg_percentile =
        clamp_percentile((friends_percentile as f64 + events_percentile as f64) / 2.0);
    let score = percentile_to_score(avg_percentile);

    CategoryScore {
        score,
        percentile: avg_percentile,
        explanation: band_explanation(
            score,
            [
                "You have an exceptionally strong social network and active social calendar.",
                "Your social life is above average, with a solid friend group and regular social activities.",
                "You maintain an average social life compared to most men.",
                "Your social connections could benefit from more active relationship building.",
            ],
        ),
        level_up_tip: pick_tip(reference, Category::SocialLife, rng),
    }
}

/// Weighted hobby quality: the first three ranked hobbies contribute
/// degressively; weights renormalize when fewer are present. No hobbies
/// is perfectly average.
fn hobby_percentile(hobbies: &[RankedHobby], reference: &ReferenceData) -> f64 {
    if hobbies.is_empty() {
        return DEFAULT_PERCENTILE as f64;
    }
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    for (rank, hobby) in hobbies.iter().take(HOBBY_RANK_WEIGHTS.len()).enumerate() {
        let weight = HOBBY_RANK_WEIGHTS[rank];
        weighted += reference.lifestyle.hobby_quality.value(hobby.quality) as f64 * weight;
        total_weight += weight;
    }
    weighted / total_weight
}

/// Lifestyle: quality-weighted hobbies plus living situation, exercise
/// frequency and car ownership lookups, with an establishment expectation
/// that rises with age.
pub fn calculate_lifestyle<R: Rng + ?Sized>(
    input: &SurveyInput,
    reference: &ReferenceData,
    rng: &mut R,
) -> CategoryScore {
    let tables = &reference.lifestyle;

    let hobby = hobby_percentile(&input.hobbies, reference);
    let living = tables.living_situation.percentile(input.living_situation) as f64;
    let exercise = tables.exercise_frequency.percentile(input.exercise_frequency) as f64;
    let car = tables.car_ownership.percentile(input.car_ownership) as f64;

    let raw = hobby * 0.4 + living * 0.25 + exercise * 0.2 + car * 0.15;

    let age_adjustment = match input.age {
        Some(a) if a < 25 => 1.2,
        Some(a) if a < 30 => 1.1,
        Some(a) if a > 40 => 0.9,
        _ => 1.0,
    };

    let avg_percentile = clamp_percentile(raw * age_adjustment);
    let score = percentile_to_score(avg_percentile);

    CategoryScore {
        score,
        percentile: avg_percentile,
        explanation: band_explanation(
            score,
            [
                "Your habits, interests and living setup reflect an exceptionally well-built lifestyle.",
                "Your lifestyle is above average, with solid habits and rewarding interests.",
                "Your lifestyle is on par with most men, with room to build richer habits.",
                "Your current habits and interests leave significant room for a more established lifestyle.",
            ],
        ),
        level_up_tip: pick_tip(reference, Category::Lifestyle, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CarOwnership, EducationLevel, ExerciseFrequency, HobbyQuality, LivingSituation,
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(0)
    }

    fn reference() -> &'static ReferenceData {
        ReferenceData::us()
    }

    #[test]
    fn test_attractiveness_defaults_to_midpoint() {
        let result = calculate_attractiveness(&SurveyInput::default(), reference(), &mut test_rng());
        // face 5, style 5, BMI default 50 -> (2.5 + 1.5 + 1.0) = 5.0
        assert_eq!(result.score, 5);
        assert_eq!(result.percentile, 50);
    }

    #[test]
    fn test_attractiveness_percentile_caps_at_99() {
        let survey = SurveyInput {
            age: Some(30),
            facial_attractiveness: Some(10),
            style_grooming: Some(10),
            height: crate::models::HeightInput { cm: Some(180.0), ..Default::default() },
            weight: crate::models::WeightInput { kg: Some(75.0), lbs: None },
            ..Default::default()
        };
        let result = calculate_attractiveness(&survey, reference(), &mut test_rng());
        // raw = (5 + 3 + 1.6) * 1.1 = 10.56 -> score 10, percentile capped.
        assert_eq!(result.score, 10);
        assert_eq!(result.percentile, 99);
    }

    #[test]
    fn test_strength_fitness_documented_scenario() {
        let survey = SurveyInput {
            age: Some(30),
            max_bench: Some(225.0),
            max_squat: Some(275.0),
            max_deadlift: Some(315.0),
            body_fat_percentage: Some(15.0),
            ..Default::default()
        };
        let result = calculate_strength_fitness(&survey, reference(), &mut test_rng());
        // Lift percentiles 83/74/70, body fat 93, BMI default 50:
        // mean 74 boosted by the 1.1 prime-age factor -> 81.
        assert_eq!(result.percentile, 81);
        assert_eq!(result.score, 9);
    }

    #[test]
    fn test_strength_fitness_lift_bracket_eases_with_age() {
        let lifter = |age: u8| SurveyInput {
            age: Some(age),
            max_bench: Some(135.0),
            ..Default::default()
        };
        let young = calculate_strength_fitness(&lifter(22), reference(), &mut test_rng());
        let senior = calculate_strength_fitness(&lifter(60), reference(), &mut test_rng());
        // An average bench grades 45 at 22 (x0.9) and 65 at 60 (x1.3); the
        // senior then gives most of it back to the 0.8 physical factor.
        assert_eq!(young.percentile, 49);
        assert_eq!(senior.percentile, 42);
    }

    #[test]
    fn test_income_career_unknown_education_is_neutral() {
        let survey = SurveyInput {
            education_level: Some(EducationLevel::Other),
            ..Default::default()
        };
        let result = calculate_income_career(&survey, reference(), &mut test_rng());
        assert_eq!(result.percentile, 50);
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_income_career_young_earner_boost() {
        let survey = SurveyInput {
            age: Some(24),
            yearly_income: Some(57_200.0),
            education_level: Some(EducationLevel::Bachelor),
            ..Default::default()
        };
        let result = calculate_income_career(&survey, reference(), &mut test_rng());
        // income 50 x 1.5 = 75, education 75 -> avg 75.
        assert_eq!(result.percentile, 75);
        assert_eq!(result.score, 8);
    }

    #[test]
    fn test_income_percentile_clamps_after_age_boost() {
        let survey = SurveyInput {
            age: Some(24),
            yearly_income: Some(500_000.0),
            education_level: Some(EducationLevel::Doctorate),
            ..Default::default()
        };
        let result = calculate_income_career(&survey, reference(), &mut test_rng());
        // income clamps at 99 even after the 1.5 boost; (95 + 99) / 2 = 97.
        assert_eq!(result.percentile, 97);
    }

    #[test]
    fn test_relationship_documented_scenario() {
        let survey = SurveyInput {
            age: Some(40),
            relationship_status: Some(RelationshipStatus::Single),
            women_slept_with: Some(7),
            ..Default::default()
        };
        let result = calculate_relationship_dating(&survey, reference(), &mut test_rng());
        // status 40 x 0.7 x 0.8 = 22.4; partners 50 x 0.9 = 45, x 0.3 = 13.5.
        assert_eq!(result.percentile, 36);
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_relationship_young_single_is_graded_gently() {
        let survey = SurveyInput {
            age: Some(22),
            relationship_status: Some(RelationshipStatus::Single),
            ..Default::default()
        };
        let result = calculate_relationship_dating(&survey, reference(), &mut test_rng());
        // status 40 x 0.7 x 1.2 = 33.6, partners default 50 x 0.3 = 15.
        assert_eq!(result.percentile, 49);
    }

    #[test]
    fn test_social_life_age_tilt() {
        let survey = |age: Option<u8>| SurveyInput {
            age,
            close_friends: Some(3),
            social_events_per_month: Some(4),
            ..Default::default()
        };
        let neutral = calculate_social_life(&survey(Some(30)), reference(), &mut test_rng());
        let young = calculate_social_life(&survey(Some(22)), reference(), &mut test_rng());
        let older = calculate_social_life(&survey(Some(45)), reference(), &mut test_rng());
        assert_eq!(neutral.percentile, 50);
        assert_eq!(young.percentile, 45);
        assert_eq!(older.percentile, 60);
    }

    #[test]
    fn test_lifestyle_all_defaults_is_neutral() {
        let result = calculate_lifestyle(&SurveyInput::default(), reference(), &mut test_rng());
        assert_eq!(result.percentile, 50);
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_lifestyle_structured_inputs() {
        let survey = SurveyInput {
            living_situation: Some(LivingSituation::OwnHome),
            exercise_frequency: Some(ExerciseFrequency::Frequently),
            car_ownership: Some(CarOwnership::Standard),
            hobbies: vec![
                RankedHobby { id: "sports".into(), quality: HobbyQuality::Excellent },
                RankedHobby { id: "reading".into(), quality: HobbyQuality::Good },
                RankedHobby { id: "gaming".into(), quality: HobbyQuality::Neutral },
            ],
            ..Default::default()
        };
        let result = calculate_lifestyle(&survey, reference(), &mut test_rng());
        // hobbies: 90x0.5 + 70x0.3 + 50x0.2 = 76
        // 76x0.4 + 80x0.25 + 85x0.2 + 60x0.15 = 76.4 -> 76
        assert_eq!(result.percentile, 76);
        assert_eq!(result.score, 8);
    }

    #[test]
    fn test_hobby_weights_renormalize_for_short_lists() {
        let one = vec![RankedHobby { id: "sports".into(), quality: HobbyQuality::Excellent }];
        assert_eq!(hobby_percentile(&one, reference()), 90.0);

        let two = vec![
            RankedHobby { id: "sports".into(), quality: HobbyQuality::Excellent },
            RankedHobby { id: "gaming".into(), quality: HobbyQuality::Poor },
        ];
        // (90x0.5 + 30x0.3) / 0.8 = 67.5
        assert!((hobby_percentile(&two, reference()) - 67.5).abs() < 1e-9);

        // Entries past the third rank are ignored.
        let four = vec![
            RankedHobby { id: "a".into(), quality: HobbyQuality::Neutral },
            RankedHobby { id: "b".into(), quality: HobbyQuality::Neutral },
            RankedHobby { id: "c".into(), quality: HobbyQuality::Neutral },
            RankedHobby { id: "d".into(), quality: HobbyQuality::Excellent },
        ];
        assert_eq!(hobby_percentile(&four, reference()), 50.0);
    }

    #[test]
    fn test_tips_come_from_the_right_pool() {
        let mut rng = test_rng();
        for category in Category::ALL {
            let pool = reference().tips.pool(category);
            for _ in 0..20 {
                let tip = pick_tip(reference(), category, &mut rng);
                assert!(!tip.is_empty());
                assert!(pool.contains(&tip), "{:?}: {}", category, tip);
            }
        }
    }
}
