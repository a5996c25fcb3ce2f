//! Survey input record
//!
//! Mirrors the JSON payload produced by the quiz form. Every answer is
//! optional: the engine degrades missing answers to neutral defaults
//! instead of rejecting the record. Unknown enum strings deserialize into
//! catch-all variants so a stale form build cannot break scoring.

use serde::{Deserialize, Serialize};

/// Height answer. Metric (`cm`) wins when both unit systems are present;
/// feet/inches are converted internally when `cm` is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeightInput {
    pub feet: Option<f64>,
    pub inches: Option<f64>,
    pub cm: Option<f64>,
}

/// Weight answer. Metric (`kg`) wins when both unit systems are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightInput {
    pub lbs: Option<f64>,
    pub kg: Option<f64>,
}

/// Education level as offered by the form, ordered low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    HighSchool,
    #[serde(rename = "Some College")]
    SomeCollege,
    #[serde(rename = "Associate Degree")]
    Associate,
    #[serde(rename = "Bachelor's Degree")]
    Bachelor,
    #[serde(rename = "Master's Degree")]
    Master,
    #[serde(rename = "Doctorate or Professional Degree")]
    Doctorate,
    /// Unrecognized level; scored as the neutral 50th percentile.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipStatus {
    #[serde(rename = "Single")]
    Single,
    #[serde(rename = "Dating")]
    Dating,
    #[serde(rename = "Long-term Relationship")]
    LongTerm,
    #[serde(rename = "Married")]
    Married,
    /// Unrecognized status; scored as the neutral 50th percentile.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LivingSituation {
    WithParents,
    Renting,
    #[serde(rename = "own")]
    OwnHome,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseFrequency {
    Never,
    Rarely,
    Sometimes,
    Regularly,
    Frequently,
    Daily,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarOwnership {
    None,
    Economy,
    Standard,
    Luxury,
    Sports,
    #[serde(other)]
    Other,
}

/// Quality tier of a hobby, excellent > good > neutral > poor.
/// Unknown tiers collapse to `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HobbyQuality {
    Excellent,
    Good,
    Poor,
    #[serde(other)]
    Neutral,
}

/// One ranked hobby pick. Position in the `hobbies` list is the rank;
/// only the first three entries contribute to the lifestyle score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedHobby {
    pub id: String,
    pub quality: HobbyQuality,
}

/// One submission of the quiz form, snapshotted at submit time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyInput {
    // Basic info
    pub age: Option<u8>,
    /// Collected by the form but not scored.
    pub country: Option<String>,

    // Physical
    pub height: HeightInput,
    pub weight: WeightInput,
    pub body_fat_percentage: Option<f64>,

    // Strength (1-rep maxes, lbs)
    pub max_bench: Option<f64>,
    pub max_squat: Option<f64>,
    pub max_deadlift: Option<f64>,

    // Career & education
    /// Collected by the form but not scored.
    pub job_title: Option<String>,
    pub yearly_income: Option<f64>,
    pub education_level: Option<EducationLevel>,

    // Dating & social
    pub women_slept_with: Option<u32>,
    pub relationship_status: Option<RelationshipStatus>,
    pub close_friends: Option<u32>,
    pub social_events_per_month: Option<u32>,

    // Self rating (1-10 sliders, default 5 when unanswered)
    pub facial_attractiveness: Option<u8>,
    pub style_grooming: Option<u8>,

    // Lifestyle (structured shape; the legacy free-text notes shape is a
    // deprecated collector input and is not accepted here)
    pub living_situation: Option<LivingSituation>,
    pub exercise_frequency: Option<ExerciseFrequency>,
    pub hobbies: Vec<RankedHobby>,
    pub car_ownership: Option<CarOwnership>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_to_defaults() {
        let survey: SurveyInput = serde_json::from_str("{}").unwrap();
        assert_eq!(survey, SurveyInput::default());
        assert!(survey.age.is_none());
        assert!(survey.hobbies.is_empty());
    }

    #[test]
    fn test_full_form_payload_deserializes() {
        let json = r#"{
            "age": 30,
            "country": "United States",
            "height": { "feet": 5, "inches": 9, "cm": null },
            "weight": { "lbs": 180, "kg": null },
            "bodyFatPercentage": 15,
            "maxBench": 225,
            "maxSquat": 275,
            "maxDeadlift": 315,
            "jobTitle": "Engineer",
            "yearlyIncome": 85000,
            "educationLevel": "Bachelor's Degree",
            "womenSleptWith": 7,
            "relationshipStatus": "Long-term Relationship",
            "closeFriends": 4,
            "socialEventsPerMonth": 6,
            "facialAttractiveness": 7,
            "styleGrooming": 6,
            "livingSituation": "renting",
            "exerciseFrequency": "regularly",
            "hobbies": [
                { "id": "sports", "quality": "excellent" },
                { "id": "gaming", "quality": "neutral" }
            ],
            "carOwnership": "standard"
        }"#;
        let survey: SurveyInput = serde_json::from_str(json).unwrap();
        assert_eq!(survey.education_level, Some(EducationLevel::Bachelor));
        assert_eq!(survey.relationship_status, Some(RelationshipStatus::LongTerm));
        assert_eq!(survey.living_situation, Some(LivingSituation::Renting));
        assert_eq!(survey.hobbies.len(), 2);
        assert_eq!(survey.hobbies[0].quality, HobbyQuality::Excellent);
    }

    #[test]
    fn test_unknown_enum_strings_fall_back() {
        let json = r#"{
            "educationLevel": "Trade School",
            "relationshipStatus": "It's complicated",
            "livingSituation": "houseboat",
            "hobbies": [{ "id": "larping", "quality": "legendary" }]
        }"#;
        let survey: SurveyInput = serde_json::from_str(json).unwrap();
        assert_eq!(survey.education_level, Some(EducationLevel::Other));
        assert_eq!(survey.relationship_status, Some(RelationshipStatus::Other));
        assert_eq!(survey.living_situation, Some(LivingSituation::Other));
        assert_eq!(survey.hobbies[0].quality, HobbyQuality::Neutral);
    }
}
