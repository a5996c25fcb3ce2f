//! Reference dataset loading
//!
//! National-average constants, enum lookup tables and level-up tip pools.
//! The US dataset is embedded at compile time and parsed once; alternate
//! locale datasets can be loaded from YAML at runtime.
//!
//! ## Usage
//!
//! ```rust
//! use lifescore_core::data::ReferenceData;
//!
//! let reference = ReferenceData::us();
//! assert_eq!(reference.averages.partner_count, 7.0);
//! ```

use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::CoreError;
use crate::models::{
    CarOwnership, Category, EducationLevel, ExerciseFrequency, HobbyQuality, LivingSituation,
    RelationshipStatus,
};

/// Neutral percentile used whenever a metric is missing or a lookup misses.
pub const DEFAULT_PERCENTILE: u8 = 50;

/// Embedded US reference dataset (compile-time).
pub const US_REFERENCE_YAML: &str = include_str!("../../../../data/reference/us.yaml");

static US_REFERENCE: OnceLock<ReferenceData> = OnceLock::new();

/// Immutable reference data injected into the calculator.
///
/// Must stay stable across a single calculation; the engine never mutates it.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceData {
    pub averages: NationalAverages,
    pub education_percentiles: EducationTable,
    pub relationship_percentiles: RelationshipTable,
    pub lifestyle: LifestyleTables,
    pub tips: TipPools,
}

/// National-average value per metric, the denominator of every
/// percentile comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct NationalAverages {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub body_fat_percentage: f64,
    pub max_bench: f64,
    pub max_squat: f64,
    pub max_deadlift: f64,
    pub yearly_income: f64,
    pub partner_count: f64,
    pub close_friends: f64,
    pub social_events_per_month: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EducationTable {
    pub high_school: u8,
    pub some_college: u8,
    pub associate: u8,
    pub bachelor: u8,
    pub master: u8,
    pub doctorate: u8,
}

impl EducationTable {
    pub fn percentile(&self, level: Option<EducationLevel>) -> u8 {
        match level {
            Some(EducationLevel::HighSchool) => self.high_school,
            Some(EducationLevel::SomeCollege) => self.some_college,
            Some(EducationLevel::Associate) => self.associate,
            Some(EducationLevel::Bachelor) => self.bachelor,
            Some(EducationLevel::Master) => self.master,
            Some(EducationLevel::Doctorate) => self.doctorate,
            Some(EducationLevel::Other) | None => DEFAULT_PERCENTILE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelationshipTable {
    pub single: u8,
    pub dating: u8,
    pub long_term: u8,
    pub married: u8,
}

impl RelationshipTable {
    pub fn percentile(&self, status: Option<RelationshipStatus>) -> u8 {
        match status {
            Some(RelationshipStatus::Single) => self.single,
            Some(RelationshipStatus::Dating) => self.dating,
            Some(RelationshipStatus::LongTerm) => self.long_term,
            Some(RelationshipStatus::Married) => self.married,
            Some(RelationshipStatus::Other) | None => DEFAULT_PERCENTILE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LifestyleTables {
    pub living_situation: LivingSituationTable,
    pub exercise_frequency: ExerciseFrequencyTable,
    pub car_ownership: CarOwnershipTable,
    pub hobby_quality: HobbyQualityTable,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LivingSituationTable {
    pub with_parents: u8,
    pub renting: u8,
    pub own_home: u8,
    pub other: u8,
}

impl LivingSituationTable {
    pub fn percentile(&self, situation: Option<LivingSituation>) -> u8 {
        match situation {
            Some(LivingSituation::WithParents) => self.with_parents,
            Some(LivingSituation::Renting) => self.renting,
            Some(LivingSituation::OwnHome) => self.own_home,
            Some(LivingSituation::Other) => self.other,
            None => DEFAULT_PERCENTILE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseFrequencyTable {
    pub never: u8,
    pub rarely: u8,
    pub sometimes: u8,
    pub regularly: u8,
    pub frequently: u8,
    pub daily: u8,
}

impl ExerciseFrequencyTable {
    pub fn percentile(&self, frequency: Option<ExerciseFrequency>) -> u8 {
        match frequency {
            Some(ExerciseFrequency::Never) => self.never,
            Some(ExerciseFrequency::Rarely) => self.rarely,
            Some(ExerciseFrequency::Sometimes) => self.sometimes,
            Some(ExerciseFrequency::Regularly) => self.regularly,
            Some(ExerciseFrequency::Frequently) => self.frequently,
            Some(ExerciseFrequency::Daily) => self.daily,
            Some(ExerciseFrequency::Other) | None => DEFAULT_PERCENTILE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarOwnershipTable {
    pub none: u8,
    pub economy: u8,
    pub standard: u8,
    pub luxury: u8,
    pub sports: u8,
}

impl CarOwnershipTable {
    pub fn percentile(&self, ownership: Option<CarOwnership>) -> u8 {
        match ownership {
            Some(CarOwnership::None) => self.none,
            Some(CarOwnership::Economy) => self.economy,
            Some(CarOwnership::Standard) => self.standard,
            Some(CarOwnership::Luxury) => self.luxury,
            Some(CarOwnership::Sports) => self.sports,
            Some(CarOwnership::Other) | None => DEFAULT_PERCENTILE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HobbyQualityTable {
    pub excellent: u8,
    pub good: u8,
    pub neutral: u8,
    pub poor: u8,
}

impl HobbyQualityTable {
    pub fn value(&self, quality: HobbyQuality) -> u8 {
        match quality {
            HobbyQuality::Excellent => self.excellent,
            HobbyQuality::Good => self.good,
            HobbyQuality::Neutral => self.neutral,
            HobbyQuality::Poor => self.poor,
        }
    }
}

/// Level-up tip pool per category.
#[derive(Debug, Clone, Deserialize)]
pub struct TipPools {
    pub attractiveness: Vec<String>,
    pub strength_fitness: Vec<String>,
    pub income_career: Vec<String>,
    pub relationship_dating: Vec<String>,
    pub social_life: Vec<String>,
    pub lifestyle: Vec<String>,
}

impl TipPools {
    pub fn pool(&self, category: Category) -> &[String] {
        match category {
            Category::Attractiveness => &self.attractiveness,
            Category::StrengthFitness => &self.strength_fitness,
            Category::IncomeCareer => &self.income_career,
            Category::RelationshipDating => &self.relationship_dating,
            Category::SocialLife => &self.social_life,
            Category::Lifestyle => &self.lifestyle,
        }
    }
}

impl ReferenceData {
    /// Embedded US dataset, parsed on first call and cached.
    ///
    /// # Panics
    ///
    /// Panics if the embedded YAML is malformed (build-time data defect,
    /// covered by tests).
    pub fn us() -> &'static ReferenceData {
        US_REFERENCE.get_or_init(|| match Self::from_yaml(US_REFERENCE_YAML) {
            Ok(data) => data,
            Err(e) => panic!("embedded US reference data is invalid: {}", e),
        })
    }

    /// Load an alternate locale dataset from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, CoreError> {
        let data: ReferenceData =
            serde_yaml::from_str(yaml).map_err(|e| CoreError::ReferenceData(e.to_string()))?;
        data.validate()?;
        Ok(data)
    }

    /// Reject datasets the engine cannot score against (empty tip pools).
    /// Zero averages are tolerated here and neutralized per-metric at
    /// percentile time.
    fn validate(&self) -> Result<(), CoreError> {
        for category in Category::ALL {
            if self.tips.pool(category).is_empty() {
                return Err(CoreError::ReferenceData(format!(
                    "empty tip pool for category {:?}",
                    category
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_us_dataset_loads() {
        let reference = ReferenceData::us();
        assert_eq!(reference.averages.max_bench, 135.0);
        assert_eq!(reference.averages.yearly_income, 57200.0);
        assert_eq!(reference.education_percentiles.doctorate, 95);
        assert_eq!(reference.relationship_percentiles.single, 40);
    }

    #[test]
    fn test_every_tip_pool_has_five_entries() {
        let reference = ReferenceData::us();
        for category in Category::ALL {
            assert_eq!(reference.tips.pool(category).len(), 5, "{:?}", category);
        }
    }

    #[test]
    fn test_lookup_fallbacks_are_neutral() {
        let reference = ReferenceData::us();
        assert_eq!(reference.education_percentiles.percentile(None), 50);
        assert_eq!(
            reference.education_percentiles.percentile(Some(EducationLevel::Other)),
            50
        );
        assert_eq!(reference.relationship_percentiles.percentile(None), 50);
        assert_eq!(reference.lifestyle.living_situation.percentile(None), 50);
        assert_eq!(reference.lifestyle.car_ownership.percentile(None), 50);
    }

    #[test]
    fn test_from_yaml_rejects_garbage() {
        assert!(ReferenceData::from_yaml("not: [valid").is_err());
        assert!(ReferenceData::from_yaml("averages: 3").is_err());
    }

    #[test]
    fn test_validate_rejects_empty_tip_pool() {
        let mut data = ReferenceData::us().clone();
        data.tips.lifestyle.clear();
        assert!(data.validate().is_err());
    }
}
