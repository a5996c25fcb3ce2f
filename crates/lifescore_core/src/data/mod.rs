//! Reference data module
//!
//! Provides the immutable reference dataset the calculator compares
//! against: national averages, enum lookup tables and level-up tip pools.

pub mod reference;

pub use reference::{
    CarOwnershipTable, EducationTable, ExerciseFrequencyTable, HobbyQualityTable, LifestyleTables,
    LivingSituationTable, NationalAverages, ReferenceData, RelationshipTable, TipPools,
    DEFAULT_PERCENTILE, US_REFERENCE_YAML,
};
