//! Data model module
//!
//! Input (survey answers) and output (score report) records exchanged with
//! the form and result-rendering collaborators, wire-compatible with the
//! original quiz payload (camelCase JSON).

pub mod report;
pub mod survey;

pub use report::{Category, CategoryScore, CategoryScores, ScoreReport};
pub use survey::{
    CarOwnership, EducationLevel, ExerciseFrequency, HeightInput, HobbyQuality, LivingSituation,
    RankedHobby, RelationshipStatus, SurveyInput, WeightInput,
};
