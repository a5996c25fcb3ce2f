//! # lifescore_core - Deterministic life-score calculation engine
//!
//! Transforms one self-reported survey record into percentile rankings
//! across six fixed life domains (attractiveness, strength & fitness,
//! income & career, relationship & dating, social life, lifestyle), an
//! aggregate 1-10 score, strongest/weakest category and narrative
//! feedback.
//!
//! ## Features
//! - Pure, stateless scoring: same input + reference data = same numbers
//! - Tip selection is the only randomness, driven by an injectable RNG
//!   (same seed = same report)
//! - Missing answers degrade to neutral defaults, never errors
//! - Reference dataset (national averages, lookup tables, tip pools) is
//!   injected; the US dataset ships embedded
//! - JSON API for easy host integration

pub mod api;
pub mod data;
pub mod error;
pub mod models;
pub mod score;
pub mod validation;

// Re-export main API functions
pub use api::{calculate_score_json, ScoreRequest, ScoreResponse, SCHEMA_VERSION};
pub use error::{CoreError, Result};

// Re-export the scoring engine
pub use score::{calculate, calculate_with_seed};

// Re-export model types
pub use models::{
    CarOwnership, Category, CategoryScore, CategoryScores, EducationLevel, ExerciseFrequency,
    HeightInput, HobbyQuality, LivingSituation, RankedHobby, RelationshipStatus, ScoreReport,
    SurveyInput, WeightInput,
};

// Re-export reference data
pub use data::ReferenceData;

// Re-export validation
pub use validation::{SurveyValidator, ValidationError};
