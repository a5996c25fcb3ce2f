pub mod score_json;

pub use score_json::{calculate_score_json, ScoreRequest, ScoreResponse, SCHEMA_VERSION};
