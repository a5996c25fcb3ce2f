//! JSON API
//!
//! String-in/string-out entrypoint for host integrations: a versioned
//! request envelope around the survey record, validated at this boundary,
//! scored with a seeded RNG so identical requests produce identical
//! responses.

use serde::{Deserialize, Serialize};

use crate::data::ReferenceData;
use crate::models::{ScoreReport, SurveyInput};
use crate::score::calculate_with_seed;
use crate::validation::SurveyValidator;

/// Current request/response schema version.
pub const SCHEMA_VERSION: u8 = 1;

/// Error code prefixes returned by [`calculate_score_json`].
pub mod error_codes {
    pub const INVALID_JSON: &str = "ERR_INVALID_JSON";
    pub const SCHEMA_VERSION: &str = "ERR_SCHEMA_VERSION";
    pub const VALIDATION: &str = "ERR_VALIDATION";
    pub const SERIALIZATION: &str = "ERR_SERIALIZATION";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub schema_version: u8,
    /// Seed for tip selection; same seed, same tips.
    #[serde(default)]
    pub seed: u64,
    pub survey: SurveyInput,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub report: ScoreReport,
}

/// Score one survey submission from a JSON request envelope.
///
/// Returns the serialized [`ScoreResponse`], or an error string prefixed
/// with one of the [`error_codes`].
pub fn calculate_score_json(request_json: &str) -> Result<String, String> {
    let request: ScoreRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_JSON, e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            error_codes::SCHEMA_VERSION,
            format!("unsupported schema version: {}", request.schema_version),
        ));
    }

    if let Err(errors) = SurveyValidator::validate(&request.survey) {
        let joined =
            errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
        return Err(err_code(error_codes::VALIDATION, joined));
    }

    let report = calculate_with_seed(&request.survey, ReferenceData::us(), request.seed);
    let response =
        ScoreResponse { schema_version: SCHEMA_VERSION, seed: request.seed, report };

    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZATION, e))
}
