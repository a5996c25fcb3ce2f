//! Percentile normalization
//!
//! Every raw metric is compared against its national average and mapped to
//! a 1-99 percentile. Two variants exist: the naive ratio formula and an
//! age-aware one that scales the ratio by an age bracket multiplier. The
//! age-aware variant is the default whenever the subject's age is known.

pub use crate::data::DEFAULT_PERCENTILE;

pub const MIN_PERCENTILE: u8 = 1;
pub const MAX_PERCENTILE: u8 = 99;

/// Clamp a raw percentile value into the 1-99 output range.
pub(crate) fn clamp_percentile(raw: f64) -> u8 {
    raw.round().clamp(MIN_PERCENTILE as f64, MAX_PERCENTILE as f64) as u8
}

/// Naive percentile: `round((value / average) * 50)` for higher-is-better
/// metrics, `round((average / value) * 50)` for lower-is-better ones
/// (a zero value compares as perfectly average). Clamped to 1-99.
///
/// A non-positive average means no comparison is possible and yields the
/// neutral default.
pub fn percentile(value: f64, average: f64, higher_is_better: bool) -> u8 {
    percentile_with_multiplier(value, average, higher_is_better, 1.0)
}

/// Age-aware percentile: the raw ratio is scaled by an age multiplier
/// before rounding. Under 25 the bar is lowered (1.2 higher-is-better /
/// 0.9 lower-is-better); over 45 it tilts the other way (0.9 / 1.1).
/// Unknown age falls back to the naive formula.
pub fn percentile_age_aware(value: f64, average: f64, higher_is_better: bool, age: Option<u8>) -> u8 {
    let multiplier = match age {
        Some(a) if a < 25 => {
            if higher_is_better {
                1.2
            } else {
                0.9
            }
        }
        Some(a) if a > 45 => {
            if higher_is_better {
                0.9
            } else {
                1.1
            }
        }
        _ => 1.0,
    };
    percentile_with_multiplier(value, average, higher_is_better, multiplier)
}

/// Percentile with an explicit ratio multiplier, for categories that carry
/// their own bracket tables (e.g. the lift multipliers in strength).
pub fn percentile_with_multiplier(
    value: f64,
    average: f64,
    higher_is_better: bool,
    multiplier: f64,
) -> u8 {
    if average <= 0.0 {
        return DEFAULT_PERCENTILE;
    }
    let ratio = if higher_is_better {
        value / average
    } else {
        average / if value != 0.0 { value } else { average }
    };
    clamp_percentile(ratio * multiplier * 50.0)
}

/// Map a 1-99 percentile onto the 1-10 score scale.
pub fn percentile_to_score(percentile: u8) -> u8 {
    ((percentile as f64 / 10.0).ceil() as u8).clamp(1, 10)
}
