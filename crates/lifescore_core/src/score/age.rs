//! Physical-prime age factor
//!
//! Final multiplicative adjustment for the physically graded categories
//! (attractiveness, strength/fitness). The other categories carry their
//! own independent age tables inline; they are separate tuning knobs and
//! intentionally not expressed through this function.

/// 1.1 at the physical prime (25-35), tapering to 0.8 at the extremes.
/// Unknown age is neutral.
pub fn physical_age_factor(age: Option<u8>) -> f64 {
    match age {
        None => 1.0,
        Some(a) if (25..=35).contains(&a) => 1.1,
        Some(a) if (20..25).contains(&a) || (36..=45).contains(&a) => 1.0,
        Some(a) if (18..20).contains(&a) || (46..=55).contains(&a) => 0.9,
        Some(_) => 0.8,
    }
}
