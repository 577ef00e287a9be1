//! Reward and eligibility calculation.
//!
//! Pure function of two already-derived values: the classification and the
//! CGPA. The payout floors rather than rounds so a learner is never
//! over-awarded.

use crate::model::{Classification, CredentialAward};

/// CGPA at or above which a learner qualifies for a scholarship even
/// without a Distinction.
pub const SCHOLARSHIP_CGPA_FLOOR: f64 = 8.5;

/// Base coin value per classification tier.
pub fn base_coins(classification: Classification) -> u64 {
    match classification {
        Classification::Distinction => 500,
        Classification::FirstClass => 300,
        Classification::SecondClass => 150,
        Classification::Pass => 50,
        Classification::BelowPass => 0,
    }
}

/// Compute the one-time reward payout and scholarship eligibility.
///
/// `reward_coins = floor(base × cgpa / 10)`, so within a tier the payout
/// is non-decreasing in CGPA. Eligibility has two independent qualifying
/// paths: a Distinction classification, or a CGPA at or above
/// [`SCHOLARSHIP_CGPA_FLOOR`].
pub fn compute_award(classification: Classification, cgpa: f64) -> CredentialAward {
    let base = base_coins(classification);
    let reward_coins = (base as f64 * (cgpa / 10.0)).floor() as u64;
    let scholarship_eligible =
        classification == Classification::Distinction || cgpa >= SCHOLARSHIP_CGPA_FLOOR;

    CredentialAward {
        reward_coins,
        scholarship_eligible,
    }
}
