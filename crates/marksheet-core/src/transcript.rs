//! Transcript aggregation.
//!
//! Folds a graded ledger into one transcript-level summary. The fold is a
//! total function: empty inputs produce 0 / 0.00, never NaN, so downstream
//! stages never branch on an undefined average.

use crate::model::{Classification, CourseLedgerEntry, Outcome, TranscriptSummary};

/// Classification thresholds over the average raw score, descending.
const CLASSIFICATION_BANDS: [(f64, Classification); 4] = [
    (75.0, Classification::Distinction),
    (60.0, Classification::FirstClass),
    (50.0, Classification::SecondClass),
    (40.0, Classification::Pass),
];

/// Derive the performance classification from the average raw score
/// across attempted courses. Deliberately NOT driven by CGPA: the two
/// figures diverge for learners with high-scoring failed attempts, and
/// both are surfaced.
pub fn classify(average_score: f64) -> Classification {
    CLASSIFICATION_BANDS
        .iter()
        .find(|(floor, _)| average_score >= *floor)
        .map(|(_, class)| *class)
        .unwrap_or(Classification::BelowPass)
}

/// Round to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fold a ledger into a [`TranscriptSummary`].
///
/// - credits and CGPA count only `Pass` entries;
/// - the average raw score counts every attempted entry, passed or not;
/// - pending entries (no score) contribute to nothing.
///
/// Idempotent: the same ledger always folds to the same summary.
pub fn summarize(entries: &[CourseLedgerEntry]) -> TranscriptSummary {
    let passed: Vec<&CourseLedgerEntry> = entries
        .iter()
        .filter(|e| e.outcome == Outcome::Pass)
        .collect();

    let total_credits_earned = passed.iter().map(|e| e.fact.credit_weight).sum();
    let courses_passed = passed.len() as u32;

    let attempted_scores: Vec<u16> = entries.iter().filter_map(|e| e.fact.raw_score).collect();
    let average_score_across_attempted = if attempted_scores.is_empty() {
        0.0
    } else {
        attempted_scores.iter().map(|&s| f64::from(s)).sum::<f64>()
            / attempted_scores.len() as f64
    };

    let pass_points: Vec<u8> = passed.iter().filter_map(|e| e.grade_points).collect();
    let cgpa = if pass_points.is_empty() {
        0.0
    } else {
        round2(pass_points.iter().map(|&p| f64::from(p)).sum::<f64>() / pass_points.len() as f64)
    };

    TranscriptSummary {
        total_credits_earned,
        courses_passed,
        average_score_across_attempted,
        cgpa,
        classification: classify(average_score_across_attempted),
    }
}
