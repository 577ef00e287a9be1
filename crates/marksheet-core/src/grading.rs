//! Grading engine.
//!
//! Maps raw scores to letter grades and grade points through a single
//! ordered band table, and derives a full ledger entry per achievement
//! fact. Boundary values (exactly 90, 80, ...) map to the higher band.

use crate::error::TranscriptError;
use crate::model::{
    CourseAchievementFact, CourseLedgerEntry, LabStatus, LetterGrade, Outcome, ProjectStatus,
    MAX_SCORE,
};

/// One grade band: scores at or above `min_score` (and below the next
/// band's floor) earn `letter` and `points`.
#[derive(Debug, Clone, Copy)]
pub struct GradeBand {
    pub min_score: u16,
    pub letter: LetterGrade,
    pub points: u8,
}

/// The fixed band table, descending. The first band whose floor the score
/// meets wins, so the boundaries cannot drift the way nested conditionals
/// do.
pub static GRADE_BANDS: [GradeBand; 7] = [
    GradeBand { min_score: 90, letter: LetterGrade::O, points: 10 },
    GradeBand { min_score: 80, letter: LetterGrade::APlus, points: 9 },
    GradeBand { min_score: 70, letter: LetterGrade::A, points: 8 },
    GradeBand { min_score: 60, letter: LetterGrade::BPlus, points: 7 },
    GradeBand { min_score: 50, letter: LetterGrade::B, points: 6 },
    GradeBand { min_score: 40, letter: LetterGrade::C, points: 5 },
    GradeBand { min_score: 0, letter: LetterGrade::F, points: 0 },
];

/// Look up the band for an in-range score. Returns `None` for scores
/// above [`MAX_SCORE`]; callers attach the offending course to the error.
pub fn band_for(score: u16) -> Option<&'static GradeBand> {
    if score > MAX_SCORE {
        return None;
    }
    GRADE_BANDS.iter().find(|band| score >= band.min_score)
}

/// Derive the full ledger entry for one achievement fact.
///
/// An absent score produces `letter_grade = NotGraded`, no grade points,
/// and `outcome = Pending`. When a score is present, the pass/fail verdict
/// comes from the externally supplied `passed` flag, never from the score
/// itself (pass bars are course-specific and owned by the source of
/// truth).
pub fn grade_entry(fact: &CourseAchievementFact) -> Result<CourseLedgerEntry, TranscriptError> {
    let (letter_grade, grade_points, outcome) = match fact.raw_score {
        None => (LetterGrade::NotGraded, None, Outcome::Pending),
        Some(score) => {
            let band = band_for(score).ok_or_else(|| TranscriptError::InvalidScoreRange {
                course_id: fact.course_id.clone(),
                score,
            })?;
            let outcome = if fact.passed.unwrap_or(false) {
                Outcome::Pass
            } else {
                Outcome::Fail
            };
            (band.letter, Some(band.points), outcome)
        }
    };

    let project_status = if !fact.project_required {
        ProjectStatus::NotApplicable
    } else if fact.project_submitted {
        ProjectStatus::Submitted
    } else {
        ProjectStatus::Pending
    };

    let lab_status = if fact.lessons_completed >= fact.lessons_required {
        LabStatus::Completed
    } else {
        LabStatus::Pending
    };

    Ok(CourseLedgerEntry {
        fact: fact.clone(),
        letter_grade,
        grade_points,
        outcome,
        project_status,
        lab_status,
    })
}

/// Grade a whole list of facts, preserving order. Fails closed on the
/// first contract violation: a mis-graded transcript is worse than none.
pub fn grade_ledger(
    facts: &[CourseAchievementFact],
) -> Result<Vec<CourseLedgerEntry>, TranscriptError> {
    facts.iter().map(grade_entry).collect()
}
