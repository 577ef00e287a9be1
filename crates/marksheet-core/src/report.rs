//! Transcript report types with JSON persistence and the flattened
//! official-snapshot payload.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{
    Classification, CourseLedgerEntry, CredentialAward, CredentialIdentity, LearnerIdentity,
    LetterGrade, Outcome, TranscriptSummary,
};

/// A complete computed transcript for one learner: the full ledger plus
/// every derived figure. Constructed fresh per request, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptReport {
    /// Unique report identifier (per computation, not per learner).
    pub id: Uuid,
    /// When the report was computed.
    pub created_at: DateTime<Utc>,
    /// Year the credential was issued against.
    pub issue_year: i32,
    pub learner: LearnerIdentity,
    /// One graded entry per enrolled course, in directory order.
    pub entries: Vec<CourseLedgerEntry>,
    pub summary: TranscriptSummary,
    pub award: CredentialAward,
    pub credential: CredentialIdentity,
}

impl TranscriptReport {
    /// Save the report as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: TranscriptReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

/// One flattened per-course row of an official snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub course_id: String,
    pub course_title: String,
    pub credit_weight: u32,
    pub raw_score: Option<u16>,
    pub letter_grade: LetterGrade,
    pub grade_points: Option<u8>,
    pub outcome: Outcome,
}

/// The flattened record shaped for an external "official marksheet" write
/// endpoint. This core only shapes the payload; the write itself belongs
/// to a [`crate::traits::CredentialSink`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficialSnapshot {
    pub credential_id: String,
    pub verification_code: String,
    pub verification_url: String,
    pub learner_id: String,
    pub learner_email: String,
    pub issued_at: DateTime<Utc>,
    pub issue_year: i32,
    pub total_credits_earned: u32,
    pub courses_passed: u32,
    pub average_score: f64,
    pub cgpa: f64,
    pub classification: Classification,
    pub reward_coins: u64,
    pub scholarship_eligible: bool,
    pub courses: Vec<SnapshotRow>,
}

impl OfficialSnapshot {
    /// Flatten a computed report into the snapshot payload.
    pub fn from_report(report: &TranscriptReport) -> Self {
        let courses = report
            .entries
            .iter()
            .map(|e| SnapshotRow {
                course_id: e.fact.course_id.clone(),
                course_title: e.fact.course_title.clone(),
                credit_weight: e.fact.credit_weight,
                raw_score: e.fact.raw_score,
                letter_grade: e.letter_grade,
                grade_points: e.grade_points,
                outcome: e.outcome,
            })
            .collect();

        Self {
            credential_id: report.credential.credential_id.clone(),
            verification_code: report.credential.verification_code.clone(),
            verification_url: report.credential.verification_url.clone(),
            learner_id: report.learner.id.clone(),
            learner_email: report.learner.email.clone(),
            issued_at: report.created_at,
            issue_year: report.issue_year,
            total_credits_earned: report.summary.total_credits_earned,
            courses_passed: report.summary.courses_passed,
            average_score: report.summary.average_score_across_attempted,
            cgpa: report.summary.cgpa,
            classification: report.summary.classification,
            reward_coins: report.award.reward_coins,
            scholarship_eligible: report.award.scholarship_eligible,
            courses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CourseAchievementFact, LESSONS_REQUIRED_FOR_COMPLETION, MAX_SCORE};
    use crate::model::{LabStatus, ProjectStatus};

    fn make_report() -> TranscriptReport {
        let fact = CourseAchievementFact {
            course_id: "rust-101".into(),
            course_title: "Intro to Rust".into(),
            program_name: "Systems".into(),
            credit_weight: 4,
            max_score: MAX_SCORE,
            raw_score: Some(92),
            passed: Some(true),
            project_required: false,
            project_submitted: false,
            lessons_completed: 10,
            lessons_required: LESSONS_REQUIRED_FOR_COMPLETION,
        };
        TranscriptReport {
            id: Uuid::nil(),
            created_at: Utc::now(),
            issue_year: 2026,
            learner: LearnerIdentity {
                id: "learner-1".into(),
                email: "learner@example.org".into(),
            },
            entries: vec![CourseLedgerEntry {
                fact,
                letter_grade: LetterGrade::O,
                grade_points: Some(10),
                outcome: Outcome::Pass,
                project_status: ProjectStatus::NotApplicable,
                lab_status: LabStatus::Completed,
            }],
            summary: TranscriptSummary {
                total_credits_earned: 4,
                courses_passed: 1,
                average_score_across_attempted: 92.0,
                cgpa: 10.0,
                classification: Classification::Distinction,
            },
            award: CredentialAward {
                reward_coins: 500,
                scholarship_eligible: true,
            },
            credential: CredentialIdentity {
                credential_id: "MS-2026-LEARNER-".into(),
                verification_code: "2026LEARNER".into(),
                verification_url: "https://marksheet.dev/verify/marksheet/code/2026LEARNER".into(),
            },
        }
    }

    #[test]
    fn json_roundtrip() {
        let report = make_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        report.save_json(&path).unwrap();
        let loaded = TranscriptReport::load_json(&path).unwrap();

        assert_eq!(loaded.learner.id, "learner-1");
        assert_eq!(loaded.entries.len(), 1);
        assert_eq!(loaded.summary, report.summary);
        assert_eq!(loaded.credential, report.credential);
    }

    #[test]
    fn snapshot_flattens_every_figure() {
        let report = make_report();
        let snapshot = OfficialSnapshot::from_report(&report);

        assert_eq!(snapshot.credential_id, report.credential.credential_id);
        assert_eq!(snapshot.learner_id, "learner-1");
        assert_eq!(snapshot.cgpa, 10.0);
        assert_eq!(snapshot.reward_coins, 500);
        assert_eq!(snapshot.courses.len(), 1);
        assert_eq!(snapshot.courses[0].course_id, "rust-101");
        assert_eq!(snapshot.courses[0].letter_grade, LetterGrade::O);
    }

    #[test]
    fn load_missing_report_fails_with_context() {
        let err = TranscriptReport::load_json(Path::new("no_such_report.json")).unwrap_err();
        assert!(err.to_string().contains("no_such_report.json"));
    }
}
