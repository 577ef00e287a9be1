//! End-to-end pipeline test: local store -> engine -> report -> snapshot,
//! all through the library APIs the CLI is built on.

use std::sync::Arc;

use tempfile::TempDir;

use marksheet_core::engine::{TranscriptEngine, TranscriptEngineConfig};
use marksheet_core::model::{Classification, LearnerIdentity, LetterGrade, Outcome};
use marksheet_core::report::TranscriptReport;
use marksheet_stores::{LocalSink, LocalStore};

const BUNDLE: &str = r#"{
  "courses": [
    {"id": "algo", "title": "Algorithms", "program": "CS", "credit_cost": 4, "project_required": true},
    {"id": "net", "title": "Networks", "program": "CS", "credit_cost": 3, "project_required": false},
    {"id": "db", "title": "Databases", "program": "CS", "credit_cost": 3, "project_required": false}
  ],
  "attempts": {
    "algo": {"score_percentage": 92, "passed": true},
    "net": {"score_percentage": 55, "passed": false}
  },
  "submissions": [
    {"course_id": "algo", "submitted_at": "2026-02-10T09:30:00Z"}
  ],
  "lesson_progress": {"algo": 11, "net": 4}
}"#;

fn engine_for(dir: &TempDir) -> TranscriptEngine {
    TranscriptEngine::new(
        Arc::new(LocalStore::new(dir.path())),
        Some(Arc::new(LocalSink::new(dir.path().join("issued")))),
        TranscriptEngineConfig {
            verification_base_url: "https://marksheet.dev".into(),
            issue_year: Some(2026),
        },
    )
}

#[tokio::test]
async fn full_pipeline_from_files_to_snapshot() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("casey.json"), BUNDLE).unwrap();

    let engine = engine_for(&dir);
    let learner = LearnerIdentity {
        id: "casey".into(),
        email: "casey@example.org".into(),
    };

    let report = engine.build_transcript(&learner).await.unwrap();

    // Ledger follows course directory order and grades each course.
    assert_eq!(report.entries.len(), 3);
    assert_eq!(report.entries[0].letter_grade, LetterGrade::O);
    assert_eq!(report.entries[0].outcome, Outcome::Pass);
    assert_eq!(report.entries[1].letter_grade, LetterGrade::B);
    assert_eq!(report.entries[1].outcome, Outcome::Fail);
    assert_eq!(report.entries[2].letter_grade, LetterGrade::NotGraded);
    assert_eq!(report.entries[2].outcome, Outcome::Pending);

    // Summary figures, including the intended cgpa/classification split.
    assert_eq!(report.summary.courses_passed, 1);
    assert_eq!(report.summary.total_credits_earned, 4);
    assert_eq!(report.summary.cgpa, 10.0);
    assert_eq!(report.summary.average_score_across_attempted, 73.5);
    assert_eq!(report.summary.classification, Classification::FirstClass);

    // FirstClass base 300 at perfect cgpa; scholarship via the cgpa path.
    assert_eq!(report.award.reward_coins, 300);
    assert!(report.award.scholarship_eligible);

    assert_eq!(report.credential.credential_id, "MS-2026-CASEY");

    // Save, reload, and issue.
    let report_path = dir.path().join("reports/casey.json");
    report.save_json(&report_path).unwrap();
    let reloaded = TranscriptReport::load_json(&report_path).unwrap();
    assert_eq!(reloaded.summary, report.summary);
    assert_eq!(reloaded.credential, report.credential);

    let snapshot = engine.persist_official(&report).await.unwrap();
    assert_eq!(snapshot.courses.len(), 3);
    assert!(dir.path().join("issued/MS-2026-CASEY.json").exists());
}

#[tokio::test]
async fn rerunning_the_pipeline_is_stable() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("casey.json"), BUNDLE).unwrap();

    let engine = engine_for(&dir);
    let learner = LearnerIdentity {
        id: "casey".into(),
        email: String::new(),
    };

    let first = engine.build_transcript(&learner).await.unwrap();
    let second = engine.build_transcript(&learner).await.unwrap();

    assert_eq!(first.entries, second.entries);
    assert_eq!(first.summary, second.summary);
    assert_eq!(first.award, second.award);
    assert_eq!(first.credential, second.credential);
}
