//! Quick transcript example — minimal programmatic usage of marksheet.
//!
//! Builds a transcript straight from in-memory records, without any store
//! files or configuration.
//!
//! ```bash
//! cargo run --example quick_transcript
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use marksheet_core::engine::{TranscriptEngine, TranscriptEngineConfig};
use marksheet_core::model::{Course, LearnerIdentity, TestAttempt};
use marksheet_core::traits::AchievementBundle;
use marksheet_stores::MockSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Assemble the four input collections by hand.
    let courses = vec![
        Course {
            id: "rust-101".into(),
            title: "Intro to Rust".into(),
            program: "Systems Track".into(),
            credit_cost: 4,
            is_free: false,
            project_required: true,
        },
        Course {
            id: "rust-201".into(),
            title: "Async Rust".into(),
            program: "Systems Track".into(),
            credit_cost: 3,
            is_free: false,
            project_required: false,
        },
    ];

    let mut attempts = HashMap::new();
    attempts.insert(
        "rust-101".to_string(),
        TestAttempt {
            score_percentage: 87,
            passed: true,
        },
    );

    let bundle = AchievementBundle {
        courses,
        attempts,
        submissions: vec![],
        lesson_progress: HashMap::new(),
    };

    // Wire the engine against an in-memory source.
    let engine = TranscriptEngine::new(
        Arc::new(MockSource::new(bundle)),
        None,
        TranscriptEngineConfig::default(),
    );

    let learner = LearnerIdentity {
        id: "demo-learner".into(),
        email: "demo@example.org".into(),
    };

    let report = engine.build_transcript(&learner).await?;

    println!("Transcript for {}", report.learner.id);
    for entry in &report.entries {
        println!(
            "  {} — grade {}, outcome {}",
            entry.fact.course_title, entry.letter_grade, entry.outcome
        );
    }
    println!("CGPA: {:.2}", report.summary.cgpa);
    println!("Classification: {}", report.summary.classification);
    println!("Reward coins: {}", report.award.reward_coins);
    println!("Credential: {}", report.credential.credential_id);
    println!("Verify at: {}", report.credential.verification_url);

    Ok(())
}
