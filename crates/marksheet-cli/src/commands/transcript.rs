//! The `marksheet transcript` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use marksheet_core::model::LearnerIdentity;
use marksheet_core::report::TranscriptReport;

pub async fn execute(
    learner_id: String,
    email: String,
    store: Option<String>,
    format: String,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = super::load_config(config_path.as_deref())?;
    let engine = super::build_engine(&config, store.as_deref(), false)?;

    let learner = LearnerIdentity {
        id: learner_id,
        email,
    };
    let report = engine.build_transcript(&learner).await?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "table" => print_report(&report),
        other => anyhow::bail!("unknown format: {other} (expected table or json)"),
    }

    if let Some(dir) = output {
        let path = dir.join(format!("{}.json", report.credential.credential_id));
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

pub(crate) fn print_report(report: &TranscriptReport) {
    let mut table = Table::new();
    table.set_header(vec![
        "Course", "Credits", "Score", "Grade", "Points", "Outcome", "Project", "Lab",
    ]);

    for entry in &report.entries {
        let score = entry
            .fact
            .raw_score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let points = entry
            .grade_points
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(&entry.fact.course_title),
            Cell::new(entry.fact.credit_weight),
            Cell::new(score),
            Cell::new(entry.letter_grade),
            Cell::new(points),
            Cell::new(entry.outcome),
            Cell::new(entry.project_status),
            Cell::new(entry.lab_status),
        ]);
    }

    println!("{table}");
    println!();
    println!("Learner:          {} <{}>", report.learner.id, report.learner.email);
    println!("Credits earned:   {}", report.summary.total_credits_earned);
    println!("Courses passed:   {}", report.summary.courses_passed);
    println!(
        "Average score:    {:.1}",
        report.summary.average_score_across_attempted
    );
    println!("CGPA:             {:.2}", report.summary.cgpa);
    println!("Classification:   {}", report.summary.classification);
    println!("Reward coins:     {}", report.award.reward_coins);
    println!(
        "Scholarship:      {}",
        if report.award.scholarship_eligible {
            "eligible"
        } else {
            "not eligible"
        }
    );
    println!("Credential:       {}", report.credential.credential_id);
    println!("Verify at:        {}", report.credential.verification_url);
}
