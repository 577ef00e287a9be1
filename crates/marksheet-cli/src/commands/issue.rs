//! The `marksheet issue` command.
//!
//! Computes a transcript and persists the official snapshot. A failed
//! write is a warning, not a failure: the computed transcript is still
//! rendered and the command exits successfully.

use std::path::PathBuf;

use anyhow::Result;

use marksheet_core::model::LearnerIdentity;

pub async fn execute(
    learner_id: String,
    email: String,
    store: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = super::load_config(config_path.as_deref())?;
    let engine = super::build_engine(&config, store.as_deref(), true)?;

    let learner = LearnerIdentity {
        id: learner_id,
        email,
    };
    let report = engine.build_transcript(&learner).await?;

    super::transcript::print_report(&report);
    println!();

    match engine.persist_official(&report).await {
        Ok(snapshot) => {
            println!("Official marksheet issued: {}", snapshot.credential_id);
        }
        Err(e) => {
            // Recoverable by design: the transcript above is already valid.
            tracing::warn!(error = %e, "official snapshot was not persisted");
            eprintln!("Warning: official snapshot was not persisted ({e}); the transcript above is still valid");
        }
    }

    Ok(())
}
