//! Local JSON-file store.
//!
//! The offline analog of the server-backed store: one JSON bundle file
//! per learner under a data directory, and a sink that writes issued
//! snapshots next to it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;

use marksheet_core::error::StoreError;
use marksheet_core::model::MAX_SCORE;
use marksheet_core::report::OfficialSnapshot;
use marksheet_core::traits::{AchievementBundle, AchievementSource, CredentialSink};

/// Reads `<data_dir>/<learner_id>.json` bundles.
pub struct LocalStore {
    data_dir: PathBuf,
}

impl LocalStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn bundle_path(&self, learner_id: &str) -> PathBuf {
        self.data_dir.join(format!("{learner_id}.json"))
    }
}

#[async_trait]
impl AchievementSource for LocalStore {
    fn name(&self) -> &str {
        "local"
    }

    async fn fetch(&self, learner_id: &str) -> Result<AchievementBundle> {
        let path = self.bundle_path(learner_id);
        if !path.exists() {
            return Err(StoreError::LearnerNotFound(learner_id.to_string()).into());
        }
        load_bundle(&path)
    }
}

/// Load and decode one bundle file.
pub fn load_bundle(path: &Path) -> Result<AchievementBundle> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read bundle: {}", path.display()))?;
    let bundle: AchievementBundle = serde_json::from_str(&content)
        .map_err(|e| StoreError::Malformed(format!("{}: {e}", path.display())))?;
    Ok(bundle)
}

/// Check a bundle for record-level problems: duplicate course ids, scores
/// outside 0-100, and attempt/submission records that reference no known
/// course. Returns one message per problem; an empty list means valid.
pub fn validate_bundle(bundle: &AchievementBundle) -> Vec<String> {
    let mut problems = Vec::new();

    let mut seen = std::collections::HashSet::new();
    for course in &bundle.courses {
        if !seen.insert(course.id.as_str()) {
            problems.push(format!("duplicate course id '{}'", course.id));
        }
    }

    for (course_id, attempt) in &bundle.attempts {
        if attempt.score_percentage > MAX_SCORE {
            problems.push(format!(
                "score {} for course '{course_id}' is outside 0-{MAX_SCORE}",
                attempt.score_percentage
            ));
        }
        if !seen.contains(course_id.as_str()) {
            problems.push(format!("attempt references unknown course '{course_id}'"));
        }
    }

    for submission in &bundle.submissions {
        if !seen.contains(submission.course_id.as_str()) {
            problems.push(format!(
                "submission references unknown course '{}'",
                submission.course_id
            ));
        }
    }

    problems
}

/// Writes issued snapshots as `<dir>/<credential_id>.json`.
pub struct LocalSink {
    dir: PathBuf,
}

impl LocalSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl CredentialSink for LocalSink {
    fn name(&self) -> &str {
        "local"
    }

    async fn persist(&self, snapshot: &OfficialSnapshot) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;
        let path = self.dir.join(format!("{}.json", snapshot.credential_id));
        let json =
            serde_json::to_string_pretty(snapshot).context("failed to serialize snapshot")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        tracing::debug!(path = %path.display(), "snapshot written");
        Ok(())
    }
}
