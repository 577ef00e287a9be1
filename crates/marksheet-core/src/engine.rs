//! Transcript engine orchestrator.
//!
//! Fetches one learner's achievement bundle from the injected source,
//! runs the pure pipeline (collect, grade, summarize, award, credential),
//! and optionally persists an official snapshot through the injected
//! sink. Every stage between fetch and persist is synchronous and
//! side-effect free; recomputation from the same bundle is idempotent.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use uuid::Uuid;

use crate::collector::collect_achievements;
use crate::credential::derive_identity;
use crate::error::TranscriptError;
use crate::grading::grade_ledger;
use crate::model::LearnerIdentity;
use crate::report::{OfficialSnapshot, TranscriptReport};
use crate::reward::compute_award;
use crate::traits::{AchievementBundle, AchievementSource, CredentialSink};
use crate::transcript::summarize;

/// Configuration for the transcript engine.
#[derive(Debug, Clone)]
pub struct TranscriptEngineConfig {
    /// Public base URL embedded in verification links.
    pub verification_base_url: String,
    /// Pinned issue year; `None` uses the current UTC year. Pinning keeps
    /// re-issued verification links stable across a year boundary.
    pub issue_year: Option<i32>,
}

impl Default for TranscriptEngineConfig {
    fn default() -> Self {
        Self {
            verification_base_url: "https://marksheet.dev".to_string(),
            issue_year: None,
        }
    }
}

/// The transcript engine.
pub struct TranscriptEngine {
    source: Arc<dyn AchievementSource>,
    sink: Option<Arc<dyn CredentialSink>>,
    config: TranscriptEngineConfig,
}

impl TranscriptEngine {
    pub fn new(
        source: Arc<dyn AchievementSource>,
        sink: Option<Arc<dyn CredentialSink>>,
        config: TranscriptEngineConfig,
    ) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    /// Fetch the learner's bundle and compute a full transcript report.
    ///
    /// Computation failures are fail-closed: no partial transcript is
    /// ever returned.
    pub async fn build_transcript(&self, learner: &LearnerIdentity) -> Result<TranscriptReport> {
        tracing::debug!(store = self.source.name(), learner = %learner.id, "fetching achievement bundle");
        let bundle = self
            .source
            .fetch(&learner.id)
            .await
            .with_context(|| format!("failed to fetch records for learner '{}'", learner.id))?;

        let report = self.compute(learner, &bundle)?;
        tracing::info!(
            learner = %learner.id,
            courses = report.entries.len(),
            passed = report.summary.courses_passed,
            cgpa = report.summary.cgpa,
            classification = %report.summary.classification,
            "transcript computed"
        );
        Ok(report)
    }

    /// Run the pure pipeline over an already-fetched bundle.
    pub fn compute(
        &self,
        learner: &LearnerIdentity,
        bundle: &AchievementBundle,
    ) -> Result<TranscriptReport, TranscriptError> {
        let issue_year = self.config.issue_year.unwrap_or_else(|| Utc::now().year());

        let facts = collect_achievements(
            &bundle.courses,
            &bundle.attempts,
            &bundle.submissions,
            &bundle.lesson_progress,
        );
        let entries = grade_ledger(&facts)?;
        let summary = summarize(&entries);
        let award = compute_award(summary.classification, summary.cgpa);
        let credential =
            derive_identity(&learner.id, issue_year, &self.config.verification_base_url)?;

        Ok(TranscriptReport {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            issue_year,
            learner: learner.clone(),
            entries,
            summary,
            award,
            credential,
        })
    }

    /// Persist an official snapshot of a computed report.
    ///
    /// Failures here are recoverable ([`TranscriptError::is_recoverable`]):
    /// the report stays valid and displayable, and any retry policy
    /// belongs to the caller.
    pub async fn persist_official(
        &self,
        report: &TranscriptReport,
    ) -> Result<OfficialSnapshot, TranscriptError> {
        let snapshot = OfficialSnapshot::from_report(report);

        let Some(sink) = &self.sink else {
            return Err(TranscriptError::CredentialPersistFailed(anyhow::anyhow!(
                "no credential sink configured"
            )));
        };

        tracing::debug!(sink = sink.name(), credential = %snapshot.credential_id, "persisting official snapshot");
        sink.persist(&snapshot)
            .await
            .map_err(TranscriptError::CredentialPersistFailed)?;

        tracing::info!(credential = %snapshot.credential_id, "official snapshot persisted");
        Ok(snapshot)
    }
}
