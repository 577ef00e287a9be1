//! Core trait definitions for achievement sources and credential sinks.
//!
//! These async traits are implemented by the `marksheet-stores` crate;
//! the engine only ever sees the trait objects, so the grading core is
//! agnostic to where the facts come from and never reads ambient state.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::{Course, Submission, TestAttempt};
use crate::report::OfficialSnapshot;

/// The four raw input collections for one learner, fetched as a single
/// atomic bundle. The engine never interleaves partial results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementBundle {
    /// Enrolled/visible courses, in directory order.
    pub courses: Vec<Course>,
    /// Best test attempt keyed by course id.
    #[serde(default)]
    pub attempts: HashMap<String, TestAttempt>,
    /// Project submissions.
    #[serde(default)]
    pub submissions: Vec<Submission>,
    /// Completed-lesson counts keyed by course id.
    #[serde(default)]
    pub lesson_progress: HashMap<String, u32>,
}

/// Trait for backends that hold a learner's achievement records.
#[async_trait]
pub trait AchievementSource: Send + Sync {
    /// Human-readable store name (e.g. "local").
    fn name(&self) -> &str;

    /// Fetch the full bundle for one learner.
    async fn fetch(&self, learner_id: &str) -> anyhow::Result<AchievementBundle>;
}

/// Trait for backends that accept an official marksheet snapshot.
///
/// Persistence is fire-and-forget from the engine's perspective: no retry
/// or queueing happens at this layer.
#[async_trait]
pub trait CredentialSink: Send + Sync {
    /// Human-readable sink name.
    fn name(&self) -> &str;

    /// Persist one official snapshot.
    async fn persist(&self, snapshot: &OfficialSnapshot) -> anyhow::Result<()>;
}
