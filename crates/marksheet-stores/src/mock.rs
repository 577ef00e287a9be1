//! Mock store for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use marksheet_core::report::OfficialSnapshot;
use marksheet_core::traits::{AchievementBundle, AchievementSource, CredentialSink};

/// An in-memory achievement source for testing the engine without files
/// or a server. Returns a fixed bundle and records how it was called.
pub struct MockSource {
    bundle: AchievementBundle,
    call_count: AtomicU32,
    last_learner: Mutex<Option<String>>,
}

impl MockSource {
    pub fn new(bundle: AchievementBundle) -> Self {
        Self {
            bundle,
            call_count: AtomicU32::new(0),
            last_learner: Mutex::new(None),
        }
    }

    /// An empty source: a learner enrolled in nothing.
    pub fn empty() -> Self {
        Self::new(AchievementBundle::default())
    }

    /// Number of fetches made against this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// The learner id of the last fetch.
    pub fn last_learner(&self) -> Option<String> {
        self.last_learner.lock().unwrap().clone()
    }
}

#[async_trait]
impl AchievementSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, learner_id: &str) -> anyhow::Result<AchievementBundle> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_learner.lock().unwrap() = Some(learner_id.to_string());
        Ok(self.bundle.clone())
    }
}

/// An in-memory credential sink that records persisted snapshots, or
/// fails every write when constructed with [`MockSink::failing`].
pub struct MockSink {
    persisted: Mutex<Vec<OfficialSnapshot>>,
    fail: bool,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            persisted: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A sink whose every write fails.
    pub fn failing() -> Self {
        Self {
            persisted: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Snapshots persisted so far.
    pub fn persisted(&self) -> Vec<OfficialSnapshot> {
        self.persisted.lock().unwrap().clone()
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialSink for MockSink {
    fn name(&self) -> &str {
        "mock"
    }

    async fn persist(&self, snapshot: &OfficialSnapshot) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("mock sink configured to fail");
        }
        self.persisted.lock().unwrap().push(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    use marksheet_core::engine::{TranscriptEngine, TranscriptEngineConfig};
    use marksheet_core::model::{Classification, Course, LearnerIdentity, TestAttempt};

    fn engine(source: Arc<MockSource>, sink: Arc<MockSink>) -> TranscriptEngine {
        TranscriptEngine::new(
            source,
            Some(sink),
            TranscriptEngineConfig {
                verification_base_url: "https://marksheet.dev".into(),
                issue_year: Some(2026),
            },
        )
    }

    fn learner() -> LearnerIdentity {
        LearnerIdentity {
            id: "learner-1".into(),
            email: "learner@example.org".into(),
        }
    }

    #[tokio::test]
    async fn source_records_calls() {
        let source = Arc::new(MockSource::empty());
        let sink = Arc::new(MockSink::new());
        let engine = engine(Arc::clone(&source), sink);

        engine.build_transcript(&learner()).await.unwrap();
        engine.build_transcript(&learner()).await.unwrap();

        assert_eq!(source.call_count(), 2);
        assert_eq!(source.last_learner().as_deref(), Some("learner-1"));
    }

    #[tokio::test]
    async fn sink_records_issued_snapshots() {
        let mut attempts = HashMap::new();
        attempts.insert(
            "a".to_string(),
            TestAttempt {
                score_percentage: 95,
                passed: true,
            },
        );
        let bundle = AchievementBundle {
            courses: vec![Course {
                id: "a".into(),
                title: "Course A".into(),
                program: "P".into(),
                credit_cost: 4,
                is_free: false,
                project_required: false,
            }],
            attempts,
            submissions: vec![],
            lesson_progress: HashMap::new(),
        };

        let source = Arc::new(MockSource::new(bundle));
        let sink = Arc::new(MockSink::new());
        let engine = engine(source, Arc::clone(&sink));

        let report = engine.build_transcript(&learner()).await.unwrap();
        engine.persist_official(&report).await.unwrap();

        let persisted = sink.persisted();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].classification, Classification::Distinction);
        assert_eq!(persisted[0].credential_id, "MS-2026-LEARNER-");
    }

    #[tokio::test]
    async fn failing_sink_never_records() {
        let source = Arc::new(MockSource::empty());
        let sink = Arc::new(MockSink::failing());
        let engine = engine(source, Arc::clone(&sink));

        let report = engine.build_transcript(&learner()).await.unwrap();
        assert!(engine.persist_official(&report).await.is_err());
        assert!(sink.persisted().is_empty());
    }
}
