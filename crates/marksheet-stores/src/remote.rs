//! Server-backed achievement store.
//!
//! Fetches the four input collections from a REST API and joins them into
//! one bundle. The four requests run concurrently, but the engine only
//! ever sees the complete bundle; a failure in any one of them fails the
//! whole fetch.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::instrument;

use marksheet_core::error::StoreError;
use marksheet_core::model::{Course, Submission, TestAttempt};
use marksheet_core::report::OfficialSnapshot;
use marksheet_core::traits::{AchievementBundle, AchievementSource, CredentialSink};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Achievement store backed by the platform's REST API.
pub struct RemoteStore {
    base_url: String,
    api_token: Option<String>,
    client: reqwest::Client,
}

impl RemoteStore {
    pub fn new(base_url: &str, api_token: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            client,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        let mut request = self.client.get(format!("{}{path}", self.base_url));
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                StoreError::Timeout(DEFAULT_TIMEOUT_SECS)
            } else {
                StoreError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        match status {
            401 | 403 => {
                let body = response.text().await.unwrap_or_default();
                return Err(StoreError::Unauthorized(body));
            }
            404 => {
                return Err(StoreError::LearnerNotFound(path.to_string()));
            }
            s if s >= 400 => {
                let body = response.text().await.unwrap_or_default();
                return Err(StoreError::ApiError {
                    status,
                    message: body,
                });
            }
            _ => {}
        }

        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Malformed(format!("{path}: {e}")))
    }
}

#[async_trait]
impl AchievementSource for RemoteStore {
    fn name(&self) -> &str {
        "remote"
    }

    #[instrument(skip(self), fields(learner = %learner_id))]
    async fn fetch(&self, learner_id: &str) -> anyhow::Result<AchievementBundle> {
        let courses_path = format!("/learners/{learner_id}/courses");
        let attempts_path = format!("/learners/{learner_id}/test-attempts");
        let submissions_path = format!("/learners/{learner_id}/submissions");
        let progress_path = format!("/learners/{learner_id}/lesson-progress");

        let (courses, attempts, submissions, lesson_progress) = futures::try_join!(
            self.get_json::<Vec<Course>>(&courses_path),
            self.get_json::<HashMap<String, TestAttempt>>(&attempts_path),
            self.get_json::<Vec<Submission>>(&submissions_path),
            self.get_json::<HashMap<String, u32>>(&progress_path),
        )?;

        Ok(AchievementBundle {
            courses,
            attempts,
            submissions,
            lesson_progress,
        })
    }
}

/// Sink that POSTs official snapshots to the platform's write endpoint.
pub struct RemoteSink {
    base_url: String,
    api_token: Option<String>,
    client: reqwest::Client,
}

impl RemoteSink {
    pub fn new(base_url: &str, api_token: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            client,
        }
    }
}

#[async_trait]
impl CredentialSink for RemoteSink {
    fn name(&self) -> &str {
        "remote"
    }

    #[instrument(skip(self, snapshot), fields(credential = %snapshot.credential_id))]
    async fn persist(&self, snapshot: &OfficialSnapshot) -> anyhow::Result<()> {
        let mut request = self
            .client
            .post(format!("{}/marksheets", self.base_url))
            .json(snapshot);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                StoreError::Timeout(DEFAULT_TIMEOUT_SECS)
            } else {
                StoreError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::ApiError {
                status,
                message: body,
            }
            .into());
        }

        Ok(())
    }
}
