//! Error types for the transcript pipeline and its data stores.
//!
//! `StoreError` is defined here rather than in `marksheet-stores` so the
//! engine can classify store failures for messaging without string
//! matching.

use thiserror::Error;

/// Errors raised by the transcript computation pipeline.
///
/// Missing data (no attempt, no submission) is never an error; these
/// variants are contract violations by the caller or downstream failures.
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// A raw score outside 0-100 was supplied for a course. Rejected
    /// loudly instead of silently misgrading.
    #[error("score {score} for course '{course_id}' is outside 0-{max}", max = crate::model::MAX_SCORE)]
    InvalidScoreRange { course_id: String, score: u16 },

    /// The learner identifier is empty, so no credential can be derived.
    #[error("learner identifier is empty")]
    InvalidLearnerIdentity,

    /// The optional official-snapshot write failed. The already-computed
    /// transcript remains valid and displayable.
    #[error("failed to persist official marksheet")]
    CredentialPersistFailed(#[source] anyhow::Error),
}

impl TranscriptError {
    /// Returns `true` if the transcript computed before this error is
    /// still valid. Only persistence failures are recoverable; computation
    /// failures are fail-closed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TranscriptError::CredentialPersistFailed(_))
    }
}

/// Errors that can occur when fetching achievement records from a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Authentication or authorization against the store failed.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// No records exist for the requested learner.
    #[error("learner not found: {0}")]
    LearnerNotFound(String),

    /// The store returned an error response.
    #[error("store error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),

    /// A record could not be decoded.
    #[error("malformed record: {0}")]
    Malformed(String),
}

impl StoreError {
    /// Returns `true` if this error is permanent and retrying the fetch
    /// cannot help.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            StoreError::Unauthorized(_)
                | StoreError::LearnerNotFound(_)
                | StoreError::Malformed(_)
        )
    }
}
