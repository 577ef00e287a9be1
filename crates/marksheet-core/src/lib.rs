//! marksheet-core — Grading engine, transcript aggregation, and credentialing.
//!
//! This crate defines the data model and the pure computation pipeline that
//! turns a learner's scattered achievement records into one consistent
//! academic record: letter grades, CGPA, a performance classification, a
//! reward payout, and a verifiable credential identity.

pub mod collector;
pub mod credential;
pub mod engine;
pub mod error;
pub mod grading;
pub mod model;
pub mod report;
pub mod reward;
pub mod traits;
pub mod transcript;
