//! Core data model types for marksheet.
//!
//! These are the fundamental types the entire marksheet system uses to
//! represent courses, achievement facts, graded ledger entries, and
//! transcript-level summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every course is scored out of the same maximum.
pub const MAX_SCORE: u16 = 100;

/// How many lessons a learner must complete before a course's lab work
/// counts as done.
pub const LESSONS_REQUIRED_FOR_COMPLETION: u32 = 10;

/// A course as reported by the course directory collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable course title.
    pub title: String,
    /// Program the course belongs to.
    #[serde(default)]
    pub program: String,
    /// Credit weight earned when the course is passed.
    pub credit_cost: u32,
    /// Whether the course is free to enroll in.
    #[serde(default)]
    pub is_free: bool,
    /// Whether a project submission is part of the course.
    #[serde(default)]
    pub project_required: bool,
}

/// A learner's best test attempt for one course, as reported by the
/// test-attempt store. `passed` is the source of truth's own verdict
/// against its per-course pass bar; it is never re-derived here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TestAttempt {
    /// Score as a percentage, 0-100.
    pub score_percentage: u16,
    /// Whether the attempt met the course's pass threshold.
    pub passed: bool,
}

/// A project submission record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// Course the project belongs to.
    pub course_id: String,
    /// When the project was submitted.
    pub submitted_at: DateTime<Utc>,
}

/// A learner's stable identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerIdentity {
    /// Stable string identifier; also drives credential derivation.
    pub id: String,
    /// Display email. Not used in identifier derivation.
    #[serde(default)]
    pub email: String,
}

/// One course's normalized achievement record, produced fresh per
/// transcript request by the collector. Absent optional fields are valid
/// states, not errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseAchievementFact {
    pub course_id: String,
    pub course_title: String,
    pub program_name: String,
    /// Credit weight earned on a pass.
    pub credit_weight: u32,
    /// Always [`MAX_SCORE`].
    pub max_score: u16,
    /// Best test score, absent when the learner has not attempted the test.
    pub raw_score: Option<u16>,
    /// Pass verdict supplied by the source of truth alongside the score.
    pub passed: Option<bool>,
    pub project_required: bool,
    pub project_submitted: bool,
    pub lessons_completed: u32,
    pub lessons_required: u32,
}

/// Letter grades in descending order of merit. `NotGraded` renders as "-"
/// and marks a course with no test attempt yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    O,
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
    F,
    #[serde(rename = "-")]
    NotGraded,
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LetterGrade::O => "O",
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::F => "F",
            LetterGrade::NotGraded => "-",
        };
        write!(f, "{s}")
    }
}

/// Per-course outcome. `Pending` marks a course with no attempt yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Pass,
    Fail,
    Pending,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => write!(f, "Pass"),
            Outcome::Fail => write!(f, "Fail"),
            Outcome::Pending => write!(f, "Pending"),
        }
    }
}

/// Project submission state for one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Submitted,
    Pending,
    NotApplicable,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStatus::Submitted => write!(f, "Submitted"),
            ProjectStatus::Pending => write!(f, "Pending"),
            ProjectStatus::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Lab/lesson completion state for one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabStatus {
    Completed,
    Pending,
}

impl fmt::Display for LabStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabStatus::Completed => write!(f, "Completed"),
            LabStatus::Pending => write!(f, "Pending"),
        }
    }
}

/// One course's fully graded record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseLedgerEntry {
    /// The raw achievement fact this entry was derived from.
    pub fact: CourseAchievementFact,
    /// Letter grade; `NotGraded` iff `fact.raw_score` is absent.
    pub letter_grade: LetterGrade,
    /// Grade points 0-10; `None` iff `fact.raw_score` is absent, and then
    /// it must not contribute to any average.
    pub grade_points: Option<u8>,
    pub outcome: Outcome,
    pub project_status: ProjectStatus,
    pub lab_status: LabStatus,
}

/// Coarse performance tier derived from the average raw score across
/// attempted courses (not from the CGPA — the two can diverge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Distinction,
    FirstClass,
    SecondClass,
    Pass,
    BelowPass,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Distinction => write!(f, "Distinction"),
            Classification::FirstClass => write!(f, "First Class"),
            Classification::SecondClass => write!(f, "Second Class"),
            Classification::Pass => write!(f, "Pass"),
            Classification::BelowPass => write!(f, "Below Pass"),
        }
    }
}

impl FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "distinction" => Ok(Classification::Distinction),
            "firstclass" => Ok(Classification::FirstClass),
            "secondclass" => Ok(Classification::SecondClass),
            "pass" => Ok(Classification::Pass),
            "belowpass" => Ok(Classification::BelowPass),
            other => Err(format!("unknown classification: {other}")),
        }
    }
}

/// Transcript-level summary, one per learner per request. Never mutated
/// after construction; every request recomputes from scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSummary {
    /// Sum of credit weight over entries with `Outcome::Pass`.
    pub total_credits_earned: u32,
    /// Count of entries with `Outcome::Pass`.
    pub courses_passed: u32,
    /// Mean raw score over attempted courses; 0.0 when none attempted.
    pub average_score_across_attempted: f64,
    /// Mean grade points over passed courses, rounded to 2 decimals;
    /// 0.00 when no course is passed.
    pub cgpa: f64,
    pub classification: Classification,
}

/// One-time reward payout and scholarship eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialAward {
    pub reward_coins: u64,
    pub scholarship_eligible: bool,
}

/// The public-facing identifier pair a third party uses to confirm a
/// transcript's authenticity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialIdentity {
    /// Human-presentable identifier, e.g. `MS-2026-AB12CD34`.
    pub credential_id: String,
    /// Compact alphanumeric form suitable for a URL path segment.
    pub verification_code: String,
    /// Full verification URL.
    pub verification_url: String,
}
