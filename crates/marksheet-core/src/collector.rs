//! Achievement collector.
//!
//! Normalizes the four heterogeneous per-learner record collections into
//! one ordered list of per-course achievement facts. Pure function of its
//! inputs: no course is dropped, no course appears twice, and absent
//! records become absent fields rather than errors.

use std::collections::{HashMap, HashSet};

use crate::model::{
    Course, CourseAchievementFact, Submission, TestAttempt, LESSONS_REQUIRED_FOR_COMPLETION,
    MAX_SCORE,
};

/// Produce one [`CourseAchievementFact`] per course, in the course list's
/// order. A duplicated course id keeps its first occurrence only.
///
/// A course with no matching test attempt yields `raw_score = None` and
/// `passed = None`. A course with no submissions yields
/// `project_submitted = false`. A course with no lesson-progress record
/// yields `lessons_completed = 0`.
pub fn collect_achievements(
    courses: &[Course],
    attempts: &HashMap<String, TestAttempt>,
    submissions: &[Submission],
    lesson_progress: &HashMap<String, u32>,
) -> Vec<CourseAchievementFact> {
    let mut seen = HashSet::new();
    courses
        .iter()
        .filter(|course| seen.insert(course.id.as_str()))
        .map(|course| {
            let attempt = attempts.get(&course.id);
            let project_submitted = submissions.iter().any(|s| s.course_id == course.id);
            let lessons_completed = lesson_progress.get(&course.id).copied().unwrap_or(0);

            CourseAchievementFact {
                course_id: course.id.clone(),
                course_title: course.title.clone(),
                program_name: course.program.clone(),
                credit_weight: course.credit_cost,
                max_score: MAX_SCORE,
                raw_score: attempt.map(|a| a.score_percentage),
                passed: attempt.map(|a| a.passed),
                project_required: course.project_required,
                project_submitted,
                lessons_completed,
                lessons_required: LESSONS_REQUIRED_FOR_COMPLETION,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn course(id: &str, credits: u32, project: bool) -> Course {
        Course {
            id: id.into(),
            title: format!("Course {id}"),
            program: "Test Program".into(),
            credit_cost: credits,
            is_free: false,
            project_required: project,
        }
    }

    #[test]
    fn one_fact_per_course_in_order() {
        let courses = vec![course("c", 3, false), course("a", 4, true), course("b", 2, false)];
        let facts = collect_achievements(&courses, &HashMap::new(), &[], &HashMap::new());

        assert_eq!(facts.len(), 3);
        let ids: Vec<_> = facts.iter().map(|f| f.course_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn missing_attempt_yields_absent_score() {
        let courses = vec![course("a", 3, false)];
        let facts = collect_achievements(&courses, &HashMap::new(), &[], &HashMap::new());

        assert_eq!(facts[0].raw_score, None);
        assert_eq!(facts[0].passed, None);
        assert_eq!(facts[0].lessons_completed, 0);
        assert!(!facts[0].project_submitted);
    }

    #[test]
    fn attempt_and_progress_are_joined_by_course_id() {
        let courses = vec![course("a", 3, true), course("b", 2, false)];
        let mut attempts = HashMap::new();
        attempts.insert(
            "a".to_string(),
            TestAttempt {
                score_percentage: 88,
                passed: true,
            },
        );
        let submissions = vec![Submission {
            course_id: "a".into(),
            submitted_at: Utc::now(),
        }];
        let mut progress = HashMap::new();
        progress.insert("a".to_string(), 7u32);

        let facts = collect_achievements(&courses, &attempts, &submissions, &progress);

        assert_eq!(facts[0].raw_score, Some(88));
        assert_eq!(facts[0].passed, Some(true));
        assert!(facts[0].project_submitted);
        assert_eq!(facts[0].lessons_completed, 7);

        assert_eq!(facts[1].raw_score, None);
        assert!(!facts[1].project_submitted);
        assert_eq!(facts[1].lessons_completed, 0);
    }

    #[test]
    fn duplicate_course_ids_keep_the_first_occurrence() {
        let mut duplicate = course("a", 9, true);
        duplicate.title = "Course a (duplicate)".into();
        let courses = vec![course("a", 4, false), duplicate, course("b", 2, false)];

        let facts = collect_achievements(&courses, &HashMap::new(), &[], &HashMap::new());

        let ids: Vec<_> = facts.iter().map(|f| f.course_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(facts[0].credit_weight, 4);
        assert_eq!(facts[0].course_title, "Course a");
    }

    #[test]
    fn stray_records_for_unknown_courses_are_ignored() {
        let courses = vec![course("a", 3, false)];
        let mut attempts = HashMap::new();
        attempts.insert(
            "ghost".to_string(),
            TestAttempt {
                score_percentage: 100,
                passed: true,
            },
        );
        let submissions = vec![Submission {
            course_id: "ghost".into(),
            submitted_at: Utc::now(),
        }];

        let facts = collect_achievements(&courses, &attempts, &submissions, &HashMap::new());
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].raw_score, None);
        assert!(!facts[0].project_submitted);
    }
}
