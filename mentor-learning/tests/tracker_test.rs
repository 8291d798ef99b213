use std::sync::Arc;

use chrono::{Duration, Utc};
use mentor_core::errors::{MentorError, SessionError};
use mentor_core::models::Difficulty;
use mentor_learning::ProgressTracker;
use mentor_session::ProgressStore;

fn tracker() -> ProgressTracker {
    ProgressTracker::new(Arc::new(ProgressStore::new()))
}

// ── Recording and aggregation ──────────────────────────────────────────────

#[test]
fn record_attempt_classifies_and_aggregates() {
    let tracker = tracker();
    let session = tracker.start_session(Some("rust".to_string())).unwrap();

    tracker
        .record_attempt(&session.id, "q1", "a1", "Correct!", "ownership")
        .unwrap();
    tracker
        .record_attempt(
            &session.id,
            "q2",
            "a2",
            "Partially correct: missing one detail",
            "ownership",
        )
        .unwrap();
    let updated = tracker
        .record_attempt(&session.id, "q3", "a3", "That's wrong", "lifetimes")
        .unwrap();

    assert_eq!(updated.total, 3);
    assert_eq!(updated.correct, 1);
    assert_eq!(updated.partial, 1);
    assert_eq!(updated.incorrect, 1);

    let ownership = updated.topic_stats("ownership").unwrap();
    assert_eq!(ownership.correct, 1);
    assert_eq!(ownership.partial, 1);

    let summary = tracker.summary(&session.id).unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.focus.as_deref(), Some("rust"));

    let history = tracker.attempts(&session.id).unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[2].grade_text, "That's wrong");
}

#[test]
fn every_operation_reports_unknown_sessions() {
    let tracker = tracker();
    let not_found = |r: Result<(), MentorError>| {
        assert!(matches!(
            r,
            Err(MentorError::Session(SessionError::SessionNotFound { .. }))
        ));
    };

    not_found(
        tracker
            .record_attempt("ghost", "q", "a", "Correct", "t")
            .map(|_| ()),
    );
    not_found(tracker.summary("ghost").map(|_| ()));
    not_found(tracker.attempts("ghost").map(|_| ()));
    not_found(tracker.weak_areas("ghost").map(|_| ()));
    not_found(tracker.topic_difficulty("ghost", Some("t")).map(|_| ()));
    not_found(tracker.update_schedule("ghost", "t", "Correct").map(|_| ()));
    not_found(tracker.due_topics("ghost", Utc::now()).map(|_| ()));
}

// ── Weak areas ─────────────────────────────────────────────────────────────

#[test]
fn weak_areas_rank_by_missed_attempts() {
    let tracker = tracker();
    let session = tracker.start_session(None).unwrap();

    // A: incorrect 2, partial 1 → score 3. B: partial 1 → score 1.
    for grade in ["Incorrect", "Incorrect", "Partially correct"] {
        tracker
            .record_attempt(&session.id, "q", "a", grade, "A")
            .unwrap();
    }
    tracker
        .record_attempt(&session.id, "q", "a", "Partially correct", "B")
        .unwrap();

    let ranked = tracker.weak_areas(&session.id).unwrap();
    assert_eq!(ranked[0].topic, "A");
    assert_eq!(ranked[0].weakness_score, 3);
    assert_eq!(ranked[1].topic, "B");
    assert_eq!(ranked[1].weakness_score, 1);
}

// ── Difficulty ─────────────────────────────────────────────────────────────

#[test]
fn difficulty_boundaries_are_exercised() {
    let tracker = tracker();
    let session = tracker.start_session(None).unwrap();

    // strength = -1 exactly → Easy.
    tracker
        .record_attempt(&session.id, "q", "a", "Incorrect", "struggling")
        .unwrap();
    assert_eq!(
        tracker
            .topic_difficulty(&session.id, Some("struggling"))
            .unwrap(),
        Difficulty::Easy
    );

    // strength = 2 exactly → Hard.
    tracker
        .record_attempt(&session.id, "q", "a", "Correct", "mastered")
        .unwrap();
    tracker
        .record_attempt(&session.id, "q", "a", "Correct", "mastered")
        .unwrap();
    assert_eq!(
        tracker
            .topic_difficulty(&session.id, Some("mastered"))
            .unwrap(),
        Difficulty::Hard
    );

    // No topic, or no attempts on it → Medium.
    assert_eq!(
        tracker.topic_difficulty(&session.id, None).unwrap(),
        Difficulty::Medium
    );
    assert_eq!(
        tracker
            .topic_difficulty(&session.id, Some("untouched"))
            .unwrap(),
        Difficulty::Medium
    );
}

// ── Scheduling ─────────────────────────────────────────────────────────────

#[test]
fn schedule_walkthrough_matches_sm2_arithmetic() {
    let tracker = tracker();
    let session = tracker.start_session(None).unwrap();

    let schedule = tracker
        .update_schedule(&session.id, "ownership", "Correct")
        .unwrap();
    assert_eq!(schedule.interval_days, 2); // floor(1 * 2.5)
    assert!((schedule.ease_factor.value() - 2.6).abs() < 1e-9);

    let schedule = tracker
        .update_schedule(&session.id, "ownership", "Incorrect")
        .unwrap();
    assert_eq!(schedule.interval_days, 1);
    assert!((schedule.ease_factor.value() - 2.4).abs() < 1e-9);
}

#[test]
fn due_topics_filter_on_next_review_date() {
    let tracker = tracker();
    let session = tracker.start_session(None).unwrap();

    // Correct pushes "ownership" two days out; incorrect keeps
    // "lifetimes" due tomorrow.
    tracker
        .update_schedule(&session.id, "ownership", "Correct")
        .unwrap();
    tracker
        .update_schedule(&session.id, "lifetimes", "Incorrect")
        .unwrap();

    let now = Utc::now();
    assert!(tracker.due_topics(&session.id, now).unwrap().is_empty());

    let due = tracker
        .due_topics(&session.id, now + Duration::days(1))
        .unwrap();
    assert_eq!(due, vec!["lifetimes".to_string()]);

    let mut due = tracker
        .due_topics(&session.id, now + Duration::days(2))
        .unwrap();
    due.sort_unstable();
    assert_eq!(due, vec!["lifetimes".to_string(), "ownership".to_string()]);
}

#[test]
fn sessions_with_no_schedules_have_no_due_topics() {
    let tracker = tracker();
    let session = tracker.start_session(None).unwrap();
    assert!(tracker
        .due_topics(&session.id, Utc::now() + Duration::days(365))
        .unwrap()
        .is_empty());
}
