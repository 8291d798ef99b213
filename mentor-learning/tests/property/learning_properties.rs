use chrono::{TimeZone, Utc};
use mentor_core::config::SchedulerConfig;
use mentor_core::models::{EaseFactor, Outcome, ReviewSchedule, SessionRecord};
use proptest::prelude::*;

fn outcome_strategy() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        Just(Outcome::Correct),
        Just(Outcome::Partial),
        Just(Outcome::Incorrect),
    ]
}

proptest! {
    #[test]
    fn counters_always_sum_up(
        attempts in prop::collection::vec((0usize..3, outcome_strategy()), 0..40)
    ) {
        let topics = ["ownership", "lifetimes", "traits"];
        let mut session = SessionRecord::new(None);
        for (topic_idx, outcome) in attempts {
            session.record(topics[topic_idx], outcome);
        }

        prop_assert_eq!(
            session.total,
            session.correct + session.partial + session.incorrect
        );
        let topic_total: u64 = session.topics.iter().map(|(_, s)| s.attempts()).sum();
        prop_assert_eq!(topic_total, session.total);
        for (_, stats) in &session.topics {
            prop_assert_eq!(stats.attempts(), stats.correct + stats.partial + stats.incorrect);
        }
    }

    #[test]
    fn schedule_invariants_hold_for_any_grade_sequence(
        outcomes in prop::collection::vec(outcome_strategy(), 1..30)
    ) {
        let config = SchedulerConfig::default();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let mut schedule = ReviewSchedule::fresh("s1", "ownership", now, &config);

        for outcome in outcomes {
            schedule.advance(outcome, now, &config);
            prop_assert!(schedule.interval_days >= 1);
            prop_assert!(schedule.ease_factor.value() >= EaseFactor::MIN);
            prop_assert!(schedule.ease_factor.value() <= EaseFactor::MAX);
            prop_assert!(schedule.next_review_at > now);
        }
    }

    #[test]
    fn incorrect_always_resets_to_daily_review(
        outcomes in prop::collection::vec(outcome_strategy(), 0..20)
    ) {
        let config = SchedulerConfig::default();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let mut schedule = ReviewSchedule::fresh("s1", "traits", now, &config);

        for outcome in outcomes {
            schedule.advance(outcome, now, &config);
        }
        schedule.advance(Outcome::Incorrect, now, &config);
        prop_assert_eq!(schedule.interval_days, 1);
    }
}
