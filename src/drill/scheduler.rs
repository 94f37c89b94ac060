//! 固定间隔表的复习调度：答对按连对次数查表推进，答错次日重来。
//!
//! The table caps at seven days; there is no ease factor and no growth past
//! the last step.

use chrono::{Days, NaiveDate};

use crate::drill::types::ProgressRecord;

/// `(streak, days)` pairs; any streak past the last entry uses [`MAX_INTERVAL_DAYS`].
pub const INTERVAL_TABLE: &[(u32, u64)] = &[(1, 1), (2, 2), (3, 4)];
pub const MAX_INTERVAL_DAYS: u64 = 7;
pub const RETRY_INTERVAL_DAYS: u64 = 1;

pub fn interval_for_streak(streak: u32) -> u64 {
    INTERVAL_TABLE
        .iter()
        .find(|(s, _)| *s == streak)
        .map(|(_, days)| *days)
        .unwrap_or(MAX_INTERVAL_DAYS)
}

/// True iff `next_review <= today`. Overdue words carry no extra weight.
pub fn is_due(record: &ProgressRecord, today: NaiveDate) -> bool {
    record.next_review <= today
}

/// New state after one scored answer. Intervals always count from `today`,
/// never from the missed due date.
pub fn update(record: &ProgressRecord, correct: bool, today: NaiveDate) -> ProgressRecord {
    if correct {
        let streak = record.streak.saturating_add(1);
        ProgressRecord {
            next_review: add_days(today, interval_for_streak(streak)),
            streak,
            wrong_count: record.wrong_count,
        }
    } else {
        ProgressRecord {
            next_review: add_days(today, RETRY_INTERVAL_DAYS),
            streak: 0,
            wrong_count: record.wrong_count.saturating_add(1),
        }
    }
}

fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn interval_table_caps_at_seven_days() {
        assert_eq!(interval_for_streak(1), 1);
        assert_eq!(interval_for_streak(2), 2);
        assert_eq!(interval_for_streak(3), 4);
        assert_eq!(interval_for_streak(4), 7);
        assert_eq!(interval_for_streak(40), 7);
    }

    #[test]
    fn four_correct_answers_follow_one_two_four_seven() {
        let mut record = ProgressRecord::fresh(day(2024, 1, 1));
        let mut seen = Vec::new();
        let mut today = day(2024, 1, 1);
        for _ in 0..4 {
            assert!(is_due(&record, today));
            record = update(&record, true, today);
            seen.push(record.next_review);
            today = record.next_review;
        }
        assert_eq!(
            seen,
            vec![day(2024, 1, 2), day(2024, 1, 4), day(2024, 1, 8), day(2024, 1, 15)]
        );
        assert_eq!(record.streak, 4);
        assert_eq!(record.wrong_count, 0);
    }

    #[test]
    fn wrong_answer_after_streak_three_resets() {
        let today = day(2024, 3, 10);
        let record = ProgressRecord {
            next_review: today,
            streak: 3,
            wrong_count: 0,
        };
        let next = update(&record, false, today);
        assert_eq!(next.streak, 0);
        assert_eq!(next.wrong_count, 1);
        assert_eq!(next.next_review, day(2024, 3, 11));
    }

    #[test]
    fn overdue_word_schedules_from_today() {
        let record = ProgressRecord {
            next_review: day(2023, 6, 1),
            streak: 1,
            wrong_count: 2,
        };
        let today = day(2024, 1, 1);
        assert!(is_due(&record, today));
        let next = update(&record, true, today);
        assert_eq!(next.next_review, day(2024, 1, 3));
        assert_eq!(next.wrong_count, 2);
    }

    #[test]
    fn future_review_is_not_due() {
        let record = ProgressRecord::fresh(day(2024, 1, 2));
        assert!(!is_due(&record, day(2024, 1, 1)));
        assert!(is_due(&record, day(2024, 1, 2)));
    }
}
