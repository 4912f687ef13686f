//! Per-habit streak summaries for habit cards and the streak listing.

use serde::Serialize;

use crate::habit::{CheckIn, Habit};

use super::engine::{completion_days, current_streak_from_days, longest_streak_from_days};
use super::milestone::{milestone_for, next_milestone, Milestone};
use super::DayKey;

/// Everything a habit card shows about a streak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    pub habit_id: String,
    /// Live streak as of the evaluation day
    pub current: u32,
    /// Longest streak on record
    pub longest: u32,
    /// Badge earned by the current streak
    pub milestone: Option<Milestone>,
    /// Next badge the current streak is working toward
    pub next_milestone: Option<Milestone>,
    /// The live streak is also the longest one
    pub personal_best: bool,
}

impl StreakSummary {
    /// Compute the summary for one habit, parsing its check-ins once.
    pub fn compute(habit_id: &str, check_ins: &[CheckIn], today: DayKey) -> Self {
        let days = completion_days(habit_id, check_ins);
        let current = current_streak_from_days(&days, today);
        let longest = longest_streak_from_days(&days);

        Self {
            habit_id: habit_id.to_string(),
            current,
            longest,
            milestone: milestone_for(i64::from(current)),
            next_milestone: next_milestone(i64::from(current)),
            personal_best: current > 0 && current == longest,
        }
    }

    /// Days left until the next milestone, if any remains.
    pub fn days_to_next_milestone(&self) -> Option<u32> {
        self.next_milestone
            .map(|milestone| milestone.threshold.saturating_sub(self.current))
    }
}

/// Summaries for every non-archived habit, in the given habit order.
pub fn summarize_habits(
    habits: &[Habit],
    check_ins: &[CheckIn],
    today: DayKey,
) -> Vec<StreakSummary> {
    habits
        .iter()
        .filter(|habit| !habit.is_archived)
        .map(|habit| StreakSummary::compute(&habit.id, check_ins, today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> DayKey {
        DayKey::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn three_day_run_is_a_starter_personal_best() {
        let check_ins = vec![
            CheckIn::new("h1", "2024-01-01", true),
            CheckIn::new("h1", "2024-01-02", true),
            CheckIn::new("h1", "2024-01-03", true),
        ];
        let summary = StreakSummary::compute("h1", &check_ins, day(2024, 1, 4));

        assert_eq!(summary.current, 3);
        assert_eq!(summary.longest, 3);
        assert_eq!(summary.milestone.map(|m| m.label), Some("Starter"));
        assert_eq!(summary.next_milestone.map(|m| m.threshold), Some(7));
        assert_eq!(summary.days_to_next_milestone(), Some(4));
        assert!(summary.personal_best);
    }

    #[test]
    fn broken_streak_is_not_personal_best() {
        let check_ins = vec![
            CheckIn::new("h1", "2024-01-01", true),
            CheckIn::new("h1", "2024-01-02", true),
            CheckIn::new("h1", "2024-01-05", true),
        ];
        let summary = StreakSummary::compute("h1", &check_ins, day(2024, 1, 5));

        assert_eq!(summary.current, 1);
        assert_eq!(summary.longest, 2);
        assert_eq!(summary.milestone, None);
        assert!(!summary.personal_best);
    }

    #[test]
    fn empty_history_has_no_personal_best() {
        let summary = StreakSummary::compute("h1", &[], day(2024, 1, 5));
        assert_eq!(summary.current, 0);
        assert_eq!(summary.longest, 0);
        assert!(!summary.personal_best);
        assert_eq!(summary.days_to_next_milestone(), Some(3));
    }

    #[test]
    fn summarize_skips_archived_habits() {
        let active = Habit::new("Read").unwrap();
        let mut archived = Habit::new("Stretch").unwrap();
        archived.is_archived = true;
        let check_ins = vec![CheckIn::new(&active.id, "2024-01-05", true)];

        let summaries = summarize_habits(&[active.clone(), archived], &check_ins, day(2024, 1, 5));

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].habit_id, active.id);
        assert_eq!(summaries[0].current, 1);
    }
}
