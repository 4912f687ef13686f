//! Current and longest streak computation.
//!
//! All functions are pure: they borrow the caller's check-ins, take "today"
//! as an argument and never touch storage or the clock.

use std::collections::BTreeSet;

use crate::habit::CheckIn;

use super::DayKey;

/// Sorted, de-duplicated days on which `habit_id` was completed.
///
/// Records for other habits are skipped. Records whose date cannot be parsed
/// are dropped. A day counts as completed if any of its records is.
pub fn completion_days(habit_id: &str, check_ins: &[CheckIn]) -> Vec<DayKey> {
    check_ins
        .iter()
        .filter(|check_in| check_in.habit_id == habit_id)
        .filter_map(|check_in| match DayKey::parse(&check_in.date) {
            Some(day) => Some((day, check_in.completed)),
            None => {
                tracing::trace!(
                    habit_id,
                    date = %check_in.date,
                    "skipping check-in with unparsable date"
                );
                None
            }
        })
        .fold(BTreeSet::new(), |mut days, (day, completed)| {
            if completed {
                days.insert(day);
            }
            days
        })
        .into_iter()
        .collect()
}

/// Length of the live streak for `habit_id` as of `today`.
///
/// A streak is live when `today` or the day before is completed; it is
/// counted backward from the latest of the two.
pub fn current_streak(habit_id: &str, check_ins: &[CheckIn], today: DayKey) -> u32 {
    current_streak_from_days(&completion_days(habit_id, check_ins), today)
}

/// Longest run of consecutive completed days ever recorded for `habit_id`.
pub fn longest_streak(habit_id: &str, check_ins: &[CheckIn]) -> u32 {
    longest_streak_from_days(&completion_days(habit_id, check_ins))
}

/// [`current_streak`] over a sorted completion-day list.
pub fn current_streak_from_days(days: &[DayKey], today: DayKey) -> u32 {
    let completed = |day: &DayKey| days.binary_search(day).is_ok();

    let anchor = if completed(&today) {
        today
    } else {
        match today.previous() {
            Some(yesterday) if completed(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    let mut cursor = Some(anchor);
    while let Some(day) = cursor.filter(|day| completed(day)) {
        streak += 1;
        cursor = day.previous();
    }
    streak
}

/// [`longest_streak`] over a sorted completion-day list.
pub fn longest_streak_from_days(days: &[DayKey]) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<DayKey> = None;

    for &day in days {
        run = match previous {
            Some(prev) if prev.days_until(day) == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }
    longest
}
