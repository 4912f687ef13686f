//! Daily completion snapshot and seven-day pulse.

use serde::Serialize;

use crate::habit::{CheckIn, Habit};
use crate::streak::DayKey;

/// Completion figures for a single day across all active habits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HabitStats {
    /// Number of non-archived habits
    pub total_habits: u32,
    /// Active habits with a completed check-in on the day
    pub completed_today: u32,
    /// `completed_today / total_habits` as a rounded percentage (0-100)
    pub completion_rate: u32,
}

impl HabitStats {
    pub fn for_day(habits: &[Habit], check_ins: &[CheckIn], day: DayKey) -> Self {
        let active: Vec<&Habit> = habits.iter().filter(|habit| !habit.is_archived).collect();
        let total_habits = active.len() as u32;
        let completed_today = count_completed(&active, check_ins, day);

        let completion_rate = if total_habits > 0 {
            (f64::from(completed_today) / f64::from(total_habits) * 100.0).round() as u32
        } else {
            0
        };

        Self {
            total_habits,
            completed_today,
            completion_rate,
        }
    }
}

/// One bar of the seven-day pulse chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPulse {
    pub date: DayKey,
    /// Abbreviated weekday, e.g. `Mon`
    pub label: String,
    /// Active habits completed on `date`
    pub done_count: u32,
}

/// Completed-habit counts for the seven days ending at `today`, oldest first.
pub fn weekly_pulse(habits: &[Habit], check_ins: &[CheckIn], today: DayKey) -> Vec<DayPulse> {
    let active: Vec<&Habit> = habits.iter().filter(|habit| !habit.is_archived).collect();

    (0..7i64)
        .rev()
        .filter_map(|back| today.offset(-back))
        .map(|date| DayPulse {
            date,
            label: date.date().format("%a").to_string(),
            done_count: count_completed(&active, check_ins, date),
        })
        .collect()
}

/// Habits due on `day`, in their stored order.
pub fn scheduled_on(habits: &[Habit], day: DayKey) -> Vec<&Habit> {
    habits
        .iter()
        .filter(|habit| habit.is_scheduled_on(day))
        .collect()
}

fn count_completed(habits: &[&Habit], check_ins: &[CheckIn], day: DayKey) -> u32 {
    habits
        .iter()
        .filter(|habit| {
            check_ins
                .iter()
                .any(|check_in| check_in.completed && check_in.is_for(&habit.id, day))
        })
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::{FrequencyType, Weekday};

    fn day(y: i32, m: u32, d: u32) -> DayKey {
        DayKey::from_ymd(y, m, d).unwrap()
    }

    fn habits() -> Vec<Habit> {
        vec![
            Habit::new("Read").unwrap(),
            Habit::new("Run").unwrap(),
            Habit::new("Meditate").unwrap(),
        ]
    }

    #[test]
    fn empty_habit_list_has_zero_rate() {
        let stats = HabitStats::for_day(&[], &[], day(2024, 1, 1));
        assert_eq!(stats, HabitStats::default());
    }

    #[test]
    fn completion_rate_is_rounded_percentage() {
        let habits = habits();
        let check_ins = vec![
            CheckIn::new(&habits[0].id, "2024-01-04", true),
            CheckIn::new(&habits[0].id, "2024-01-04", true),
            CheckIn::new(&habits[1].id, "2024-01-04", false),
            CheckIn::new(&habits[2].id, "2024-01-03", true),
        ];
        let stats = HabitStats::for_day(&habits, &check_ins, day(2024, 1, 4));

        assert_eq!(stats.total_habits, 3);
        assert_eq!(stats.completed_today, 1);
        assert_eq!(stats.completion_rate, 33);
    }

    #[test]
    fn archived_habits_are_excluded() {
        let mut habits = habits();
        habits[1].is_archived = true;
        let check_ins = vec![
            CheckIn::new(&habits[0].id, "2024-01-04", true),
            CheckIn::new(&habits[1].id, "2024-01-04", true),
        ];
        let stats = HabitStats::for_day(&habits, &check_ins, day(2024, 1, 4));

        assert_eq!(stats.total_habits, 2);
        assert_eq!(stats.completed_today, 1);
        assert_eq!(stats.completion_rate, 50);
    }

    #[test]
    fn weekly_pulse_covers_seven_days_oldest_first() {
        let habits = habits();
        let check_ins = vec![
            CheckIn::new(&habits[0].id, "2024-01-04", true),
            CheckIn::new(&habits[1].id, "2024-01-04", true),
            CheckIn::new(&habits[0].id, "2023-12-29", true),
            CheckIn::new(&habits[0].id, "2023-12-28", true),
        ];
        let pulse = weekly_pulse(&habits, &check_ins, day(2024, 1, 4));

        assert_eq!(pulse.len(), 7);
        assert_eq!(pulse[0].date, day(2023, 12, 29));
        assert_eq!(pulse[0].done_count, 1);
        assert_eq!(pulse[6].date, day(2024, 1, 4));
        assert_eq!(pulse[6].label, "Thu");
        assert_eq!(pulse[6].done_count, 2);
        assert_eq!(pulse.iter().map(|p| p.done_count).sum::<u32>(), 3);
    }

    #[test]
    fn scheduled_on_respects_frequency() {
        let gym = Habit::new("Gym")
            .unwrap()
            .with_frequency(FrequencyType::Weekly, vec![Weekday::Tuesday]);
        let read = Habit::new("Read").unwrap();
        let habits = vec![gym, read];

        // 2024-01-01 was a Monday
        let due = scheduled_on(&habits, day(2024, 1, 1));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].name, "Read");
        assert_eq!(scheduled_on(&habits, day(2024, 1, 2)).len(), 2);
    }
}
