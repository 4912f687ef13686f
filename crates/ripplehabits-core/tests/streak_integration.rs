//! Integration tests for streak tracking.
//!
//! Exercises the full path from recording check-ins in storage to computing
//! streaks, milestones and daily statistics.

use ripplehabits_core::streak::summarize_habits;
use ripplehabits_core::{
    current_streak, longest_streak, milestone_for, weekly_pulse, CheckIn, Database, DayKey, Habit,
    HabitStats, StreakSummary,
};

fn day(y: i32, m: u32, d: u32) -> DayKey {
    DayKey::from_ymd(y, m, d).unwrap()
}

#[test]
fn test_three_day_run_with_grace_period() {
    let db = Database::open_memory().unwrap();
    let habit = db.add_habit(Habit::new("Read").unwrap()).unwrap();

    for d in 1..=3 {
        db.toggle_check_in(&habit.id, day(2024, 1, d)).unwrap();
    }

    let check_ins = db.check_ins().unwrap();
    let today = day(2024, 1, 4);

    assert_eq!(current_streak(&habit.id, &check_ins, today), 3);
    assert_eq!(longest_streak(&habit.id, &check_ins), 3);

    let milestone = milestone_for(3).unwrap();
    assert_eq!(milestone.threshold, 3);
    assert_eq!(milestone.label, "Starter");
}

#[test]
fn test_gap_then_single_day() {
    let db = Database::open_memory().unwrap();
    let habit = db.add_habit(Habit::new("Run").unwrap()).unwrap();

    for d in [1, 2, 3, 5] {
        db.set_check_in(&habit.id, day(2024, 3, d), true, None).unwrap();
    }

    let check_ins = db.check_ins().unwrap();
    let summary = StreakSummary::compute(&habit.id, &check_ins, day(2024, 3, 6));

    assert_eq!(summary.longest, 3);
    assert_eq!(summary.current, 1);
    assert_eq!(summary.milestone, None);
}

#[test]
fn test_untoggling_today_falls_back_to_yesterday() {
    let db = Database::open_memory().unwrap();
    let habit = db.add_habit(Habit::new("Stretch").unwrap()).unwrap();

    for d in 1..=7 {
        db.toggle_check_in(&habit.id, day(2024, 5, d)).unwrap();
    }
    let today = day(2024, 5, 7);
    let check_ins = db.check_ins().unwrap();
    let summary = StreakSummary::compute(&habit.id, &check_ins, today);
    assert_eq!(summary.current, 7);
    assert_eq!(summary.milestone.map(|m| m.label), Some("On a roll"));

    // Un-checking today leaves the run through yesterday live
    db.toggle_check_in(&habit.id, today).unwrap();
    let check_ins = db.check_ins().unwrap();
    assert_eq!(current_streak(&habit.id, &check_ins, today), 6);
    assert_eq!(longest_streak(&habit.id, &check_ins), 6);
    assert_eq!(milestone_for(6).map(|m| m.label), Some("Starter"));
}

#[test]
fn test_legacy_records_with_timestamps_and_bad_dates() {
    let db = Database::open_memory().unwrap();
    let habit = db.add_habit(Habit::new("Journal").unwrap()).unwrap();

    db.save_check_ins(&[
        CheckIn::new(&habit.id, "2024-02-10T07:30:00Z", true),
        CheckIn::new(&habit.id, "2024-02-11", false),
        CheckIn::new(&habit.id, "2024-02-11T20:00:00Z", true),
        CheckIn::new(&habit.id, "sometime in february", true),
        CheckIn::new(&habit.id, "2024-02-12T06:00:00", true),
    ])
    .unwrap();

    let check_ins = db.check_ins().unwrap();
    assert_eq!(current_streak(&habit.id, &check_ins, day(2024, 2, 12)), 3);
    assert_eq!(longest_streak(&habit.id, &check_ins), 3);
}

#[test]
fn test_empty_history() {
    let db = Database::open_memory().unwrap();
    let habit = db.add_habit(Habit::new("Floss").unwrap()).unwrap();

    let check_ins = db.check_ins().unwrap();
    assert_eq!(current_streak(&habit.id, &check_ins, day(2024, 1, 1)), 0);
    assert_eq!(longest_streak(&habit.id, &check_ins), 0);
    assert_eq!(milestone_for(0), None);
}

#[test]
fn test_dashboard_views_share_the_same_check_ins() {
    let db = Database::open_memory().unwrap();
    let read = db.add_habit(Habit::new("Read").unwrap()).unwrap();
    let run = db.add_habit(Habit::new("Run").unwrap()).unwrap();
    let old = db.add_habit(Habit::new("Old habit").unwrap()).unwrap();
    db.archive_habit(&old.id).unwrap();

    let today = day(2024, 1, 4);
    for d in 1..=4 {
        db.toggle_check_in(&read.id, day(2024, 1, d)).unwrap();
    }
    db.toggle_check_in(&run.id, day(2024, 1, 2)).unwrap();

    let habits = db.habits().unwrap();
    let check_ins = db.check_ins().unwrap();

    let summaries = summarize_habits(&habits, &check_ins, today);
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].current, 4);
    assert!(summaries[0].personal_best);
    assert_eq!(summaries[1].current, 0);
    assert_eq!(summaries[1].longest, 1);

    let stats = HabitStats::for_day(&habits, &check_ins, today);
    assert_eq!(stats.total_habits, 2);
    assert_eq!(stats.completed_today, 1);
    assert_eq!(stats.completion_rate, 50);

    let pulse = weekly_pulse(&habits, &check_ins, today);
    let counts: Vec<u32> = pulse.iter().map(|p| p.done_count).collect();
    assert_eq!(counts, vec![0, 0, 0, 1, 2, 1, 1]);
}
