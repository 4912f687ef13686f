use clap::Subcommand;
use ripplehabits_core::stats::{scheduled_on, weekly_pulse, DayPulse, HabitStats};
use ripplehabits_core::{Database, DayKey};
use serde::Serialize;

use super::{print_json, CommandResult, Context};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's completion snapshot and due habits
    Today,
    /// Completed habits per day over the last seven days
    Week,
}

#[derive(Serialize)]
struct DueHabit<'a> {
    id: &'a str,
    name: &'a str,
    completed: bool,
}

#[derive(Serialize)]
struct TodayReport<'a> {
    date: DayKey,
    #[serde(flatten)]
    stats: HabitStats,
    due: Vec<DueHabit<'a>>,
}

#[derive(Serialize)]
struct WeekReport {
    from: Option<DayKey>,
    to: DayKey,
    days: Vec<DayPulse>,
}

pub fn run(ctx: &Context, action: StatsAction) -> CommandResult {
    let db = Database::open()?;
    let habits = db.habits()?;
    let check_ins = db.check_ins()?;

    match action {
        StatsAction::Today => {
            let due = scheduled_on(&habits, ctx.today)
                .into_iter()
                .map(|habit| DueHabit {
                    id: &habit.id,
                    name: &habit.name,
                    completed: check_ins
                        .iter()
                        .any(|c| c.completed && c.is_for(&habit.id, ctx.today)),
                })
                .collect();
            let report = TodayReport {
                date: ctx.today,
                stats: HabitStats::for_day(&habits, &check_ins, ctx.today),
                due,
            };
            print_json(ctx, &report)?;
        }
        StatsAction::Week => {
            let days = weekly_pulse(&habits, &check_ins, ctx.today);
            let report = WeekReport {
                from: days.first().map(|pulse| pulse.date),
                to: ctx.today,
                days,
            };
            print_json(ctx, &report)?;
        }
    }
    Ok(())
}
