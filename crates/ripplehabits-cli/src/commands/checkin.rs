//! Check-in commands for CLI.

use clap::Subcommand;
use ripplehabits_core::{CheckIn, Database, DayKey, StreakSummary};
use serde::Serialize;

use super::{print_json, CommandResult, Context};

#[derive(Subcommand)]
pub enum CheckinAction {
    /// Toggle completion for a day
    Toggle {
        /// Habit id or name
        habit: String,
        /// Day to toggle (default: today)
        #[arg(long)]
        date: Option<DayKey>,
    },
    /// Set completion for a day explicitly
    Set {
        /// Habit id or name
        habit: String,
        /// Whether the habit was performed
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        completed: bool,
        /// Day to record (default: today)
        #[arg(long)]
        date: Option<DayKey>,
        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Replace the notes for a day, keeping its completion state
    Note {
        /// Habit id or name
        habit: String,
        /// Notes text
        notes: String,
        /// Day to annotate (default: today)
        #[arg(long)]
        date: Option<DayKey>,
    },
    /// List a habit's check-ins
    List {
        /// Habit id or name
        habit: String,
    },
}

#[derive(Serialize)]
struct CheckinOutcome {
    check_in: CheckIn,
    streak: StreakSummary,
}

pub fn run(ctx: &Context, action: CheckinAction) -> CommandResult {
    let db = Database::open()?;

    let check_in = match action {
        CheckinAction::Toggle { habit, date } => {
            let habit = db.find_habit(&habit)?;
            db.toggle_check_in(&habit.id, date.unwrap_or(ctx.today))?
        }
        CheckinAction::Set {
            habit,
            completed,
            date,
            notes,
        } => {
            let habit = db.find_habit(&habit)?;
            let notes = notes.map(|n| n.trim().to_string());
            db.set_check_in(&habit.id, date.unwrap_or(ctx.today), completed, notes)?
        }
        CheckinAction::Note { habit, notes, date } => {
            let habit = db.find_habit(&habit)?;
            db.update_notes(&habit.id, date.unwrap_or(ctx.today), &notes)?
        }
        CheckinAction::List { habit } => {
            let habit = db.find_habit(&habit)?;
            let mut check_ins = db.check_ins_for(&habit.id)?;
            check_ins.sort_by_key(|check_in| check_in.day_key());
            return print_json(ctx, &check_ins);
        }
    };

    let streak = StreakSummary::compute(&check_in.habit_id, &db.check_ins()?, ctx.today);
    print_json(ctx, &CheckinOutcome { check_in, streak })
}
