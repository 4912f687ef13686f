use clap::Subcommand;
use ripplehabits_core::streak::{milestone_for_value, summarize_habits};
use ripplehabits_core::{Database, StreakSummary};
use serde::Serialize;

use super::{print_json, CommandResult, Context};

#[derive(Subcommand)]
pub enum StreakAction {
    /// Current and longest streak for one habit
    Show {
        /// Habit id or name
        habit: String,
    },
    /// Streaks for every active habit
    All,
    /// Milestone badge earned by a streak length
    Milestone {
        /// Streak length in days
        #[arg(allow_negative_numbers = true)]
        streak: f64,
    },
}

#[derive(Serialize)]
struct NamedStreak<'a> {
    name: &'a str,
    #[serde(flatten)]
    streak: StreakSummary,
}

pub fn run(ctx: &Context, action: StreakAction) -> CommandResult {
    match action {
        StreakAction::Show { habit } => {
            let db = Database::open()?;
            let habit = db.find_habit(&habit)?;
            let streak = StreakSummary::compute(&habit.id, &db.check_ins()?, ctx.today);
            print_json(ctx, &NamedStreak { name: &habit.name, streak })?;
        }
        StreakAction::All => {
            let db = Database::open()?;
            let habits = db.habits()?;
            let summaries = summarize_habits(&habits, &db.check_ins()?, ctx.today);
            let named: Vec<NamedStreak<'_>> = summaries
                .into_iter()
                .filter_map(|streak| {
                    let habit = habits.iter().find(|h| h.id == streak.habit_id)?;
                    Some(NamedStreak { name: &habit.name, streak })
                })
                .collect();
            print_json(ctx, &named)?;
        }
        StreakAction::Milestone { streak } => {
            print_json(ctx, &milestone_for_value(streak))?;
        }
    }
    Ok(())
}
