//! Habit management commands for CLI.

use clap::Subcommand;
use ripplehabits_core::{
    ArchiveFilter, Database, FrequencyType, Habit, HabitCategory, StreakSummary, Weekday,
};
use serde::Serialize;

use super::{print_json, CommandResult, Context};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Add {
        /// Habit name
        name: String,
        /// Longer description
        #[arg(long)]
        description: Option<String>,
        /// Category: health, fitness, mindfulness, productivity, learning,
        /// relationships, finance or custom
        #[arg(long, default_value = "custom")]
        category: HabitCategory,
        /// Frequency: daily, weekly, monthly or custom
        #[arg(long, default_value = "daily")]
        frequency: FrequencyType,
        /// Comma-separated target weekdays for weekly/custom habits (e.g. mon,thu)
        #[arg(long, value_delimiter = ',')]
        days: Vec<Weekday>,
        /// Display colour (default: preferences.default_habit_color)
        #[arg(long)]
        color: Option<String>,
    },
    /// List habits
    List {
        /// Archive state: active, archived or all
        #[arg(long, default_value = "active")]
        status: ArchiveFilter,
        /// Only habits in this category
        #[arg(long)]
        category: Option<HabitCategory>,
    },
    /// Change a habit's details
    Edit {
        /// Habit id or name
        habit: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<HabitCategory>,
        /// New frequency
        #[arg(long)]
        frequency: Option<FrequencyType>,
        /// Comma-separated target weekdays (replaces the current set)
        #[arg(long, value_delimiter = ',')]
        days: Option<Vec<Weekday>>,
        /// New display colour
        #[arg(long)]
        color: Option<String>,
    },
    /// Show a habit with its streak
    Show {
        /// Habit id or name
        habit: String,
    },
    /// Archive a habit (keeps its check-ins)
    Archive {
        /// Habit id or name
        habit: String,
    },
    /// Return an archived habit to the active list
    Unarchive {
        /// Habit id or name
        habit: String,
    },
    /// Delete a habit and its check-ins
    Remove {
        /// Habit id or name
        habit: String,
    },
}

#[derive(Serialize)]
struct HabitDetail {
    habit: Habit,
    streak: StreakSummary,
    check_in_count: usize,
}

pub fn run(ctx: &Context, action: HabitAction) -> CommandResult {
    let db = Database::open()?;

    match action {
        HabitAction::Add {
            name,
            description,
            category,
            frequency,
            days,
            color,
        } => {
            let color = color.unwrap_or_else(|| ctx.config.preferences.default_habit_color.clone());
            let mut habit = Habit::new(&name)?
                .with_category(category)
                .with_frequency(frequency, days)
                .with_color(&color);
            if let Some(description) = description {
                habit = habit.with_description(&description);
            }

            let habit = db.add_habit(habit)?;
            eprintln!("Habit created: {}", habit.id);
            print_json(ctx, &habit)?;
        }
        HabitAction::List { status, category } => {
            let habits: Vec<Habit> = db
                .habits()?
                .into_iter()
                .filter(|habit| status.matches(habit))
                .filter(|habit| category.map_or(true, |c| habit.category == c))
                .collect();
            print_json(ctx, &habits)?;
        }
        HabitAction::Edit {
            habit,
            name,
            description,
            category,
            frequency,
            days,
            color,
        } => {
            let mut habit = db.find_habit(&habit)?;

            if let Some(n) = name {
                habit.rename(&n)?;
            }
            if let Some(d) = description {
                habit.description = d.trim().to_string();
            }
            if let Some(c) = category {
                habit.category = c;
            }
            if let Some(f) = frequency {
                habit.frequency_type = f;
            }
            if let Some(d) = days {
                habit.target_days = d;
            }
            if let Some(c) = color {
                habit.color = c;
            }

            let updated = db.update_habit(&habit)?;
            eprintln!("Habit updated: {}", updated.id);
            print_json(ctx, &updated)?;
        }
        HabitAction::Show { habit } => {
            let habit = db.find_habit(&habit)?;
            let check_ins = db.check_ins()?;
            let detail = HabitDetail {
                streak: StreakSummary::compute(&habit.id, &check_ins, ctx.today),
                check_in_count: check_ins.iter().filter(|c| c.habit_id == habit.id).count(),
                habit,
            };
            print_json(ctx, &detail)?;
        }
        HabitAction::Archive { habit } => {
            let habit = db.find_habit(&habit)?;
            let archived = db.archive_habit(&habit.id)?;
            eprintln!("Habit archived: {}", archived.id);
            print_json(ctx, &archived)?;
        }
        HabitAction::Unarchive { habit } => {
            let habit = db.find_habit(&habit)?;
            let restored = db.unarchive_habit(&habit.id)?;
            eprintln!("Habit unarchived: {}", restored.id);
            print_json(ctx, &restored)?;
        }
        HabitAction::Remove { habit } => {
            let habit = db.find_habit(&habit)?;
            let removed = db.remove_habit(&habit.id)?;
            eprintln!("Habit deleted: {}", removed.id);
        }
    }
    Ok(())
}
