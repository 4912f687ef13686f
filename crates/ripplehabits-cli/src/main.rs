use clap::{Parser, Subcommand};
use ripplehabits_core::{Config, DayKey};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "ripplehabits", version, about = "RippleHabits CLI")]
struct Cli {
    /// Evaluate as if today were this date (YYYY-MM-DD, default: current UTC date)
    #[arg(long, global = true)]
    today: Option<DayKey>,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Daily check-ins
    Checkin {
        #[command(subcommand)]
        action: commands::checkin::CheckinAction,
    },
    /// Streaks and milestones
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Completion statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let config = Config::load_or_default();
    let ctx = commands::Context {
        today: cli.today.unwrap_or_else(DayKey::today_utc),
        compact: config.preferences.compact_mode,
        config,
    };
    tracing::debug!(today = %ctx.today, "evaluating");

    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(&ctx, action),
        Commands::Checkin { action } => commands::checkin::run(&ctx, action),
        Commands::Streak { action } => commands::streak::run(&ctx, action),
        Commands::Stats { action } => commands::stats::run(&ctx, action),
        Commands::Config { action } => commands::config::run(&ctx, action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
