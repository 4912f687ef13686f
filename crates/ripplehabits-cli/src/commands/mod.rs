pub mod checkin;
pub mod config;
pub mod habit;
pub mod stats;
pub mod streak;

use ripplehabits_core::{Config, DayKey};
use serde::Serialize;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Per-invocation settings shared by all commands.
pub struct Context {
    /// Day streaks and check-ins are evaluated against
    pub today: DayKey,
    pub compact: bool,
    pub config: Config,
}

/// Print `value` as JSON on stdout, compact or pretty per preferences.
pub fn print_json<T: Serialize + ?Sized>(ctx: &Context, value: &T) -> CommandResult {
    let out = if ctx.compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{out}");
    Ok(())
}
