//! # RippleHabits Core Library
//!
//! This library provides the core logic for the RippleHabits habit tracker.
//! The CLI binary is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Streak Engine**: pure functions turning a habit's check-in history into
//!   current and longest streaks plus milestone badges. "Today" is always
//!   passed in; the engine never reads the clock or storage.
//! - **Habit model**: habits, check-ins and their scheduling rules
//! - **Statistics**: daily completion snapshot and seven-day pulse
//! - **Storage**: SQLite key-value collections and TOML preferences
//!
//! ## Key Components
//!
//! - [`current_streak`], [`longest_streak`], [`milestone_for`]: the streak contract
//! - [`StreakSummary`]: everything a habit card shows about a streak
//! - [`Database`]: habit and check-in persistence
//! - [`Config`]: user preferences

pub mod error;
pub mod habit;
pub mod stats;
pub mod storage;
pub mod streak;

pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use habit::{ArchiveFilter, CheckIn, FrequencyType, Habit, HabitCategory, Weekday};
pub use stats::{weekly_pulse, DayPulse, HabitStats};
pub use storage::{Config, Database};
pub use streak::{
    current_streak, longest_streak, milestone_for, summarize_habits, DayKey, Milestone,
    StreakSummary,
};
