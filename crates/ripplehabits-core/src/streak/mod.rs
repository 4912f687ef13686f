//! Streak engine.
//!
//! Turns a habit's check-in history into the current streak, the longest
//! streak and the milestone badge for a streak length. Nothing here performs
//! I/O or reads the clock; callers pass "today" explicitly.

mod day_key;
mod engine;
mod milestone;
mod summary;

pub use day_key::DayKey;
pub use engine::{
    completion_days, current_streak, current_streak_from_days, longest_streak,
    longest_streak_from_days,
};
pub use milestone::{milestone_for, milestone_for_value, next_milestone, Milestone, MILESTONES};
pub use summary::{summarize_habits, StreakSummary};
