//! Statistics module for RippleHabits
//!
//! Aggregate views over habits and check-ins: the daily completion snapshot,
//! the seven-day pulse and the list of habits due on a given day.

mod snapshot;

pub use snapshot::{scheduled_on, weekly_pulse, DayPulse, HabitStats};
