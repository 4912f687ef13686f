//! Milestone badges awarded for streak lengths.

use serde::Serialize;

/// A named badge earned once a streak reaches `threshold` days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub threshold: u32,
    pub label: &'static str,
}

/// The milestone ladder, strictly ascending by threshold.
pub const MILESTONES: [Milestone; 7] = [
    Milestone {
        threshold: 3,
        label: "Starter",
    },
    Milestone {
        threshold: 7,
        label: "On a roll",
    },
    Milestone {
        threshold: 14,
        label: "Committed",
    },
    Milestone {
        threshold: 30,
        label: "Momentum",
    },
    Milestone {
        threshold: 60,
        label: "Dedicated",
    },
    Milestone {
        threshold: 100,
        label: "Centurion",
    },
    Milestone {
        threshold: 365,
        label: "Legend",
    },
];

/// Highest milestone whose threshold does not exceed `streak`.
///
/// Returns `None` for streaks of zero, negative streaks, and streaks below
/// the first threshold.
pub fn milestone_for(streak: i64) -> Option<Milestone> {
    if streak <= 0 {
        return None;
    }
    MILESTONES
        .iter()
        .rev()
        .find(|milestone| i64::from(milestone.threshold) <= streak)
        .copied()
}

/// [`milestone_for`] over an untyped number.
///
/// NaN, infinities and values `<= 0` yield `None`; fractions are truncated.
pub fn milestone_for_value(streak: f64) -> Option<Milestone> {
    if !streak.is_finite() || streak <= 0.0 {
        return None;
    }
    milestone_for(streak.trunc() as i64)
}

/// The next milestone still to be earned, or `None` past the top of the ladder.
pub fn next_milestone(streak: i64) -> Option<Milestone> {
    MILESTONES
        .iter()
        .find(|milestone| i64::from(milestone.threshold) > streak)
        .copied()
}
