//! Habit and check-in data model.
//!
//! JSON field names are camelCase so stored collections keep the shape the
//! habit tracker has always written.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::streak::DayKey;

/// Colour used when neither the caller nor the preferences supply one.
pub const DEFAULT_HABIT_COLOR: &str = "#6366f1";

/// Broad grouping shown on habit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    Health,
    Fitness,
    Mindfulness,
    Productivity,
    Learning,
    Relationships,
    Finance,
    #[default]
    Custom,
}

/// How often a habit is expected to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyType {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

fn unknown_value(field: &str, value: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        message: format!("unknown value '{value}'"),
    }
}

impl FromStr for HabitCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "health" => Ok(HabitCategory::Health),
            "fitness" => Ok(HabitCategory::Fitness),
            "mindfulness" => Ok(HabitCategory::Mindfulness),
            "productivity" => Ok(HabitCategory::Productivity),
            "learning" => Ok(HabitCategory::Learning),
            "relationships" => Ok(HabitCategory::Relationships),
            "finance" => Ok(HabitCategory::Finance),
            "custom" => Ok(HabitCategory::Custom),
            _ => Err(unknown_value("category", s)),
        }
    }
}

impl FromStr for FrequencyType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(FrequencyType::Daily),
            "weekly" => Ok(FrequencyType::Weekly),
            "monthly" => Ok(FrequencyType::Monthly),
            "custom" => Ok(FrequencyType::Custom),
            _ => Err(unknown_value("frequency", s)),
        }
    }
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl FromStr for Weekday {
    type Err = ValidationError;

    /// Accepts full names and three-letter abbreviations, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Weekday::Monday),
            "tuesday" | "tue" => Ok(Weekday::Tuesday),
            "wednesday" | "wed" => Ok(Weekday::Wednesday),
            "thursday" | "thu" => Ok(Weekday::Thursday),
            "friday" | "fri" => Ok(Weekday::Friday),
            "saturday" | "sat" => Ok(Weekday::Saturday),
            "sunday" | "sun" => Ok(Weekday::Sunday),
            _ => Err(unknown_value("weekday", s)),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which habits a listing shows, by archive state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArchiveFilter {
    #[default]
    Active,
    Archived,
    All,
}

impl ArchiveFilter {
    pub fn matches(self, habit: &Habit) -> bool {
        match self {
            ArchiveFilter::Active => !habit.is_archived,
            ArchiveFilter::Archived => habit.is_archived,
            ArchiveFilter::All => true,
        }
    }
}

impl FromStr for ArchiveFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ArchiveFilter::Active),
            "archived" => Ok(ArchiveFilter::Archived),
            "all" => Ok(ArchiveFilter::All),
            _ => Err(unknown_value("status", s)),
        }
    }
}

/// A tracked habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: HabitCategory,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub frequency_type: FrequencyType,
    /// Weekdays a weekly or custom habit is due; empty means every day
    #[serde(default)]
    pub target_days: Vec<Weekday>,
    pub created_date: String,
    #[serde(default)]
    pub is_archived: bool,
}

fn default_color() -> String {
    DEFAULT_HABIT_COLOR.to_string()
}

impl Habit {
    /// Create a daily habit named `name` (trimmed).
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyName`] when the trimmed name is empty.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: String::new(),
            category: HabitCategory::default(),
            color: default_color(),
            icon: String::new(),
            frequency_type: FrequencyType::default(),
            target_days: Vec::new(),
            created_date: Utc::now().to_rfc3339(),
            is_archived: false,
        })
    }

    /// Replace the name, rejecting one that is empty after trimming.
    pub fn rename(&mut self, name: &str) -> Result<(), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        self.name = name.to_string();
        Ok(())
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.trim().to_string();
        self
    }

    pub fn with_category(mut self, category: HabitCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    pub fn with_frequency(mut self, frequency: FrequencyType, target_days: Vec<Weekday>) -> Self {
        self.frequency_type = frequency;
        self.target_days = target_days;
        self
    }

    /// Whether the habit is due on `day`.
    ///
    /// Monthly habits fall due on the day of the month they were created;
    /// weekly and custom habits on their target weekdays (every day if none).
    pub fn is_scheduled_on(&self, day: DayKey) -> bool {
        if self.is_archived {
            return false;
        }

        match self.frequency_type {
            FrequencyType::Daily => true,
            FrequencyType::Monthly => DayKey::parse(&self.created_date)
                .is_some_and(|created| created.day_of_month() == day.day_of_month()),
            FrequencyType::Weekly | FrequencyType::Custom => {
                self.target_days.is_empty()
                    || self.target_days.contains(&Weekday::from(day.weekday()))
            }
        }
    }
}

/// Whether a habit was performed on a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub habit_id: String,
    /// Day the check-in pertains to (ISO date or timestamp)
    pub date: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CheckIn {
    pub fn new(habit_id: impl Into<String>, date: impl Into<String>, completed: bool) -> Self {
        Self {
            habit_id: habit_id.into(),
            date: date.into(),
            completed,
            notes: None,
        }
    }

    /// Calendar day of this record, if its date parses.
    pub fn day_key(&self) -> Option<DayKey> {
        DayKey::parse(&self.date)
    }

    /// Whether this record belongs to `habit_id` on `day`.
    pub fn is_for(&self, habit_id: &str, day: DayKey) -> bool {
        self.habit_id == habit_id && self.day_key() == Some(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> DayKey {
        DayKey::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn new_habit_trims_and_rejects_empty_names() {
        let habit = Habit::new("  Drink water ").unwrap();
        assert_eq!(habit.name, "Drink water");
        assert_eq!(habit.frequency_type, FrequencyType::Daily);
        assert!(Uuid::parse_str(&habit.id).is_ok());
        assert!(matches!(Habit::new("   "), Err(ValidationError::EmptyName)));
    }

    #[test]
    fn daily_habits_are_always_scheduled() {
        let habit = Habit::new("Read").unwrap();
        assert!(habit.is_scheduled_on(day(2024, 1, 6)));
    }

    #[test]
    fn archived_habits_are_never_scheduled() {
        let mut habit = Habit::new("Read").unwrap();
        habit.is_archived = true;
        assert!(!habit.is_scheduled_on(day(2024, 1, 6)));
    }

    #[test]
    fn weekly_habits_follow_target_days() {
        let habit = Habit::new("Gym")
            .unwrap()
            .with_frequency(FrequencyType::Weekly, vec![Weekday::Monday, Weekday::Thursday]);
        // 2024-01-01 was a Monday
        assert!(habit.is_scheduled_on(day(2024, 1, 1)));
        assert!(!habit.is_scheduled_on(day(2024, 1, 2)));
        assert!(habit.is_scheduled_on(day(2024, 1, 4)));
    }

    #[test]
    fn weekly_habit_without_target_days_is_every_day() {
        let habit = Habit::new("Walk")
            .unwrap()
            .with_frequency(FrequencyType::Custom, Vec::new());
        assert!(habit.is_scheduled_on(day(2024, 1, 2)));
    }

    #[test]
    fn monthly_habits_use_creation_day_of_month() {
        let mut habit = Habit::new("Budget")
            .unwrap()
            .with_frequency(FrequencyType::Monthly, Vec::new());
        habit.created_date = "2023-11-15T08:00:00Z".into();
        assert!(habit.is_scheduled_on(day(2024, 2, 15)));
        assert!(!habit.is_scheduled_on(day(2024, 2, 16)));

        habit.created_date = "garbage".into();
        assert!(!habit.is_scheduled_on(day(2024, 2, 15)));
    }

    #[test]
    fn parses_enums_from_cli_text() {
        assert_eq!("Fitness".parse::<HabitCategory>().unwrap(), HabitCategory::Fitness);
        assert_eq!("weekly".parse::<FrequencyType>().unwrap(), FrequencyType::Weekly);
        assert_eq!("wed".parse::<Weekday>().unwrap(), Weekday::Wednesday);
        assert!("someday".parse::<Weekday>().is_err());
    }

    #[test]
    fn rename_trims_and_rejects_empty_names() {
        let mut habit = Habit::new("Read").unwrap();
        habit.rename("  Read more ").unwrap();
        assert_eq!(habit.name, "Read more");
        assert!(matches!(habit.rename(" "), Err(ValidationError::EmptyName)));
        assert_eq!(habit.name, "Read more");
    }

    #[test]
    fn archive_filter_selects_by_state() {
        let active = Habit::new("Read").unwrap();
        let mut archived = Habit::new("Old").unwrap();
        archived.is_archived = true;

        assert!(ArchiveFilter::Active.matches(&active));
        assert!(!ArchiveFilter::Active.matches(&archived));
        assert!(ArchiveFilter::Archived.matches(&archived));
        assert!(!ArchiveFilter::Archived.matches(&active));
        assert!(ArchiveFilter::All.matches(&active) && ArchiveFilter::All.matches(&archived));
        assert_eq!("Archived".parse::<ArchiveFilter>().unwrap(), ArchiveFilter::Archived);
        assert!("hidden".parse::<ArchiveFilter>().is_err());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let check_in = CheckIn::new("h1", "2024-01-01", true);
        let json = serde_json::to_value(&check_in).unwrap();
        assert_eq!(json["habitId"], "h1");
        assert!(json.get("notes").is_none());

        let habit = Habit::new("Read").unwrap();
        let json = serde_json::to_value(&habit).unwrap();
        assert_eq!(json["frequencyType"], "daily");
        assert_eq!(json["isArchived"], false);
    }

    #[test]
    fn deserializes_sparse_legacy_records() {
        let habit: Habit = serde_json::from_str(
            r#"{"id":"a","name":"Read","createdDate":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(habit.category, HabitCategory::Custom);
        assert_eq!(habit.color, DEFAULT_HABIT_COLOR);
        assert!(habit.target_days.is_empty());
    }

    #[test]
    fn check_in_matches_habit_and_day() {
        let check_in = CheckIn::new("h1", "2024-01-01T12:00:00Z", true);
        assert_eq!(check_in.day_key(), Some(day(2024, 1, 1)));
        assert!(check_in.is_for("h1", day(2024, 1, 1)));
        assert!(!check_in.is_for("h2", day(2024, 1, 1)));
        assert!(!check_in.is_for("h1", day(2024, 1, 2)));
    }
}
