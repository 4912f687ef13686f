//! SQLite-backed key-value storage for habits and check-ins.
//!
//! Each collection is a JSON array stored under its storage key in a single
//! `kv` table, the same layout the habit tracker used in browser storage.

use std::path::Path;

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StorageError, ValidationError};
use crate::habit::{CheckIn, Habit};
use crate::streak::DayKey;

use super::data_dir;

pub const HABITS_KEY: &str = "ripplehabits:habits";
pub const CHECK_INS_KEY: &str = "ripplehabits:checkIns";

/// SQLite database holding the habit and check-in collections.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data_dir>/ripplehabits.db`.
    ///
    /// # Errors
    /// Returns an error if the data directory or database cannot be opened.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("ripplehabits.db");
        Self::open_at(&path)
    }

    /// Open (or create) the database file at `path`.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn kv_remove(&self, key: &str) -> Result<(), StorageError> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.kv_get(key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| {
                StorageError::Corrupt {
                    key: key.to_string(),
                    source,
                }
                .into()
            }),
        }
    }

    fn store_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.kv_set(key, &raw)?;
        tracing::debug!(key, count = items.len(), "stored collection");
        Ok(())
    }

    pub fn habits(&self) -> Result<Vec<Habit>> {
        self.load_collection(HABITS_KEY)
    }

    pub fn save_habits(&self, habits: &[Habit]) -> Result<()> {
        self.store_collection(HABITS_KEY, habits)
    }

    /// Append a habit to the collection.
    pub fn add_habit(&self, habit: Habit) -> Result<Habit> {
        let mut habits = self.habits()?;
        habits.push(habit.clone());
        self.save_habits(&habits)?;
        Ok(habit)
    }

    /// Resolve a habit by exact id, then by case-insensitive name.
    ///
    /// # Errors
    /// [`ValidationError::UnknownHabit`] when nothing matches and
    /// [`ValidationError::AmbiguousHabit`] when several habits share the name.
    pub fn find_habit(&self, id_or_name: &str) -> Result<Habit> {
        let habits = self.habits()?;
        if let Some(habit) = habits.iter().find(|habit| habit.id == id_or_name) {
            return Ok(habit.clone());
        }

        let wanted = id_or_name.trim().to_lowercase();
        let mut matches = habits
            .into_iter()
            .filter(|habit| habit.name.to_lowercase() == wanted);

        match (matches.next(), matches.next()) {
            (Some(habit), None) => Ok(habit),
            (Some(_), Some(_)) => {
                Err(ValidationError::AmbiguousHabit(id_or_name.to_string()).into())
            }
            (None, _) => Err(ValidationError::UnknownHabit(id_or_name.to_string()).into()),
        }
    }

    /// Replace the stored habit with the same id.
    ///
    /// # Errors
    /// [`ValidationError::UnknownHabit`] when no habit has that id and
    /// [`ValidationError::EmptyName`] when the name is blank.
    pub fn update_habit(&self, habit: &Habit) -> Result<Habit> {
        let mut updated = habit.clone();
        updated.rename(&habit.name)?;

        let mut habits = self.habits()?;
        let slot = habits
            .iter_mut()
            .find(|existing| existing.id == habit.id)
            .ok_or_else(|| ValidationError::UnknownHabit(habit.id.clone()))?;
        *slot = updated.clone();
        self.save_habits(&habits)?;
        Ok(updated)
    }

    /// Mark a habit archived. Its check-ins are kept.
    pub fn archive_habit(&self, habit_id: &str) -> Result<Habit> {
        self.set_archived(habit_id, true)
    }

    /// Return an archived habit to the active list.
    pub fn unarchive_habit(&self, habit_id: &str) -> Result<Habit> {
        self.set_archived(habit_id, false)
    }

    fn set_archived(&self, habit_id: &str, archived: bool) -> Result<Habit> {
        let mut habits = self.habits()?;
        let habit = habits
            .iter_mut()
            .find(|habit| habit.id == habit_id)
            .ok_or_else(|| ValidationError::UnknownHabit(habit_id.to_string()))?;
        habit.is_archived = archived;
        let result = habit.clone();
        self.save_habits(&habits)?;
        Ok(result)
    }

    /// Delete a habit together with its check-ins.
    pub fn remove_habit(&self, habit_id: &str) -> Result<Habit> {
        let mut habits = self.habits()?;
        let position = habits
            .iter()
            .position(|habit| habit.id == habit_id)
            .ok_or_else(|| ValidationError::UnknownHabit(habit_id.to_string()))?;
        let removed = habits.remove(position);

        let mut check_ins = self.check_ins()?;
        check_ins.retain(|check_in| check_in.habit_id != habit_id);

        let tx = self.conn.unchecked_transaction()?;
        self.save_habits(&habits)?;
        self.save_check_ins(&check_ins)?;
        tx.commit()?;

        Ok(removed)
    }

    pub fn check_ins(&self) -> Result<Vec<CheckIn>> {
        self.load_collection(CHECK_INS_KEY)
    }

    pub fn save_check_ins(&self, check_ins: &[CheckIn]) -> Result<()> {
        self.store_collection(CHECK_INS_KEY, check_ins)
    }

    /// Check-ins recorded for one habit, in stored order.
    pub fn check_ins_for(&self, habit_id: &str) -> Result<Vec<CheckIn>> {
        let mut check_ins = self.check_ins()?;
        check_ins.retain(|check_in| check_in.habit_id == habit_id);
        Ok(check_ins)
    }

    /// Record the completion state for (habit, day).
    ///
    /// Every existing record for that day is updated; a new record is
    /// appended when none exists. `notes` of `None` keeps whatever notes the
    /// day already has.
    pub fn set_check_in(
        &self,
        habit_id: &str,
        day: DayKey,
        completed: bool,
        notes: Option<String>,
    ) -> Result<CheckIn> {
        self.ensure_habit(habit_id)?;

        let mut check_ins = self.check_ins()?;
        let mut updated: Option<CheckIn> = None;
        for check_in in check_ins.iter_mut().filter(|c| c.is_for(habit_id, day)) {
            check_in.completed = completed;
            if notes.is_some() {
                check_in.notes = notes.clone();
            }
            if updated.is_none() {
                updated = Some(check_in.clone());
            }
        }

        let result = match updated {
            Some(check_in) => check_in,
            None => {
                let check_in = CheckIn {
                    habit_id: habit_id.to_string(),
                    date: day.to_string(),
                    completed,
                    notes,
                };
                check_ins.push(check_in.clone());
                check_in
            }
        };

        self.save_check_ins(&check_ins)?;
        Ok(result)
    }

    /// Flip the completion state for (habit, day), creating a completed
    /// record if the day has none.
    pub fn toggle_check_in(&self, habit_id: &str, day: DayKey) -> Result<CheckIn> {
        match self.existing_check_in(habit_id, day)? {
            Some(existing) => self.set_check_in(habit_id, day, !existing.completed, existing.notes),
            None => self.set_check_in(habit_id, day, true, None),
        }
    }

    /// Replace the notes for (habit, day), keeping its completion state.
    pub fn update_notes(&self, habit_id: &str, day: DayKey, notes: &str) -> Result<CheckIn> {
        let completed = self
            .existing_check_in(habit_id, day)?
            .is_some_and(|existing| existing.completed);
        self.set_check_in(habit_id, day, completed, Some(notes.trim().to_string()))
    }

    fn existing_check_in(&self, habit_id: &str, day: DayKey) -> Result<Option<CheckIn>> {
        Ok(self
            .check_ins()?
            .into_iter()
            .find(|check_in| check_in.is_for(habit_id, day)))
    }

    fn ensure_habit(&self, habit_id: &str) -> Result<()> {
        if self.habits()?.iter().any(|habit| habit.id == habit_id) {
            Ok(())
        } else {
            Err(ValidationError::UnknownHabit(habit_id.to_string()).into())
        }
    }
}
