//! Typed accessors over the key-value state layout.
//!
//! Persisted keys follow the layout in `assets/schema.sql`: `selectedPlan`
//! holds the plan identifier, `currentDay` a decimal day index, and
//! `completedDays_<planId>` a JSON array of completed day indices. Reads
//! fail closed: malformed payloads are logged and replaced with defaults
//! instead of surfacing a parse error to the user.

use log::warn;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};
use crate::models::Progress;

const GET_VALUE_SQL: &str = "SELECT value FROM state WHERE key = ?1";
const PUT_VALUE_SQL: &str =
    "INSERT INTO state (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value";

const SELECTED_PLAN_KEY: &str = "selectedPlan";
const CURRENT_DAY_KEY: &str = "currentDay";

fn completed_days_key(plan_id: &str) -> String {
    format!("completedDays_{plan_id}")
}

impl super::Database {
    /// Reads a raw value by key.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(GET_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read state value")
    }

    /// Writes a raw value, inserting or replacing the key.
    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(PUT_VALUE_SQL, params![key, value])
            .db_context("Failed to write state value")?;
        Ok(())
    }

    /// Reads the selected plan identifier, if one has been persisted.
    pub fn selected_plan(&self) -> Result<Option<String>> {
        self.get(SELECTED_PLAN_KEY)
    }

    /// Persists the selected plan identifier.
    pub fn set_selected_plan(&self, plan_id: &str) -> Result<()> {
        self.put(SELECTED_PLAN_KEY, plan_id)
    }

    /// Reads the persisted current day pointer.
    ///
    /// A non-numeric payload is logged and treated as absent so the caller
    /// falls back to its default.
    pub fn current_day(&self) -> Result<Option<u16>> {
        let raw = match self.get(CURRENT_DAY_KEY)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        match raw.trim().parse::<u16>() {
            Ok(day) => Ok(Some(day)),
            Err(_) => {
                warn!("Ignoring malformed persisted current day: {raw:?}");
                Ok(None)
            }
        }
    }

    /// Persists the current day pointer as decimal text.
    pub fn set_current_day(&self, day: u16) -> Result<()> {
        self.put(CURRENT_DAY_KEY, &day.to_string())
    }

    /// Reads the completed-day set persisted for a plan.
    ///
    /// A payload that is not a JSON integer array is logged and replaced
    /// with an empty set; individual out-of-range members are dropped.
    pub fn completed_days(&self, plan_id: &str) -> Result<Progress> {
        let raw = match self.get(&completed_days_key(plan_id))? {
            Some(raw) => raw,
            None => return Ok(Progress::new()),
        };
        match serde_json::from_str::<Vec<i64>>(&raw) {
            Ok(days) => {
                let progress =
                    Progress::from_days(days.iter().filter_map(|d| u16::try_from(*d).ok()));
                if progress.len() != days.len() {
                    warn!(
                        "Dropped {} out-of-range completed days for plan '{plan_id}'",
                        days.len() - progress.len()
                    );
                }
                Ok(progress)
            }
            Err(e) => {
                warn!("Ignoring malformed completed days for plan '{plan_id}': {e}");
                Ok(Progress::new())
            }
        }
    }

    /// Persists the completed-day set for a plan.
    ///
    /// An empty set persists as the empty JSON array, never as a deleted
    /// key, so clearing all progress survives a reload.
    pub fn set_completed_days(&self, plan_id: &str, progress: &Progress) -> Result<()> {
        let payload = serde_json::to_string(&progress.days())?;
        self.put(&completed_days_key(plan_id), &payload)
    }
}
