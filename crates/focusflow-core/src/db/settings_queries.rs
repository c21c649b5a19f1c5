//! Key-value settings: onboarding flag, streak counter and cached JSON blobs.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{DatabaseResultExt, FocusError, Result, ResultExt};

pub const ONBOARDED_KEY: &str = "focusflow_onboarded";
pub const STREAK_KEY: &str = "focusflow_streak";
pub const PLAN_SETTINGS_KEY: &str = "focusflow_plan_settings";
pub const ANALYSIS_KEY: &str = "focusflow_analysis";

const SELECT_SETTING_SQL: &str = "SELECT value FROM settings WHERE key = ?1";
const UPSERT_SETTING_SQL: &str = "INSERT INTO settings (key, value) VALUES (?1, ?2) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value";

impl super::Database {
    /// Reads a raw setting value.
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SETTING_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read setting")
    }

    /// Writes a raw setting value, replacing any previous one.
    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_SETTING_SQL, params![key, value])
            .db_context("Failed to write setting")?;
        Ok(())
    }

    /// Whether onboarding has been completed. Missing means no.
    pub fn is_onboarded(&self) -> Result<bool> {
        Ok(self.get_setting(ONBOARDED_KEY)?.as_deref() == Some("true"))
    }

    pub fn set_onboarded(&self) -> Result<()> {
        self.set_setting(ONBOARDED_KEY, "true")
    }

    /// Current streak. Missing means zero; an unparsable value is an error.
    pub fn streak(&self) -> Result<u64> {
        match self.get_setting(STREAK_KEY)? {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .with_context(format!("Invalid stored streak '{value}'")),
            None => Ok(0),
        }
    }

    /// Adds one to the streak inside a transaction and returns the new value.
    pub fn increment_streak(&mut self) -> Result<u64> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        let next = bump_streak(&tx)?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(next)
    }

    /// Reads a JSON-encoded setting.
    pub fn get_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.get_setting(key)?
            .map(|value| serde_json::from_str(&value).map_err(FocusError::from))
            .transpose()
    }

    /// Writes a JSON-encoded setting.
    pub fn set_json<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let encoded = serde_json::to_string(value)?;
        self.set_setting(key, &encoded)
    }
}

/// Reads, increments and writes the streak on `conn`. Callers own the
/// surrounding transaction.
pub(super) fn bump_streak(conn: &Connection) -> Result<u64> {
    let current: Option<String> = conn
        .query_row(SELECT_SETTING_SQL, params![STREAK_KEY], |row| row.get(0))
        .optional()
        .db_context("Failed to read streak")?;
    let current = match current {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|e| FocusError::Configuration {
                message: format!("Invalid stored streak '{value}': {e}"),
            })?,
        None => 0,
    };

    let next = current + 1;
    conn.execute(UPSERT_SETTING_SQL, params![STREAK_KEY, next.to_string()])
        .db_context("Failed to write streak")?;
    Ok(next)
}
