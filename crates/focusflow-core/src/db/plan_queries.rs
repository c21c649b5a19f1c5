//! Active plan snapshot queries.

use jiff::Timestamp;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};

use super::settings_queries::bump_streak;
use crate::{
    error::{DatabaseResultExt, Result},
    tracker::PlanTracker,
};

const SELECT_ACTIVE_PLAN_SQL: &str = "SELECT tracker FROM active_plan WHERE slot = 1";
const UPSERT_ACTIVE_PLAN_SQL: &str = "INSERT INTO active_plan (slot, tracker, updated_at) VALUES (1, ?1, ?2) \
     ON CONFLICT(slot) DO UPDATE SET tracker = excluded.tracker, updated_at = excluded.updated_at";

impl super::Database {
    /// Loads the active plan, if any.
    ///
    /// A snapshot whose overlay does not match its plan is discarded.
    pub fn get_active_plan(&self) -> Result<Option<PlanTracker>> {
        let encoded: Option<String> = self
            .connection
            .query_row(SELECT_ACTIVE_PLAN_SQL, [], |row| row.get(0))
            .optional()
            .db_context("Failed to read active plan")?;

        let Some(encoded) = encoded else {
            return Ok(None);
        };

        let tracker: PlanTracker = serde_json::from_str(&encoded)?;
        if !tracker.is_consistent() {
            warn!("Discarding inconsistent active plan snapshot");
            return Ok(None);
        }
        Ok(Some(tracker))
    }

    /// Replaces the active plan snapshot.
    pub fn save_active_plan(&self, tracker: &PlanTracker) -> Result<()> {
        upsert_active_plan(&self.connection, tracker)
    }

    /// Replaces the active plan snapshot with a just-completed tracker and
    /// adds one to the streak, both in one transaction.
    ///
    /// Returns the new streak. On error neither write is applied.
    pub fn save_completed_plan(&mut self, tracker: &PlanTracker) -> Result<u64> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        upsert_active_plan(&tx, tracker)?;
        let streak = bump_streak(&tx)?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(streak)
    }
}

fn upsert_active_plan(conn: &Connection, tracker: &PlanTracker) -> Result<()> {
    let encoded = serde_json::to_string(tracker)?;
    conn.execute(
        UPSERT_ACTIVE_PLAN_SQL,
        params![encoded, Timestamp::now().to_string()],
    )
    .db_context("Failed to save active plan")?;
    Ok(())
}
