//! Database operations and SQLite management for local state.
//!
//! This module provides the synchronous storage layer: settings such as the
//! onboarding flag and streak counter, the task backlog, and the active plan
//! snapshot. Async callers go through [`crate::store::Store`], which runs
//! these operations on the blocking thread pool.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod plan_queries;
pub mod schema;
pub mod settings_queries;
pub mod task_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
