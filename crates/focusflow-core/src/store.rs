//! Async access to local state.
//!
//! [`Store`] owns only a database path. Each operation opens a connection on
//! the blocking thread pool, runs, and commits before the returned future
//! resolves, so a value written by an awaited call is durable.

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::{
        settings_queries::{ANALYSIS_KEY, PLAN_SETTINGS_KEY},
        Database,
    },
    error::{FocusError, Result},
    models::{AnalysisResult, PlanSettings, Task},
    tracker::PlanTracker,
};

/// Write-through persistence for onboarding, streak, backlog and plan.
#[derive(Debug, Clone)]
pub struct Store {
    db_path: PathBuf,
}

impl Store {
    /// Opens (creating if needed) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::FileSystem` if the parent directory cannot be
    /// created and `FocusError::Database` if schema initialization fails.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| FocusError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let store = Self { db_path };
        store.run(|_db| Ok(())).await?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Runs a database operation on the blocking pool.
    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(FocusError::join)?
    }

    pub async fn is_onboarded(&self) -> Result<bool> {
        self.run(|db| db.is_onboarded()).await
    }

    pub async fn set_onboarded(&self) -> Result<()> {
        self.run(|db| db.set_onboarded()).await
    }

    pub async fn streak(&self) -> Result<u64> {
        self.run(|db| db.streak()).await
    }

    /// Adds one to the persisted streak and returns the new value.
    pub async fn increment_streak(&self) -> Result<u64> {
        self.run(|db| db.increment_streak()).await
    }

    pub async fn plan_settings(&self) -> Result<Option<PlanSettings>> {
        self.run(|db| db.get_json(PLAN_SETTINGS_KEY)).await
    }

    pub async fn set_plan_settings(&self, settings: PlanSettings) -> Result<()> {
        self.run(move |db| db.set_json(PLAN_SETTINGS_KEY, &settings))
            .await
    }

    pub async fn analysis(&self) -> Result<Option<AnalysisResult>> {
        self.run(|db| db.get_json(ANALYSIS_KEY)).await
    }

    pub async fn set_analysis(&self, analysis: AnalysisResult) -> Result<()> {
        self.run(move |db| db.set_json(ANALYSIS_KEY, &analysis))
            .await
    }

    pub async fn tasks(&self) -> Result<Vec<Task>> {
        self.run(|db| db.list_tasks()).await
    }

    pub async fn insert_task(&self, task: Task) -> Result<()> {
        self.run(move |db| db.insert_task(&task)).await
    }

    pub async fn remove_task(&self, id: &str) -> Result<Option<Task>> {
        let id = id.to_string();
        self.run(move |db| db.remove_task(&id)).await
    }

    pub async fn active_plan(&self) -> Result<Option<PlanTracker>> {
        self.run(|db| db.get_active_plan()).await
    }

    pub async fn save_active_plan(&self, tracker: PlanTracker) -> Result<()> {
        self.run(move |db| db.save_active_plan(&tracker)).await
    }

    /// Saves a just-completed plan and adds one to the streak atomically,
    /// returning the new streak.
    pub async fn save_completed_plan(&self, tracker: PlanTracker) -> Result<u64> {
        self.run(move |db| db.save_completed_plan(&tracker)).await
    }
}
