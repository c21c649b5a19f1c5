//! Builder for creating and configuring Controller instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

use super::{Controller, Session};
use crate::{
    error::{FocusError, Result},
    service::PlanService,
    store::Store,
};

/// Builder for creating and configuring Controller instances.
#[derive(Clone, Default)]
pub struct ControllerBuilder {
    database_path: Option<PathBuf>,
    service: Option<Arc<dyn PlanService>>,
}

impl ControllerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/focusflow/focusflow.db` or
    /// `~/.local/share/focusflow/focusflow.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the AI service used for plans and coaching.
    pub fn with_service(mut self, service: Arc<dyn PlanService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Builds the controller, restoring backlog, active plan, settings and
    /// last analysis from the store.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::Configuration` if no service was set,
    /// `FocusError::FileSystem` if the database path is invalid and
    /// `FocusError::Database` if database initialization fails.
    pub async fn build(self) -> Result<Controller> {
        let service = self.service.ok_or_else(|| FocusError::Configuration {
            message: "No plan service configured".to_string(),
        })?;

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        let store = Store::open(&db_path).await?;

        let session = Session {
            backlog: store.tasks().await?,
            plan: store.active_plan().await?,
            settings: store.plan_settings().await?.unwrap_or_default(),
            analysis: store.analysis().await?,
        };
        debug!(
            "Loaded {} task(s) from {}; active plan: {}",
            session.backlog.len(),
            db_path.display(),
            session.plan.is_some()
        );

        Ok(Controller::new(store, service, session))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("focusflow")
            .place_data_file("focusflow.db")
            .map_err(|e| FocusError::XdgDirectory(e.to_string()))
    }
}
