//! Backlog, settings, onboarding and streak operations for the Controller.

use log::{debug, info};

use super::Controller;
use crate::{
    error::Result,
    models::{PlanSettings, Task},
    params::{NewTask, UpdateSettings},
};

impl Controller {
    /// Adds a task to the end of the backlog with a freshly generated ID.
    ///
    /// Tasks are not de-duplicated.
    pub async fn add_task(&self, params: NewTask) -> Result<Task> {
        let task = params.into_task(Task::generate_id())?;

        let mut session = self.session.lock().await;
        self.store.insert_task(task.clone()).await?;
        session.backlog.push(task.clone());

        info!("Added task {} ({})", task.id, task.title);
        Ok(task)
    }

    /// Removes the first task with the given ID. Unknown IDs are a no-op.
    pub async fn remove_task(&self, id: &str) -> Result<Option<Task>> {
        let mut session = self.session.lock().await;

        let Some(index) = session.backlog.iter().position(|task| task.id == id) else {
            debug!("Ignoring removal of unknown task {id}");
            return Ok(None);
        };

        self.store.remove_task(id).await?;
        let removed = session.backlog.remove(index);
        info!("Removed task {} ({})", removed.id, removed.title);
        Ok(Some(removed))
    }

    /// Snapshot of the backlog in insertion order.
    pub async fn tasks(&self) -> Vec<Task> {
        self.session.lock().await.backlog.clone()
    }

    /// Settings used for the next plan request.
    pub async fn settings(&self) -> PlanSettings {
        self.session.lock().await.settings
    }

    /// Validates and persists new planning settings.
    pub async fn update_settings(&self, update: UpdateSettings) -> Result<PlanSettings> {
        let mut session = self.session.lock().await;
        let settings = update.apply(session.settings);
        settings.validate()?;

        self.store.set_plan_settings(settings).await?;
        session.settings = settings;
        Ok(settings)
    }

    /// Persisted streak count.
    pub async fn streak(&self) -> Result<u64> {
        self.store.streak().await
    }

    pub async fn has_seen_onboarding(&self) -> Result<bool> {
        self.store.is_onboarded().await
    }

    /// Marks onboarding as seen. The flag is never reset.
    pub async fn finish_onboarding(&self) -> Result<()> {
        self.store.set_onboarded().await
    }
}
