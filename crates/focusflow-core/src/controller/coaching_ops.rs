//! Reminder and performance analysis operations for the Controller.

use log::{info, warn};

use super::Controller;
use crate::{
    error::{FocusError, Result},
    models::{AnalysisResult, PerformanceData},
};

/// Reminder shown when the reminder request fails.
pub const REMINDER_FALLBACK: &str = "Time to lock in!";

/// Reminder shown when the service answers with nothing.
pub const EMPTY_REMINDER_FALLBACK: &str = "Time to focus! You've got this.";

impl Controller {
    /// Fetches a short nudge for a backlog task.
    ///
    /// Service failures never propagate: a fixed fallback reminder is
    /// returned instead.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::InvalidInput` if no task has the given ID.
    pub async fn request_reminder(&self, task_id: &str) -> Result<String> {
        let found = {
            let session = self.session.lock().await;
            let found = session
                .backlog
                .iter()
                .find(|task| task.id == task_id)
                .cloned();
            found
        };
        let task = found.ok_or_else(|| {
            FocusError::invalid_input("task_id").with_reason(format!("No task with ID {task_id}"))
        })?;

        let deadline = task
            .deadline
            .map(|date| date.to_string())
            .unwrap_or_else(|| "none".to_string());

        match self
            .service
            .quick_reminder(&task.subject, &deadline, &task.title)
            .await
        {
            Ok(text) if text.trim().is_empty() => Ok(EMPTY_REMINDER_FALLBACK.to_string()),
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) => {
                warn!("Reminder request failed ({e}); using fallback");
                Ok(REMINDER_FALLBACK.to_string())
            }
        }
    }

    /// Requests coaching feedback for the weekly performance summary.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::AnalysisFailed` when the service fails; the
    /// previous analysis is kept.
    pub async fn request_analysis(&self) -> Result<AnalysisResult> {
        let data = PerformanceData::default();

        let result = self
            .service
            .analyze_performance(&data)
            .await
            .map_err(|source| {
                warn!("Performance analysis failed: {source}");
                FocusError::AnalysisFailed { source }
            })?;

        let mut session = self.session.lock().await;
        self.store.set_analysis(result.clone()).await?;
        session.analysis = Some(result.clone());

        info!("Stored new performance analysis");
        Ok(result)
    }

    /// Last successful analysis, if any.
    pub async fn analysis(&self) -> Option<AnalysisResult> {
        self.session.lock().await.analysis.clone()
    }
}
