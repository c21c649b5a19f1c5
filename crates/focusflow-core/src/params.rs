//! Parameter structures for FocusFlow operations
//!
//! Shared parameter structures that interface layers (the CLI today) convert
//! their own argument types into. They carry no framework-specific derives,
//! so the core stays independent of clap.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   Controller    │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{FocusError, Result},
    models::{Difficulty, PlanSettings, Task},
};

/// Parameters for adding a task to the backlog.
///
/// The controller assigns the task ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub subject: String,
    pub deadline: Option<Date>,
    pub difficulty: Difficulty,
    pub is_exam: bool,
    pub description: Option<String>,
}

impl NewTask {
    /// Validates the parameters and builds a task with the given ID.
    pub fn into_task(self, id: String) -> Result<Task> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FocusError::invalid_input("title").with_reason("Title cannot be empty"));
        }
        let subject = self.subject.trim();
        if subject.is_empty() {
            return Err(
                FocusError::invalid_input("subject").with_reason("Subject cannot be empty")
            );
        }

        Ok(Task {
            id,
            title: title.to_string(),
            subject: subject.to_string(),
            deadline: self.deadline,
            difficulty: self.difficulty,
            is_exam: self.is_exam,
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        })
    }
}

/// Partial update of planning settings. Unset fields keep their value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UpdateSettings {
    pub energy_level: Option<u8>,
    pub available_hours_per_day: Option<f64>,
    pub days_to_plan: Option<u32>,
}

impl UpdateSettings {
    /// Whether any field is set.
    pub fn is_empty(&self) -> bool {
        self.energy_level.is_none()
            && self.available_hours_per_day.is_none()
            && self.days_to_plan.is_none()
    }

    /// Applies the set fields on top of `current`.
    pub fn apply(&self, current: PlanSettings) -> PlanSettings {
        PlanSettings {
            energy_level: self.energy_level.unwrap_or(current.energy_level),
            available_hours_per_day: self
                .available_hours_per_day
                .unwrap_or(current.available_hours_per_day),
            days_to_plan: self.days_to_plan.unwrap_or(current.days_to_plan),
        }
    }
}
