//! Completion tracking for the active plan.
//!
//! A [`PlanTracker`] takes ownership of a freshly generated
//! [`ProductivityPlan`] and keeps the only mutable part of it: the checked
//! flag of each micro-task. Progress is derived from that overlay and a
//! one-shot completion latch turns "progress reached 100%" into a single
//! [`PlanEvent::Completed`].
//!
//! ```text
//!   ┌────────────┐  progress == 100, latch unset  ┌───────────┐
//!   │ Incomplete │ ─────────────────────────────▶ │ Completed │
//!   └────────────┘   (emits PlanEvent::Completed) └───────────┘
//! ```
//!
//! `Completed` is terminal for a tracker. Unchecking items afterwards lowers
//! [`PlanTracker::progress`] but never re-arms the latch; only a new plan
//! (and therefore a new tracker) does.

use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{MicroTask, ProductivityPlan};
use crate::service::ServiceError;


/// Completion state of a plan instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanState {
    #[default]
    Incomplete,
    Completed,
}

/// Signals emitted by a tracker transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanEvent {
    /// Every micro-task is checked for the first time in this plan's life.
    Completed,
}

/// Checked-state overlay and completion latch for one plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanTracker {
    plan: ProductivityPlan,
    checked: Vec<bool>,
    total: usize,
    state: PlanState,
    generated_at: Timestamp,
}

impl PlanTracker {
    /// Takes ownership of a plan, seeding the overlay from its checked flags.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::MalformedResponse` when the plan has no
    /// micro-tasks, since progress would be undefined.
    pub fn new(plan: ProductivityPlan) -> Result<Self, ServiceError> {
        if plan.micro_tasks.is_empty() {
            return Err(ServiceError::malformed("plan contains no micro-tasks"));
        }

        let checked = plan.micro_tasks.iter().map(|task| task.checked).collect();
        let total = plan.micro_tasks.len();

        Ok(Self {
            plan,
            checked,
            total,
            state: PlanState::Incomplete,
            generated_at: Timestamp::now(),
        })
    }

    /// Flips the checked flag of a micro-task and runs the completion
    /// transition.
    ///
    /// Unknown IDs are ignored.
    pub fn toggle(&mut self, micro_task_id: &str) -> Option<PlanEvent> {
        let Some(index) = self
            .plan
            .micro_tasks
            .iter()
            .position(|task| task.id == micro_task_id)
        else {
            debug!("Ignoring toggle of unknown micro-task {micro_task_id}");
            return None;
        };

        self.checked[index] = !self.checked[index];
        self.evaluate()
    }

    /// Moves `Incomplete` to `Completed` when progress is 100.
    ///
    /// Returns the event exactly once per tracker.
    pub fn evaluate(&mut self) -> Option<PlanEvent> {
        if self.state == PlanState::Incomplete && self.progress() == 100 {
            self.state = PlanState::Completed;
            return Some(PlanEvent::Completed);
        }
        None
    }

    /// Completion percentage, `round(100 * checked / total)` rounded half up.
    pub fn progress(&self) -> u8 {
        let checked = self.checked_count();
        // floor(100k/n + 1/2) without floating point
        ((200 * checked + self.total) / (2 * self.total)) as u8
    }

    /// Number of checked micro-tasks.
    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|checked| **checked).count()
    }

    /// Number of micro-tasks, fixed when the plan was received.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn state(&self) -> PlanState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == PlanState::Completed
    }

    /// The plan as generated, without local checked state.
    pub fn plan(&self) -> &ProductivityPlan {
        &self.plan
    }

    pub fn generated_at(&self) -> &Timestamp {
        &self.generated_at
    }

    /// Micro-tasks with the local checked state applied.
    pub fn micro_tasks(&self) -> Vec<MicroTask> {
        self.plan
            .micro_tasks
            .iter()
            .zip(&self.checked)
            .map(|(task, checked)| MicroTask {
                checked: *checked,
                ..task.clone()
            })
            .collect()
    }

    /// Overlay and plan agree in length and the total is non-zero.
    pub(crate) fn is_consistent(&self) -> bool {
        self.total > 0
            && self.total == self.plan.micro_tasks.len()
            && self.total == self.checked.len()
    }

    /// Whether the micro-task with this ID is currently checked.
    pub fn is_checked(&self, micro_task_id: &str) -> Option<bool> {
        self.plan
            .micro_tasks
            .iter()
            .position(|task| task.id == micro_task_id)
            .map(|index| self.checked[index])
    }
}
