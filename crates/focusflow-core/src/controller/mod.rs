//! Application controller: the high-level FocusFlow API.
//!
//! The [`Controller`] owns the task backlog, the active plan, planning
//! settings and the last analysis result, and coordinates the local
//! [`Store`] with the AI [`PlanService`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Controller    │    │   PlanTracker   │    │      Store      │
//! │ (task_ops,      │───▶│ (progress and   │    │ (SQLite, write- │
//! │  plan_ops,      │    │  completion     │    │  through)       │
//! │  coaching_ops)  │──┐ │  latch)         │    └─────────────────┘
//! └─────────────────┘  │ └─────────────────┘             ▲
//!                      │ ┌─────────────────┐             │
//!                      └▶│   PlanService   │   every mutation persists
//!                        │   (AI requests) │   before returning
//!                        └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Controller`] instances
//! - [`task_ops`]: Backlog, settings, onboarding and streak operations
//! - [`plan_ops`]: Plan generation, micro-task toggling and completion
//! - [`coaching_ops`]: Reminders and performance analysis
//!
//! ## Concurrency
//!
//! Session state sits behind an async mutex that is never held across an AI
//! request. Two overlapping [`Controller::request_plan`] calls both reach the
//! service; whichever resolves last becomes the active plan.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use focusflow_core::{params::NewTask, ControllerBuilder, GeminiClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = GeminiClient::builder().api_key("secret").build()?;
//! let controller = ControllerBuilder::new()
//!     .with_service(Arc::new(service))
//!     .build()
//!     .await?;
//!
//! controller
//!     .add_task(NewTask {
//!         title: "Lab report".to_string(),
//!         subject: "Physics".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let outcome = controller.request_plan().await?;
//! println!("{}% done", outcome.tracker.progress());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    models::{AnalysisResult, PlanSettings, StreakCelebration, Task},
    service::PlanService,
    store::Store,
    tracker::PlanTracker,
};

pub mod builder;
pub mod coaching_ops;
pub mod plan_ops;
pub mod task_ops;


pub use builder::ControllerBuilder;

/// In-memory state mirrored to the store.
#[derive(Debug, Default)]
pub(crate) struct Session {
    pub(crate) backlog: Vec<Task>,
    pub(crate) plan: Option<PlanTracker>,
    pub(crate) settings: PlanSettings,
    pub(crate) analysis: Option<AnalysisResult>,
}

/// Main interface for the study planner.
pub struct Controller {
    pub(crate) store: Store,
    pub(crate) service: Arc<dyn PlanService>,
    pub(crate) session: Mutex<Session>,
}

impl Controller {
    pub(crate) fn new(store: Store, service: Arc<dyn PlanService>, session: Session) -> Self {
        Self {
            store,
            service,
            session: Mutex::new(session),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }
}

/// Result of installing a newly generated plan.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    /// Snapshot of the plan that is now active
    pub tracker: PlanTracker,
    /// Present when the plan arrived fully checked
    pub completion: Option<Completion>,
}

/// Result of toggling a micro-task.
#[derive(Debug, Clone, Default)]
pub struct ToggleOutcome {
    /// Snapshot after the toggle, or `None` without an active plan
    pub tracker: Option<PlanTracker>,
    /// New checked state, or `None` if the micro-task does not exist
    pub checked: Option<bool>,
    /// Present when this toggle completed the plan
    pub completion: Option<Completion>,
}

/// Outcome of a completed plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// Streak after the increment
    pub streak: u64,
    pub celebration: StreakCelebration,
    /// The service failed and the fallback celebration is shown
    pub fallback_used: bool,
}
