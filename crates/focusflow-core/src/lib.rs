//! Core library for the FocusFlow study planner.
//!
//! This crate holds the business logic behind the planner: the task backlog,
//! AI-generated productivity plans and their progress tracking, the
//! completion streak, local persistence, and the client for the generative
//! language service.
//!
//! # Architecture
//!
//! - **Controller** ([`controller`]): Owns session state and exposes every
//!   user operation
//! - **Tracker** ([`tracker`]): Derives progress from checked micro-tasks and
//!   latches plan completion
//! - **Service** ([`service`]): The [`PlanService`] trait and its
//!   [`GeminiClient`] implementation
//! - **Store** ([`store`]): Write-through SQLite persistence
//! - **Display** ([`display`]): Markdown formatting of models and results
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use focusflow_core::{params::NewTask, ControllerBuilder, GeminiClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = GeminiClient::builder()
//!     .api_key(std::env::var("GEMINI_API_KEY")?)
//!     .build()?;
//!
//! let controller = ControllerBuilder::new()
//!     .with_database_path(Some("focusflow.db"))
//!     .with_service(Arc::new(service))
//!     .build()
//!     .await?;
//!
//! controller
//!     .add_task(NewTask {
//!         title: "Essay draft".to_string(),
//!         subject: "History".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let outcome = controller.request_plan().await?;
//! println!("{}", outcome.tracker);
//!
//! let first = outcome.tracker.plan().micro_tasks[0].id.clone();
//! let toggled = controller.toggle_micro_task(&first).await?;
//! if let Some(completion) = toggled.completion {
//!     println!("{}", completion);
//! }
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod service;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use controller::{Completion, Controller, ControllerBuilder, PlanOutcome, ToggleOutcome};
pub use db::Database;
pub use display::{CreateResult, Dashboard, DeleteResult, LocalDateTime, Tasks, UpdateResult};
pub use error::{FocusError, Result};
pub use models::{
    AnalysisResult, DayPlan, Difficulty, MicroTask, PerformanceData, PlanContext, PlanSettings,
    PriorityItem, ProductivityPlan, SlotKind, StreakCelebration, Task, TimeSlot,
};
pub use params::{NewTask, UpdateSettings};
pub use service::{GeminiClient, GeminiClientBuilder, PlanService, ServiceError};
pub use store::Store;
pub use tracker::{PlanEvent, PlanState, PlanTracker};
