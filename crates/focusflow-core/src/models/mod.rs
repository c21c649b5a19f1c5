//! Data models for tasks, plans and coaching payloads.
//!
//! This module contains the core domain models of the FocusFlow study
//! planner. Display implementations for these models are located in
//! [`crate::display::models`] to keep data structures separate from
//! presentation.
//!
//! Models that cross the plan generation service boundary serialize as
//! camelCase JSON, matching the response schemas the service is asked to
//! follow.
//!
//! # Examples
//!
//! ```rust
//! use focusflow_core::models::{Difficulty, Task};
//!
//! let task = Task {
//!     id: Task::generate_id(),
//!     title: "Lab report".to_string(),
//!     subject: "Physics".to_string(),
//!     deadline: None,
//!     difficulty: Difficulty::Hard,
//!     is_exam: false,
//!     description: None,
//! };
//! println!("{}", task); // Formats as a markdown list entry
//! ```

pub mod context;
pub mod insight;
pub mod plan;
pub mod task;

#[cfg(test)]
mod tests;

pub use context::{PlanContext, PlanSettings};
pub use insight::{AnalysisResult, PerformanceData, StreakCelebration};
pub use plan::{DayPlan, MicroTask, PriorityItem, ProductivityPlan, SlotKind, TimeSlot};
pub use task::{Difficulty, Task};
