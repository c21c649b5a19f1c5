//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections, operation results and
//! the dashboard so that each output context can be formatted without the
//! models knowing about it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Wrappers and   │    │   Formatted     │
//! │ (Task, Tracker) │───▶│  Result Types   │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All formatters produce markdown that the CLI renders with termimad.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers ([`Tasks`]) and the [`Dashboard`]
//! - [`results`]: Operation result types ([`CreateResult`], [`UpdateResult`],
//!   [`DeleteResult`])
//! - [`datetime`]: Timestamp formatting in the system time zone
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use focusflow_core::{
//!     display::{CreateResult, Tasks},
//!     models::{Difficulty, Task},
//! };
//!
//! let task = Task {
//!     id: "a1b2c3d4e".to_string(),
//!     title: "Lab report".to_string(),
//!     subject: "Physics".to_string(),
//!     deadline: None,
//!     difficulty: Difficulty::Hard,
//!     is_exam: false,
//!     description: None,
//! };
//!
//! let created = format!("{}", CreateResult::new(task.clone()));
//! assert!(created.contains("Added task with ID: a1b2c3d4e"));
//!
//! let listed = format!("{}", Tasks(vec![task]));
//! assert!(listed.contains("Lab report"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{Dashboard, Tasks};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
