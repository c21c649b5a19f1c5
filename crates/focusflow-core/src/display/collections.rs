//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::{models::Task, tracker::PlanTracker};

/// Newtype wrapper for displaying the task backlog.
///
/// Handles the empty backlog gracefully.
///
/// # Examples
///
/// ```rust
/// use focusflow_core::display::Tasks;
///
/// let tasks = Tasks(vec![]);
/// assert!(tasks.is_empty());
/// assert_eq!(format!("{}", tasks), "No tasks in the backlog.\n");
/// ```
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks in the backlog.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}

/// Summary screen: streak, backlog and progress of the active plan.
pub struct Dashboard {
    pub tasks: Tasks,
    pub plan: Option<PlanTracker>,
    pub streak: u64,
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.streak == 1 { "day" } else { "days" };

        writeln!(f, "# FocusFlow")?;
        writeln!(f)?;
        writeln!(f, "- Streak: {} {unit}", self.streak)?;
        writeln!(f, "- Tasks: {}", self.tasks.0.len())?;

        writeln!(f, "\n## Backlog")?;
        writeln!(f)?;
        write!(f, "{}", self.tasks)?;

        writeln!(f, "\n## Active Plan")?;
        writeln!(f)?;
        match &self.plan {
            Some(tracker) => {
                writeln!(
                    f,
                    "- Progress: {}/{} micro-tasks ({}%), {}",
                    tracker.checked_count(),
                    tracker.total(),
                    tracker.progress(),
                    tracker.state()
                )?;
                for micro_task in tracker.micro_tasks() {
                    write!(f, "{micro_task}")?;
                }
                Ok(())
            }
            None => writeln!(f, "No active plan."),
        }
    }
}
