//! Planning settings and the request context sent to the plan generator.

use serde::{Deserialize, Serialize};

use super::Task;
use crate::error::{FocusError, Result};

/// Knobs that shape plan generation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanSettings {
    /// Self-reported energy, 1-10
    pub energy_level: u8,
    /// Study hours available per day
    pub available_hours_per_day: f64,
    /// Number of days the schedule should cover
    pub days_to_plan: u32,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            energy_level: 7,
            available_hours_per_day: 4.0,
            days_to_plan: 3,
        }
    }
}

impl PlanSettings {
    /// Checks every field is within its allowed range.
    pub fn validate(&self) -> Result<()> {
        if !(1..=10).contains(&self.energy_level) {
            return Err(FocusError::invalid_input("energy_level")
                .with_reason("Energy level must be between 1 and 10"));
        }
        if !self.available_hours_per_day.is_finite() || self.available_hours_per_day <= 0.0 {
            return Err(FocusError::invalid_input("available_hours_per_day")
                .with_reason("Available hours must be a positive number"));
        }
        if self.days_to_plan == 0 {
            return Err(FocusError::invalid_input("days_to_plan")
                .with_reason("Days to plan must be at least 1"));
        }
        Ok(())
    }
}

/// Everything the plan generator needs to build a schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanContext {
    pub tasks: Vec<Task>,
    pub energy_level: u8,
    pub available_hours_per_day: f64,
    pub days_to_plan: u32,
}

impl PlanContext {
    /// Combines a backlog snapshot with the current settings.
    pub fn new(tasks: Vec<Task>, settings: PlanSettings) -> Self {
        Self {
            tasks,
            energy_level: settings.energy_level,
            available_hours_per_day: settings.available_hours_per_day,
            days_to_plan: settings.days_to_plan,
        }
    }
}
