//! Productivity plan model as returned by the plan generation service.

use serde::{Deserialize, Serialize};

/// A generated multi-day schedule plus micro-goal checklist.
///
/// Everything except the `checked` flags of [`MicroTask`]s is immutable once
/// received; checked state is tracked by [`crate::tracker::PlanTracker`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityPlan {
    /// Tasks ranked by urgency, most urgent first
    pub priority_order: Vec<PriorityItem>,

    /// One entry per planned day
    pub multi_day_plan: Vec<DayPlan>,

    /// Checklist of small work units
    pub micro_tasks: Vec<MicroTask>,

    /// Encouragement shown alongside the plan
    pub motivation_tip: String,
}

/// A ranked backlog task with the reason for its rank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriorityItem {
    /// ID of the backlog task
    pub id: String,
    pub title: String,
    pub reason: String,
}

/// Schedule for a single day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// Label such as "Day 1" or "Monday"
    pub day_label: String,
    pub slots: Vec<TimeSlot>,
}

/// One block of time in a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Human-readable time label, e.g. "09:00"
    pub time: String,
    pub activity: String,
    pub duration_minutes: f64,
    #[serde(rename = "type")]
    pub kind: SlotKind,
}

/// What a time slot is for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SlotKind {
    Work,
    Break,
    Flex,
}

impl SlotKind {
    /// Icon used when listing slots.
    pub fn icon(&self) -> &'static str {
        match self {
            SlotKind::Work => "📚",
            SlotKind::Break => "☕",
            SlotKind::Flex => "🔀",
        }
    }
}

/// Smallest trackable unit of work inside a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MicroTask {
    pub id: String,
    pub title: String,
    /// Duration label, e.g. "45 min"
    pub duration: String,
    #[serde(default)]
    pub checked: bool,
}
