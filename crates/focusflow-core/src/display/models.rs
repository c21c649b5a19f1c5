//! Display implementations for domain models.
//!
//! All output is markdown: headers for sections, list items for entries and
//! checkbox markers for micro-tasks.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    controller::Completion,
    models::{
        AnalysisResult, DayPlan, Difficulty, MicroTask, PlanSettings, SlotKind,
        StreakCelebration, Task, TimeSlot,
    },
    tracker::{PlanState, PlanTracker},
};

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SlotKind::Work => "work",
            SlotKind::Break => "break",
            SlotKind::Flex => "flex",
        };
        write!(f, "{label}")
    }
}

impl fmt::Display for PlanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanState::Incomplete => write!(f, "in progress"),
            PlanState::Completed => write!(f, "completed"),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- **{}** ({}) · {} · ID: `{}`",
            self.title, self.subject, self.difficulty, self.id
        )?;
        if self.is_exam {
            write!(f, " · Exam")?;
        }
        if let Some(deadline) = &self.deadline {
            write!(f, " · Due {deadline}")?;
        }
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "  {desc}")?;
        }
        Ok(())
    }
}

impl fmt::Display for MicroTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.checked { "x" } else { " " };
        writeln!(
            f,
            "- [{mark}] {} ({}) · ID: `{}`",
            self.title, self.duration, self.id
        )
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} {} {} ({} min)",
            self.time,
            self.kind.icon(),
            self.activity,
            self.duration_minutes
        )
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.day_label)?;
        writeln!(f)?;
        if self.slots.is_empty() {
            writeln!(f, "No sessions scheduled.")?;
        }
        for slot in &self.slots {
            write!(f, "{slot}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PlanTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan();

        writeln!(f, "# Study Plan")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Progress: {}/{} micro-tasks ({}%)",
            self.checked_count(),
            self.total(),
            self.progress()
        )?;
        writeln!(f, "- Status: {}", self.state())?;
        writeln!(f, "- Generated: {}", LocalDateTime(self.generated_at()))?;

        writeln!(f, "\n## Micro-Tasks")?;
        writeln!(f)?;
        for micro_task in self.micro_tasks() {
            write!(f, "{micro_task}")?;
        }

        if !plan.priority_order.is_empty() {
            writeln!(f, "\n## Priorities")?;
            writeln!(f)?;
            for (rank, item) in plan.priority_order.iter().enumerate() {
                writeln!(f, "{}. **{}**: {}", rank + 1, item.title, item.reason)?;
            }
        }

        writeln!(f, "\n## Schedule")?;
        writeln!(f)?;
        for day in &plan.multi_day_plan {
            write!(f, "{day}")?;
        }

        if !plan.motivation_tip.is_empty() {
            writeln!(f, "> {}", plan.motivation_tip)?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Energy level: {}/10", self.energy_level)?;
        writeln!(f, "- Hours per day: {}", self.available_hours_per_day)?;
        writeln!(f, "- Days to plan: {}", self.days_to_plan)
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn section(f: &mut fmt::Formatter<'_>, title: &str, items: &[String]) -> fmt::Result {
            writeln!(f, "## {title}")?;
            writeln!(f)?;
            for item in items {
                writeln!(f, "- {item}")?;
            }
            writeln!(f)
        }

        writeln!(f, "# Weekly Insights")?;
        writeln!(f)?;
        section(f, "Procrastination Patterns", &self.procrastination_patterns)?;
        section(f, "Weak Time Slots", &self.weak_time_slots)?;
        section(f, "Suggested Improvements", &self.suggested_improvements)?;

        writeln!(f, "## Behavioral Advice")?;
        writeln!(f)?;
        writeln!(f, "{}", self.behavioral_advice)?;
        writeln!(f)?;
        writeln!(f, "## Schedule Adjustments")?;
        writeln!(f)?;
        writeln!(f, "{}", self.schedule_adjustments)
    }
}

impl fmt::Display for StreakCelebration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.encouragement)?;
        writeln!(f)?;
        writeln!(f, "- **Tip**: {}", self.productivity_tip)?;
        writeln!(f, "- **Tomorrow's challenge**: {}", self.tomorrow_challenge)
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.streak == 1 { "day" } else { "days" };
        writeln!(f, "## Plan complete! Streak: {} {unit}", self.streak)?;
        writeln!(f)?;
        write!(f, "{}", self.celebration)
    }
}
