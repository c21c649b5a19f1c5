//! Instructions, prompts and response schemas for each service request.

use serde_json::{json, Value};

use crate::error::Result;
use crate::models::{PerformanceData, PlanContext};

pub const PLAN_INSTRUCTION: &str = "\
You are a study planning assistant for students.
Break large tasks into micro-goals of 30 to 60 minutes.
Build realistic schedules across the requested number of days and rank work by urgency, exams first.
Include short breaks of 5 to 15 minutes and keep the tone supportive.
Respond only with JSON that follows the provided schema.";

pub const ANALYSIS_INSTRUCTION: &str = "\
You are a performance coach for students.
From the weekly completion data, identify procrastination patterns and weak time slots,
then suggest concrete improvements, behavioral advice and schedule adjustments.
Be supportive and practical. Respond only with JSON that follows the provided schema.";

pub const REMINDER_INSTRUCTION: &str = "\
You are a motivational study coach. Write one reminder of at most 25 words for the given task.
Name the first physical step the student should take. Be urgent without being stressful.";

pub const CELEBRATION_INSTRUCTION: &str = "\
You are an energetic productivity coach celebrating a student who finished their goals.
Give one short encouraging message, one practical productivity tip
and one small challenge for tomorrow. Respond only with JSON that follows the provided schema.";

/// User prompt for a plan request.
pub fn plan_prompt(context: &PlanContext) -> Result<String> {
    let tasks = serde_json::to_string(&context.tasks)?;
    Ok(format!(
        "Generate a {days}-day productivity plan.\n\
         Tasks: {tasks}\n\
         Available study time: {hours} hours per day\n\
         Current energy level: {energy}/10\n\
         Rank priorities by urgency with exams first and break tasks into micro-goals.\n\
         The multiDayPlan must contain exactly {days} days.",
        days = context.days_to_plan,
        hours = context.available_hours_per_day,
        energy = context.energy_level,
    ))
}

/// User prompt for an analysis request.
pub fn analysis_prompt(data: &PerformanceData) -> Result<String> {
    Ok(format!(
        "Analyze this student performance data: {}",
        serde_json::to_string(data)?
    ))
}

/// User prompt for a reminder request.
pub fn reminder_prompt(subject: &str, deadline: &str, task_title: &str) -> String {
    format!("Upcoming task:\nSubject: {subject}\nDeadline: {deadline}\nPending work: {task_title}")
}

/// User prompt for a celebration request.
pub fn celebration_prompt(streak: u64) -> String {
    format!("The student completed their goals. Current streak: {streak} days.")
}

pub fn plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "priorityOrder": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "title": { "type": "STRING" },
                        "reason": { "type": "STRING" }
                    },
                    "required": ["id", "title", "reason"]
                }
            },
            "multiDayPlan": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "dayLabel": { "type": "STRING" },
                        "slots": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "time": { "type": "STRING" },
                                    "activity": { "type": "STRING" },
                                    "durationMinutes": { "type": "NUMBER" },
                                    "type": { "type": "STRING", "enum": ["Work", "Break", "Flex"] }
                                },
                                "required": ["time", "activity", "durationMinutes", "type"]
                            }
                        }
                    },
                    "required": ["dayLabel", "slots"]
                }
            },
            "microTasks": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "title": { "type": "STRING" },
                        "duration": { "type": "STRING" },
                        "checked": { "type": "BOOLEAN" }
                    },
                    "required": ["id", "title", "duration", "checked"]
                }
            },
            "motivationTip": { "type": "STRING" }
        },
        "required": ["priorityOrder", "multiDayPlan", "microTasks", "motivationTip"]
    })
}

pub fn analysis_schema() -> Value {
    let string_list = json!({ "type": "ARRAY", "items": { "type": "STRING" } });
    json!({
        "type": "OBJECT",
        "properties": {
            "procrastinationPatterns": string_list,
            "weakTimeSlots": string_list,
            "suggestedImprovements": string_list,
            "behavioralAdvice": { "type": "STRING" },
            "scheduleAdjustments": { "type": "STRING" }
        },
        "required": [
            "procrastinationPatterns",
            "weakTimeSlots",
            "suggestedImprovements",
            "behavioralAdvice",
            "scheduleAdjustments"
        ]
    })
}

pub fn celebration_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "encouragement": { "type": "STRING" },
            "productivityTip": { "type": "STRING" },
            "tomorrowChallenge": { "type": "STRING" }
        },
        "required": ["encouragement", "productivityTip", "tomorrowChallenge"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, PlanSettings, Task};

    #[test]
    fn test_plan_prompt_echoes_context() {
        let task = Task {
            id: "t1".to_string(),
            title: "Lab".to_string(),
            subject: "Physics".to_string(),
            deadline: None,
            difficulty: Difficulty::Hard,
            is_exam: true,
            description: None,
        };
        let context = PlanContext::new(
            vec![task],
            PlanSettings {
                energy_level: 7,
                available_hours_per_day: 4.0,
                days_to_plan: 1,
            },
        );

        let prompt = plan_prompt(&context).expect("Failed to build prompt");
        assert!(prompt.contains("Generate a 1-day productivity plan."));
        assert!(prompt.contains("exactly 1 days"));
        assert!(prompt.contains("4 hours per day"));
        assert!(prompt.contains("7/10"));
        assert!(prompt.contains(r#""isExam":true"#));
        assert!(prompt.contains(r#""difficulty":"Hard""#));
    }

    #[test]
    fn test_schemas_require_every_field() {
        let plan = plan_schema();
        assert_eq!(plan["required"].as_array().map(Vec::len), Some(4));
        assert_eq!(analysis_schema()["required"].as_array().map(Vec::len), Some(5));
        assert_eq!(celebration_schema()["required"].as_array().map(Vec::len), Some(3));
    }
}
