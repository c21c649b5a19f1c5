#[cfg(test)]
mod model_tests {
    use jiff::civil::date;

    use crate::{
        error::FocusError,
        models::{
            AnalysisResult, Difficulty, PlanContext, PlanSettings, ProductivityPlan, SlotKind,
            StreakCelebration, Task,
        },
    };

    const PLAN_JSON: &str = r#"{
        "priorityOrder": [
            {"id": "t1", "title": "Lab", "reason": "Exam tomorrow"}
        ],
        "multiDayPlan": [
            {
                "dayLabel": "Day 1",
                "slots": [
                    {"time": "09:00", "activity": "Lab write-up", "durationMinutes": 50, "type": "Work"},
                    {"time": "09:50", "activity": "Walk", "durationMinutes": 10, "type": "Break"},
                    {"time": "10:00", "activity": "Catch-up", "durationMinutes": 30.5, "type": "Flex"}
                ]
            }
        ],
        "microTasks": [
            {"id": "m1", "title": "Outline the method", "duration": "15 min"},
            {"id": "m2", "title": "Plot the results", "duration": "25 min", "checked": true}
        ],
        "motivationTip": "Small steps add up."
    }"#;

    fn create_test_task() -> Task {
        Task {
            id: "t1".to_string(),
            title: "Lab".to_string(),
            subject: "Physics".to_string(),
            deadline: Some(date(2025, 3, 1)),
            difficulty: Difficulty::Hard,
            is_exam: true,
            description: Some("Write up the pendulum experiment".to_string()),
        }
    }

    #[test]
    fn test_plan_parses_service_json() {
        let plan: ProductivityPlan = serde_json::from_str(PLAN_JSON).expect("valid plan JSON");

        assert_eq!(plan.priority_order[0].reason, "Exam tomorrow");
        assert_eq!(plan.multi_day_plan.len(), 1);

        let slots = &plan.multi_day_plan[0].slots;
        assert_eq!(slots[0].kind, SlotKind::Work);
        assert_eq!(slots[1].kind, SlotKind::Break);
        assert_eq!(slots[2].kind, SlotKind::Flex);
        assert_eq!(slots[2].duration_minutes, 30.5);

        assert!(!plan.micro_tasks[0].checked);
        assert!(plan.micro_tasks[1].checked);
    }

    #[test]
    fn test_plan_rejects_unknown_slot_type() {
        let json = PLAN_JSON.replace(r#""type": "Flex""#, r#""type": "nap""#);
        assert!(serde_json::from_str::<ProductivityPlan>(&json).is_err());
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let value = serde_json::to_value(create_test_task()).expect("serializable");

        assert_eq!(value["isExam"], true);
        assert_eq!(value["deadline"], "2025-03-01");
        assert_eq!(value["difficulty"], "Hard");
    }

    #[test]
    fn test_task_deserializes_with_defaults() {
        let task: Task =
            serde_json::from_str(r#"{"id": "x", "title": "Read", "subject": "English"}"#)
                .expect("minimal task");

        assert_eq!(task.difficulty, Difficulty::Medium);
        assert!(!task.is_exam);
        assert!(task.deadline.is_none());
        assert!(task.description.is_none());
    }

    #[test]
    fn test_generated_ids_are_short_and_distinct() {
        let first = Task::generate_id();
        let second = Task::generate_id();

        assert_eq!(first.len(), 9);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first, second);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("brutal".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_settings_validation() {
        assert!(PlanSettings::default().validate().is_ok());

        let invalid = [
            PlanSettings {
                energy_level: 0,
                ..Default::default()
            },
            PlanSettings {
                energy_level: 11,
                ..Default::default()
            },
            PlanSettings {
                available_hours_per_day: 0.0,
                ..Default::default()
            },
            PlanSettings {
                available_hours_per_day: f64::NAN,
                ..Default::default()
            },
            PlanSettings {
                days_to_plan: 0,
                ..Default::default()
            },
        ];
        for settings in invalid {
            assert!(matches!(
                settings.validate(),
                Err(FocusError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn test_plan_context_carries_settings() {
        let settings = PlanSettings {
            energy_level: 7,
            available_hours_per_day: 4.0,
            days_to_plan: 1,
        };
        let context = PlanContext::new(vec![create_test_task()], settings);
        let value = serde_json::to_value(&context).expect("serializable");

        assert_eq!(value["energyLevel"], 7);
        assert_eq!(value["availableHoursPerDay"], 4.0);
        assert_eq!(value["daysToPlan"], 1);
        assert_eq!(value["tasks"][0]["subject"], "Physics");
    }

    #[test]
    fn test_fallback_celebration() {
        let fallback = StreakCelebration::fallback();

        assert_eq!(fallback.encouragement, "Amazing work! You're unstoppable.");
        assert_eq!(
            fallback.productivity_tip,
            "Try the 5-minute rule: start for just 5 minutes to beat procrastination."
        );
        assert_eq!(
            fallback.tomorrow_challenge,
            "Complete your hardest task first thing tomorrow morning!"
        );
    }

    #[test]
    fn test_task_display() {
        let output = create_test_task().to_string();

        assert!(output.starts_with("- **Lab** (Physics) · Hard"));
        assert!(output.contains("Exam"));
        assert!(output.contains("Due 2025-03-01"));
        assert!(output.contains("  Write up the pendulum experiment"));
    }

    #[test]
    fn test_analysis_display() {
        let analysis = AnalysisResult {
            procrastination_patterns: vec!["Delays physics".to_string()],
            weak_time_slots: vec!["Late evening".to_string()],
            suggested_improvements: vec!["Start labs earlier".to_string()],
            behavioral_advice: "Break work into chunks.".to_string(),
            schedule_adjustments: "Move physics to mornings.".to_string(),
        };
        let output = analysis.to_string();

        assert!(output.contains("## Procrastination Patterns\n\n- Delays physics"));
        assert!(output.contains("## Weak Time Slots\n\n- Late evening"));
        assert!(output.contains("Move physics to mornings."));
    }
}
