//! Integration tests comparing CLI output with the core Display
//! implementations, using state seeded directly through the store.

use std::process::Command;

use focusflow_core::{
    display::Tasks, DayPlan, Difficulty, MicroTask, PlanTracker, ProductivityPlan, SlotKind,
    Store, Task, TimeSlot,
};
use tempfile::TempDir;

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_focusflow"));
    cmd.env_remove("GEMINI_API_KEY")
        .env_remove("FOCUSFLOW_API_BASE_URL")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path)
        .args(["--api-base-url", "http://127.0.0.1:9", "--timeout-secs", "5"]);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

/// Helper function to create a seeded store with temporary database
async fn create_test_store() -> (Store, TempDir, String) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");
    let store = Store::open(&db_path).await.expect("Failed to open store");
    let db_path = db_path.to_str().expect("UTF-8 path").to_string();
    (store, temp_dir, db_path)
}

fn sample_plan() -> ProductivityPlan {
    ProductivityPlan {
        priority_order: vec![],
        multi_day_plan: vec![DayPlan {
            day_label: "Monday".to_string(),
            slots: vec![
                TimeSlot {
                    time: "16:00".to_string(),
                    activity: "Draft the method section".to_string(),
                    duration_minutes: 45.0,
                    kind: SlotKind::Work,
                },
                TimeSlot {
                    time: "16:45".to_string(),
                    activity: "Stretch".to_string(),
                    duration_minutes: 10.0,
                    kind: SlotKind::Break,
                },
            ],
        }],
        micro_tasks: vec![
            MicroTask {
                id: "m1".to_string(),
                title: "Outline".to_string(),
                duration: "15 min".to_string(),
                checked: false,
            },
            MicroTask {
                id: "m2".to_string(),
                title: "Draft".to_string(),
                duration: "30 min".to_string(),
                checked: false,
            },
        ],
        motivation_tip: "Progress over perfection.".to_string(),
    }
}

#[tokio::test]
async fn test_task_list_matches_display() {
    let (store, _temp_dir, db_path) = create_test_store().await;
    let task = Task {
        id: "abc123def".to_string(),
        title: "Lab report".to_string(),
        subject: "Physics".to_string(),
        deadline: None,
        difficulty: Difficulty::Hard,
        is_exam: true,
        description: None,
    };
    store.insert_task(task.clone()).await.expect("Failed to insert");

    let output = run_cli_command(&db_path, &["task", "list"]);
    assert_eq!(output, Tasks(vec![task]).to_string());
}

#[tokio::test]
async fn test_plan_show_matches_display() {
    let (store, _temp_dir, db_path) = create_test_store().await;
    let tracker = PlanTracker::new(sample_plan()).expect("valid plan");
    store
        .save_active_plan(tracker.clone())
        .await
        .expect("Failed to save plan");

    let output = run_cli_command(&db_path, &["plan", "show"]);
    assert_eq!(output, tracker.to_string());
    assert!(output.contains("- [ ] Outline (15 min)"));
    assert!(output.contains("### Monday"));
}

#[tokio::test]
async fn test_checking_every_micro_task_records_streak() {
    let (store, _temp_dir, db_path) = create_test_store().await;
    let tracker = PlanTracker::new(sample_plan()).expect("valid plan");
    store
        .save_active_plan(tracker)
        .await
        .expect("Failed to save plan");

    let output = run_cli_command(&db_path, &["plan", "check", "m1"]);
    assert!(output.contains("Checked m1. Progress: 1/2 (50%)"));
    assert!(!output.contains("Plan complete"));

    // The celebration request fails offline, so the fallback is shown
    let output = run_cli_command(&db_path, &["plan", "check", "m2"]);
    assert!(output.contains("Progress: 2/2 (100%)"));
    assert!(output.contains("Plan complete! Streak: 1 day"));
    assert!(output.contains("Amazing work! You're unstoppable."));

    let output = run_cli_command(&db_path, &["plan", "check", "m2"]);
    assert!(output.contains("Unchecked m2. Progress: 1/2 (50%)"));

    let output = run_cli_command(&db_path, &["plan", "check", "m2"]);
    assert!(!output.contains("Plan complete"));

    assert_eq!(store.streak().await.expect("Failed to read streak"), 1);
    let output = run_cli_command(&db_path, &["streak"]);
    assert!(output.contains("Current streak: 1 day"));
}

#[tokio::test]
async fn test_check_unknown_micro_task() {
    let (store, _temp_dir, db_path) = create_test_store().await;
    let tracker = PlanTracker::new(sample_plan()).expect("valid plan");
    store
        .save_active_plan(tracker.clone())
        .await
        .expect("Failed to save plan");

    let output = run_cli_command(&db_path, &["plan", "check", "m9"]);
    assert!(output.contains("No micro-task with ID m9 in the active plan."));

    let saved = store.active_plan().await.expect("Failed to load plan");
    assert_eq!(saved, Some(tracker));
}
