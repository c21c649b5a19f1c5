use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Address that refuses connections, so AI calls fail fast and offline
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command bound to a test database
fn focusflow_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("focusflow").expect("Failed to find focusflow binary");
    cmd.env_remove("GEMINI_API_KEY")
        .env_remove("FOCUSFLOW_MODEL")
        .env_remove("FOCUSFLOW_API_BASE_URL")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path)
        .args(["--api-base-url", UNREACHABLE_API, "--timeout-secs", "5"]);
    cmd
}

/// Adds a task and returns its generated ID
fn add_task(temp_dir: &TempDir, title: &str, subject: &str) -> String {
    let output = focusflow_cmd(temp_dir)
        .args(["task", "add", title, "--subject", subject])
        .output()
        .expect("Failed to run CLI");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output");
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Added task with ID: "))
        .expect("ID line present")
        .trim()
        .to_string()
}

#[test]
fn test_cli_first_run_shows_welcome() {
    let temp_dir = create_cli_test_environment();

    focusflow_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Welcome to FocusFlow"));
}

#[test]
fn test_cli_onboard_then_dashboard() {
    let temp_dir = create_cli_test_environment();

    focusflow_cmd(&temp_dir)
        .arg("onboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("You're all set"));

    focusflow_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("# FocusFlow"))
        .stdout(predicate::str::contains("Streak: 0 days"))
        .stdout(predicate::str::contains("No active plan."))
        .stdout(predicate::str::contains("Welcome").not());
}

#[test]
fn test_cli_add_task_with_details() {
    let temp_dir = create_cli_test_environment();

    focusflow_cmd(&temp_dir)
        .args([
            "task",
            "add",
            "Lab report",
            "--subject",
            "Physics",
            "--deadline",
            "2025-03-01",
            "--difficulty",
            "hard",
            "--exam",
            "--description",
            "Pendulum experiment",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task with ID: "))
        .stdout(predicate::str::contains("**Lab report** (Physics) · Hard"))
        .stdout(predicate::str::contains("Exam"))
        .stdout(predicate::str::contains("Due 2025-03-01"))
        .stdout(predicate::str::contains("Pendulum experiment"));
}

#[test]
fn test_cli_add_task_rejects_bad_deadline() {
    let temp_dir = create_cli_test_environment();

    focusflow_cmd(&temp_dir)
        .args(["task", "add", "Essay", "--subject", "History", "--deadline", "soon"])
        .assert()
        .failure();
}

#[test]
fn test_cli_add_task_rejects_blank_title() {
    let temp_dir = create_cli_test_environment();

    focusflow_cmd(&temp_dir)
        .args(["task", "add", "   ", "--subject", "History"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title"));
}

#[test]
fn test_cli_list_tasks_in_order() {
    let temp_dir = create_cli_test_environment();

    focusflow_cmd(&temp_dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks in the backlog."));

    add_task(&temp_dir, "Essay", "History");
    add_task(&temp_dir, "Flashcards", "Spanish");

    let output = focusflow_cmd(&temp_dir)
        .args(["task", "ls"])
        .output()
        .expect("Failed to run CLI");
    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output");

    let essay = stdout.find("Essay").expect("Essay listed");
    let flashcards = stdout.find("Flashcards").expect("Flashcards listed");
    assert!(essay < flashcards);
}

#[test]
fn test_cli_remove_task() {
    let temp_dir = create_cli_test_environment();
    let id = add_task(&temp_dir, "Essay", "History");

    focusflow_cmd(&temp_dir)
        .args(["task", "remove", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Removed task 'Essay' (ID: {id})"
        )));

    focusflow_cmd(&temp_dir)
        .args(["task", "rm", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("No task with ID"));

    focusflow_cmd(&temp_dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks in the backlog."));
}

#[test]
fn test_cli_nudge_falls_back_when_offline() {
    let temp_dir = create_cli_test_environment();
    let id = add_task(&temp_dir, "Essay", "History");

    focusflow_cmd(&temp_dir)
        .args(["task", "nudge", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Time to lock in!"));
}

#[test]
fn test_cli_nudge_unknown_task_fails() {
    let temp_dir = create_cli_test_environment();

    focusflow_cmd(&temp_dir)
        .args(["task", "nudge", "missing"])
        .assert()
        .failure();
}

#[test]
fn test_cli_plan_show_without_plan() {
    let temp_dir = create_cli_test_environment();

    focusflow_cmd(&temp_dir)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No active plan."));
}

#[test]
fn test_cli_generate_with_empty_backlog() {
    let temp_dir = create_cli_test_environment();

    focusflow_cmd(&temp_dir)
        .args(["plan", "generate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Your backlog is empty"));
}

#[test]
fn test_cli_generate_fails_gracefully_offline() {
    let temp_dir = create_cli_test_environment();
    add_task(&temp_dir, "Essay", "History");

    focusflow_cmd(&temp_dir)
        .args(["plan", "generate", "--days", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not generate a plan"));

    focusflow_cmd(&temp_dir)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No active plan."));
}

#[test]
fn test_cli_check_without_plan() {
    let temp_dir = create_cli_test_environment();

    focusflow_cmd(&temp_dir)
        .args(["plan", "check", "m1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No active plan."));
}

#[test]
fn test_cli_settings_show_and_update() {
    let temp_dir = create_cli_test_environment();

    focusflow_cmd(&temp_dir)
        .args(["plan", "settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Energy level: 7/10"))
        .stdout(predicate::str::contains("Hours per day: 4"))
        .stdout(predicate::str::contains("Days to plan: 3"));

    focusflow_cmd(&temp_dir)
        .args(["plan", "settings", "--energy", "5", "--days", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated plan settings"))
        .stdout(predicate::str::contains("- Energy level set to 5"))
        .stdout(predicate::str::contains("Days to plan: 2"));

    focusflow_cmd(&temp_dir)
        .args(["plan", "settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Energy level: 5/10"));
}

#[test]
fn test_cli_settings_validation() {
    let temp_dir = create_cli_test_environment();

    focusflow_cmd(&temp_dir)
        .args(["plan", "settings", "--energy", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Energy level must be between 1 and 10"));

    focusflow_cmd(&temp_dir)
        .args(["plan", "settings", "--days", "0"])
        .assert()
        .failure();
}

#[test]
fn test_cli_streak_starts_at_zero() {
    let temp_dir = create_cli_test_environment();

    focusflow_cmd(&temp_dir)
        .arg("streak")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak: 0 days"));
}

#[test]
fn test_cli_insights_offline_fails() {
    let temp_dir = create_cli_test_environment();

    focusflow_cmd(&temp_dir)
        .args(["insights", "--refresh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not fetch insights"));
}
