use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn tutor_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tutor").expect("Failed to find tutor binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_create_assignment_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tutor_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "assignment",
            "create",
            "Algebra homework",
            "--due",
            "2026-09-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algebra homework"))
        .stdout(predicate::str::contains("Created assignment with ID: 1"));
}

#[test]
fn test_cli_create_assignment_rejects_bad_date() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tutor_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "assignment",
            "create",
            "Broken",
            "--due",
            "whenever",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date or timestamp"));
}

#[test]
fn test_cli_list_empty_assignments() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tutor_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "assignment",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No assignments found."));
}

#[test]
fn test_cli_list_hides_completed_by_default() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tutor_cmd()
        .args([
            "--database-file",
            db_arg,
            "assignment",
            "create",
            "Finished work",
            "--due",
            "2026-09-01",
        ])
        .assert()
        .success();

    tutor_cmd()
        .args(["--database-file", db_arg, "assignment", "complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked as completed"));

    tutor_cmd()
        .args(["--database-file", db_arg, "assignment", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No assignments found."));

    tutor_cmd()
        .args(["--database-file", db_arg, "assignment", "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Finished work"));
}

#[test]
fn test_cli_list_json_output() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tutor_cmd()
        .args([
            "--database-file",
            db_arg,
            "assignment",
            "create",
            "Serialized",
            "--due",
            "2026-09-01",
        ])
        .assert()
        .success();

    tutor_cmd()
        .args(["--database-file", db_arg, "assignment", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Serialized\""));
}

#[test]
fn test_cli_add_and_show_question() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tutor_cmd()
        .args([
            "--database-file",
            db_arg,
            "assignment",
            "create",
            "Worksheet",
            "--due",
            "2026-09-01",
        ])
        .assert()
        .success();

    tutor_cmd()
        .args([
            "--database-file",
            db_arg,
            "question",
            "add",
            "1",
            "Solve 2x = 4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added question with ID: 1"));

    tutor_cmd()
        .args(["--database-file", db_arg, "question", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solve 2x = 4"));
}

#[test]
fn test_cli_add_question_to_missing_assignment_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tutor_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "question",
            "add",
            "42",
            "Orphan",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("42"));
}

#[test]
fn test_cli_solve_steps_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tutor_cmd()
        .args([
            "--database-file",
            db_arg,
            "assignment",
            "create",
            "Worksheet",
            "--due",
            "2026-09-01",
        ])
        .assert()
        .success();

    tutor_cmd()
        .args(["--database-file", db_arg, "question", "add", "1", "Solve x"])
        .assert()
        .success();

    tutor_cmd()
        .args(["--database-file", db_arg, "solve", "steps", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No steps generated yet."));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tutor_cmd()
        .args([
            "--database-file",
            db_arg,
            "assignment",
            "create",
            "Keep me",
            "--due",
            "2026-09-01",
        ])
        .assert()
        .success();

    tutor_cmd()
        .args(["--database-file", db_arg, "assignment", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--confirm"));

    // Still listed
    tutor_cmd()
        .args(["--database-file", db_arg, "assignment", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep me"));

    tutor_cmd()
        .args([
            "--database-file",
            db_arg,
            "assignment",
            "delete",
            "1",
            "--confirm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted assignment 1"));
}

#[test]
fn test_cli_subjects_and_topics() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tutor_cmd()
        .args([
            "--database-file",
            db_arg,
            "subject",
            "create",
            "Mathematics",
            "--icon",
            "📐",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created subject with ID: 1"));

    tutor_cmd()
        .args([
            "--database-file",
            db_arg,
            "subject",
            "add-topic",
            "1",
            "Quadratic equations",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quadratic equations"));

    tutor_cmd()
        .args(["--database-file", db_arg, "subject", "topics", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quadratic equations"));
}

#[test]
fn test_cli_lecture_log_and_list() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tutor_cmd()
        .args([
            "--database-file",
            db_arg,
            "lecture",
            "log",
            "Kinematics",
            "--held",
            "2026-08-20",
            "--notes",
            "Velocity and acceleration",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged lecture with ID: 1"));

    tutor_cmd()
        .args(["--database-file", db_arg, "lecture", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kinematics"))
        .stdout(predicate::str::contains("Velocity and acceleration"));
}

#[test]
fn test_cli_config_roundtrip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tutor_cmd()
        .args(["--database-file", db_arg, "config", "get", "default_mode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_mode is not set"));

    tutor_cmd()
        .args(["--database-file", db_arg, "config", "set", "default_mode", "guided"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set default_mode = guided"));

    tutor_cmd()
        .args(["--database-file", db_arg, "config", "get", "default_mode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_mode = guided"));

    tutor_cmd()
        .args(["--database-file", db_arg, "config", "unset", "default_mode"])
        .assert()
        .success();
}

#[test]
fn test_cli_config_rejects_invalid_mode() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tutor_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "config",
            "set",
            "default_mode",
            "telepathic",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid explanation mode"));
}
