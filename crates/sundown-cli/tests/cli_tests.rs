#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary data directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with plain output whose power actions run `program` instead of
/// the real `shutdown`.
fn sundown_cmd(temp_dir: &TempDir, program: &str) -> Command {
    let mut cmd = Command::cargo_bin("sundown").expect("Failed to find sundown binary");
    cmd.arg("--no-color")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--command", program]);
    cmd
}

#[test]
fn test_cli_status_when_idle() {
    let temp_dir = create_cli_test_environment();

    sundown_cmd(&temp_dir, "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("No shutdown scheduled."))
        .stdout(predicate::str::contains("No activity recorded."));
}

#[test]
fn test_cli_schedule_and_status() {
    let temp_dir = create_cli_test_environment();

    sundown_cmd(&temp_dir, "true")
        .args(["schedule", "--in", "10m", "--action", "restart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Restart Scheduled"))
        .stdout(predicate::str::contains("System will restart at "));

    sundown_cmd(&temp_dir, "true")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restart scheduled for "))
        .stdout(predicate::str::contains("remaining)"))
        .stdout(predicate::str::contains("Scheduled restart for "));

    assert!(temp_dir.path().join("schedule.json").exists());
}

#[test]
fn test_cli_schedule_requires_time() {
    let temp_dir = create_cli_test_environment();

    sundown_cmd(&temp_dir, "true")
        .arg("schedule")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_cli_schedule_in_past() {
    let temp_dir = create_cli_test_environment();

    sundown_cmd(&temp_dir, "true")
        .args(["schedule", "--at", "2001-01-01T00:00:00Z"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: **Validation**"))
        .stdout(predicate::str::contains("must be in the future"));
}

#[test]
fn test_cli_schedule_command_failure() {
    let temp_dir = create_cli_test_environment();

    sundown_cmd(&temp_dir, "false")
        .args(["schedule", "--in", "1h"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: **Command failed**"))
        .stdout(predicate::str::contains("Command exited with code 1."));

    assert!(!temp_dir.path().join("schedule.json").exists());
}

#[test]
fn test_cli_cancel_flow() {
    let temp_dir = create_cli_test_environment();

    sundown_cmd(&temp_dir, "true")
        .args(["cancel", "--password", "pw"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "There is no scheduled shutdown to cancel.",
        ));

    sundown_cmd(&temp_dir, "true")
        .args(["schedule", "--in", "30m"])
        .assert()
        .success();

    sundown_cmd(&temp_dir, "true")
        .args(["cancel", "--password", "pw"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Set a password before attempting to cancel a shutdown.",
        ));

    sundown_cmd(&temp_dir, "true")
        .args(["password", "--password", "pw", "--confirm", "pw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password saved successfully."));

    sundown_cmd(&temp_dir, "true")
        .arg("cancel")
        .write_stdin("wrong\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Incorrect password. Cancellation aborted.",
        ));

    sundown_cmd(&temp_dir, "true")
        .arg("cancel")
        .write_stdin("pw\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Shutdown Canceled"));

    sundown_cmd(&temp_dir, "true")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No shutdown scheduled."))
        .stdout(predicate::str::contains("Scheduled shutdown canceled."));
}

#[test]
fn test_cli_cancel_dismissed() {
    let temp_dir = create_cli_test_environment();

    sundown_cmd(&temp_dir, "true")
        .args(["password", "-p", "pw"])
        .assert()
        .success();
    sundown_cmd(&temp_dir, "true")
        .args(["schedule", "--in", "30m", "-a", "hibernate"])
        .assert()
        .success();

    sundown_cmd(&temp_dir, "true")
        .arg("cancel")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing was canceled"));
}

#[test]
fn test_cli_password_from_stdin() {
    let temp_dir = create_cli_test_environment();

    sundown_cmd(&temp_dir, "true")
        .arg("password")
        .write_stdin("secret\nsecreT\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Passwords do not match."));

    sundown_cmd(&temp_dir, "true")
        .arg("password")
        .write_stdin("secret\nsecret\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Password saved successfully."));

    assert!(temp_dir.path().join("settings.json").exists());
}

#[test]
fn test_cli_now_and_log() {
    let temp_dir = create_cli_test_environment();

    sundown_cmd(&temp_dir, "true")
        .args(["now", "logoff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Logging Off"));

    sundown_cmd(&temp_dir, "true")
        .args(["now", "reboot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## ⚠ Restarting"));

    sundown_cmd(&temp_dir, "true")
        .args(["log", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restart command executed."))
        .stdout(predicate::str::contains("Log off command executed.").not());
}

#[test]
fn test_cli_theme_toggle() {
    let temp_dir = create_cli_test_environment();

    sundown_cmd(&temp_dir, "true")
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: **Theme**: Dark mode enabled."));

    sundown_cmd(&temp_dir, "true")
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Light mode enabled."));
}

#[test]
fn test_cli_watch_when_idle_exits() {
    let temp_dir = create_cli_test_environment();

    sundown_cmd(&temp_dir, "true")
        .args(["status", "--watch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No shutdown scheduled."));
}
