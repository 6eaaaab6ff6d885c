use assert_cmd::Command;
use predicates::prelude::*;

fn cronforge() -> Command {
    Command::cargo_bin("cronforge").unwrap()
}

// ============================================================
// Natural-language phrases
// ============================================================

#[test]
fn test_phrase_weekday() {
    cronforge()
        .arg("every weekday at 9am")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 9 * * 1-5"));
}

#[test]
fn test_phrase_prints_description() {
    cronforge()
        .arg("every monday at 9am")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 9 * * 1"))
        .stdout(predicate::str::contains("Every Monday at 09:00"));
}

#[test]
fn test_phrase_every_minute() {
    cronforge()
        .arg("every minute")
        .assert()
        .success()
        .stdout(predicate::str::contains("* * * * *"));
}

#[test]
fn test_phrase_unparseable() {
    cronforge()
        .arg("gibberish text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse"));
}

#[test]
fn test_phrase_bad_time_fails() {
    cronforge().arg("every day at noon").assert().failure();
}

// ============================================================
// Explain
// ============================================================

#[test]
fn test_explain() {
    cronforge()
        .args(["--explain", "30 14 * * 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Every Monday at 14:30"));
}

#[test]
fn test_explain_malformed_is_not_an_error() {
    cronforge()
        .args(["--explain", "1 2 3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid cron"));
}

#[test]
fn test_explain_fallback() {
    cronforge()
        .args(["--explain", "*/5 * * * *"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cron: */5 * * * *"));
}

// ============================================================
// Compose mode
// ============================================================

#[test]
fn test_compose_defaults() {
    cronforge()
        .assert()
        .success()
        .stdout(predicate::str::contains("0 0 * * *"))
        .stdout(predicate::str::contains("Every day at 00:00"));
}

#[test]
fn test_compose_flags() {
    cronforge()
        .args(["--minute", "30", "--hour", "14", "--day-of-week", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("30 14 * * 1"))
        .stdout(predicate::str::contains("Every Monday at 14:30"));
}

#[test]
fn test_preset() {
    cronforge()
        .args(["--preset", "every-day-9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 9 * * *"));
}

#[test]
fn test_preset_unknown() {
    cronforge()
        .args(["--preset", "blorp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset"));
}

// ============================================================
// Flags
// ============================================================

#[test]
fn test_check_valid() {
    cronforge()
        .args(["--check", "every minute"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_check_requires_phrase() {
    cronforge()
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PHRASE"));
}

#[test]
fn test_check_invalid() {
    cronforge()
        .args(["--check", "every blorp at 9am"])
        .assert()
        .failure();
}

#[test]
fn test_json_output() {
    cronforge()
        .args(["--json", "every monday at 9am"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"expression\""))
        .stdout(predicate::str::contains("0 9 * * 1"))
        .stdout(predicate::str::contains("\"dayOfWeek\""));
}
