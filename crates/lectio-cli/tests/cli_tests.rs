use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_plans(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("plans.json");
    fs::write(
        &path,
        r#"{
            "daily": {
                "name": "Straight Through",
                "days": ["Genesis 1-3", "Genesis 4-6", "Genesis 7-9"]
            }
        }"#,
    )
    .expect("Failed to write plans file");
    path
}

/// Base command with an isolated database, a tiny plan library, and a
/// past reference year so the starting day is deterministic.
fn lectio(dir: &TempDir, plans: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lectio").expect("Binary should build");
    cmd.arg("--database-file")
        .arg(dir.path().join("lectio.db"))
        .arg("--plans-file")
        .arg(plans)
        .arg("--year")
        .arg("1999")
        .arg("--no-color");
    cmd
}

#[test]
fn test_plans_lists_the_library() {
    let dir = TempDir::new().unwrap();
    let plans = write_plans(&dir);

    lectio(&dir, &plans)
        .arg("plans")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading Plans"))
        .stdout(predicate::str::contains("daily"))
        .stdout(predicate::str::contains("Straight Through"));
}

#[test]
fn test_show_without_selection_prints_notice() {
    let dir = TempDir::new().unwrap();
    let plans = write_plans(&dir);

    lectio(&dir, &plans)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No plan selected"));
}

#[test]
fn test_select_then_show_persists_across_invocations() {
    let dir = TempDir::new().unwrap();
    let plans = write_plans(&dir);

    lectio(&dir, &plans)
        .args(["select", "daily"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 1 - Fri, Jan 1"))
        .stdout(predicate::str::contains("Genesis 1-3"));

    lectio(&dir, &plans)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Genesis 1-3"));

    lectio(&dir, &plans)
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 2 - Sat, Jan 2"))
        .stdout(predicate::str::contains("Genesis 4-6"));
}

#[test]
fn test_toggle_updates_stats() {
    let dir = TempDir::new().unwrap();
    let plans = write_plans(&dir);

    lectio(&dir, &plans).args(["select", "daily"]).assert().success();

    lectio(&dir, &plans)
        .arg("toggle")
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked day 1 complete."));

    lectio(&dir, &plans)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Days completed: 1"))
        .stdout(predicate::str::contains("Current streak: 1"));
}

#[test]
fn test_select_unknown_plan_fails() {
    let dir = TempDir::new().unwrap();
    let plans = write_plans(&dir);

    lectio(&dir, &plans)
        .args(["select", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_goto_beyond_plan_content_shows_completion() {
    let dir = TempDir::new().unwrap();
    let plans = write_plans(&dir);

    lectio(&dir, &plans).args(["select", "daily"]).assert().success();

    lectio(&dir, &plans)
        .args(["goto", "1999-02-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 32"))
        .stdout(predicate::str::contains("You have completed the entire plan!"));
}
