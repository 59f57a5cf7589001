//! Integration tests for the stats command

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{init_journal, journal_cmd};

#[test]
fn test_stats_on_empty_journal() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    journal_cmd(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak: 0 days"))
        .stdout(predicate::str::contains("Best streak:    0 days"))
        .stdout(predicate::str::contains("0% complete"))
        .stdout(predicate::str::contains("Problems: Easy 0  Medium 0  Hard 0"));
}

#[test]
fn test_stats_after_logging_today() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    for (title, difficulty) in [
        ("Two Sum", "easy"),
        ("3Sum", "medium"),
        ("Valid Anagram", "easy"),
    ] {
        journal_cmd(temp.path())
            .args(["log", "--title", title, "--difficulty", difficulty])
            .assert()
            .success();
    }
    journal_cmd(temp.path())
        .args(["pattern", "add", "--title", "Hashing", "--description", "lookups"])
        .args(["--difficulty", "easy"])
        .assert()
        .success();

    journal_cmd(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak: 1 day\n"))
        .stdout(predicate::str::contains("Best streak:    1 day\n"))
        .stdout(predicate::str::contains("[######--------------] 30% complete"))
        .stdout(predicate::str::contains("■■■ 3"))
        .stdout(predicate::str::contains("Problems: Easy 2  Medium 1  Hard 0"))
        .stdout(predicate::str::contains("Patterns: Easy 1  Medium 0  Hard 0"));
}

#[test]
fn test_stats_uses_configured_goals() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    journal_cmd(temp.path())
        .args(["config", "weekly_goal", "2"])
        .assert()
        .success();
    for title in ["A", "B", "C"] {
        journal_cmd(temp.path())
            .args(["log", "--title", title, "--difficulty", "hard"])
            .assert()
            .success();
    }

    journal_cmd(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("[####################] 150% complete"));
}
