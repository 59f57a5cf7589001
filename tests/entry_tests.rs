//! Integration tests for journal entry commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{created_id, init_journal, journal_cmd};

fn log_problem(root: &std::path::Path, args: &[&str]) -> i64 {
    let output = journal_cmd(root)
        .arg("log")
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged entry"))
        .get_output()
        .stdout
        .clone();
    created_id(&output)
}

fn read_entries(root: &std::path::Path) -> Vec<serde_json::Value> {
    let blob = fs::read_to_string(root.join(".grindlog/store/journalEntries.json")).unwrap();
    serde_json::from_str(&blob).unwrap()
}

#[test]
fn test_log_and_list() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    log_problem(
        temp.path(),
        &["--title", "Two Sum", "--difficulty", "easy", "--platform", "LeetCode"],
    );
    log_problem(temp.path(), &["--title", "Word Ladder", "--difficulty", "hard"]);

    journal_cmd(temp.path())
        .args(["entry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Two Sum (LeetCode)"))
        .stdout(predicate::str::contains("Word Ladder"));

    journal_cmd(temp.path())
        .args(["entry", "list", "--difficulty", "easy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Two Sum"))
        .stdout(predicate::str::contains("Word Ladder").not());
}

#[test]
fn test_entry_add_is_same_as_log() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    journal_cmd(temp.path())
        .args(["entry", "add", "--title", "Jump Game", "--difficulty", "medium"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged entry"));

    assert_eq!(read_entries(temp.path()).len(), 1);
}

#[test]
fn test_stored_record_shape() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    let id = log_problem(
        temp.path(),
        &[
            "--title", "LRU Cache", "--difficulty", "medium", "--time", "0", "--rating", "3",
            "--topic", "Design",
        ],
    );

    let entries = read_entries(temp.path());
    assert_eq!(entries.len(), 1);
    let record = &entries[0];
    assert_eq!(record["id"], serde_json::json!(id));
    assert_eq!(record["title"], "LRU Cache");
    assert_eq!(record["difficulty"], "Medium");
    assert_eq!(record["time"], serde_json::json!(0));
    assert_eq!(record["attempts"], "");
    assert_eq!(record["rating"], "⭐️⭐️⭐️");
    assert_eq!(record["topic"], "Design");
    assert!(record["date"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn test_log_without_title_fails_and_keeps_collection() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    log_problem(temp.path(), &["--title", "Two Sum", "--difficulty", "easy"]);

    journal_cmd(temp.path())
        .args(["log", "--difficulty", "easy"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Missing required field: title"));

    journal_cmd(temp.path())
        .args(["log", "--title", "No level"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Missing required field: difficulty"));

    assert_eq!(read_entries(temp.path()).len(), 1);
}

#[test]
fn test_edit_keeps_id_and_date() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    let id = log_problem(
        temp.path(),
        &["--title", "Two Sum", "--difficulty", "easy", "--time", "30"],
    );
    let before = read_entries(temp.path())[0].clone();

    journal_cmd(temp.path())
        .args(["entry", "edit", &id.to_string(), "--title", "Two Sum II"])
        .args(["--attempts", "2", "--clear", "time"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated entry"));

    let after = read_entries(temp.path())[0].clone();
    assert_eq!(after["id"], before["id"]);
    assert_eq!(after["date"], before["date"]);
    assert_eq!(after["title"], "Two Sum II");
    assert_eq!(after["attempts"], serde_json::json!(2));
    assert_eq!(after["time"], "");
}

#[test]
fn test_edit_missing_entry() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    journal_cmd(temp.path())
        .args(["entry", "edit", "777", "--title", "Ghost"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Journal entry not found: 777"));
}

#[test]
fn test_show_entry_with_notes() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    let id = log_problem(
        temp.path(),
        &[
            "--title",
            "Course Schedule",
            "--difficulty",
            "medium",
            "--notes",
            "- topological sort\n- watch for cycles",
            "--code",
            "indegree = [0] * n",
        ],
    );

    journal_cmd(temp.path())
        .args(["entry", "show", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Course Schedule [Medium]"))
        .stdout(predicate::str::contains("  • topological sort"))
        .stdout(predicate::str::contains("indegree = [0] * n"));
}

#[test]
fn test_delete_entry_is_idempotent() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    let keep = log_problem(temp.path(), &["--title", "Keep", "--difficulty", "easy"]);
    let doomed = log_problem(temp.path(), &["--title", "Doomed", "--difficulty", "easy"]);
    assert_ne!(keep, doomed);

    for _ in 0..2 {
        journal_cmd(temp.path())
            .args(["entry", "delete", &doomed.to_string()])
            .assert()
            .success();
    }

    let entries = read_entries(temp.path());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], serde_json::json!(keep));
}

#[test]
fn test_corrupt_store_starts_empty_with_warning() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    fs::write(
        temp.path().join(".grindlog/store/journalEntries.json"),
        "[{ this is not json",
    )
    .unwrap();

    journal_cmd(temp.path())
        .args(["entry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"))
        .stderr(predicate::str::contains(
            "could not load journalEntries (corrupt data:",
        ))
        .stderr(predicate::str::contains("Storage error").not());
}

#[test]
fn test_reads_snapshot_written_by_form_app() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    fs::write(
        temp.path().join(".grindlog/store/journalEntries.json"),
        r#"[{"title":"Two Sum","platform":"LeetCode","difficulty":"Easy","time":"25","attempts":"","topic":"","rating":"⭐️⭐️","notes":"","code":"","id":1704067200000,"date":"2024-01-01T00:00:00.000Z"}]"#,
    )
    .unwrap();

    journal_cmd(temp.path())
        .args(["entry", "show", "1704067200000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("time: 25 min"))
        .stdout(predicate::str::contains("rating: ⭐️⭐️"));
}
