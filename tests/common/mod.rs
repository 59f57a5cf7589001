#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn grindlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("grindlog").unwrap();
    cmd.env_remove("GRINDLOG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an initialized journal
pub fn journal_cmd(root: &Path) -> Command {
    let mut cmd = grindlog_cmd();
    cmd.current_dir(root);
    cmd
}

pub fn init_journal(root: &Path) {
    grindlog_cmd().arg("init").arg(root).assert().success();
}

/// Pull the id out of "Added pattern 123: ..." / "Logged entry 123: ..."
pub fn created_id(stdout: &[u8]) -> i64 {
    let text = String::from_utf8_lossy(stdout);
    text.split_whitespace()
        .find_map(|word| word.trim_end_matches(':').parse::<i64>().ok())
        .expect("no id in output")
}
