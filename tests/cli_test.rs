/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use common::{ClaudeDirBuilder, RecordBuilder, TranscriptBuilder, warmup_transcript};
use predicates::prelude::*;

/// Binary with its Claude directory pointed at `claude_dir`
fn claude_notes(claude_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_claude-notes"));
    cmd.env("CLAUDE_CONFIG_DIR", claude_dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_list_with_threshold() {
    let claude = ClaudeDirBuilder::new()
        .with_project(
            "-work-demo-app",
            &[
                warmup_transcript("long.jsonl", "2025-11-06T10:00:10Z"),
                TranscriptBuilder::new("short.jsonl")
                    .with_warmup()
                    .with_record(RecordBuilder::user("Just one").timestamp("2025-11-07T10:00:00Z")),
            ],
        )
        .build();

    claude_notes(claude.path())
        .args(["list", "/work/demo_app", "--min-messages", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-work-demo-app"))
        .stdout(predicate::str::contains("matched with 1 ambiguous character(s)"))
        .stdout(predicate::str::contains("Conversations: 1"))
        .stdout(predicate::str::contains("2025-11-06 10:00  long  5 messages"));

    claude_notes(claude.path())
        .args(["list", "/work/demo_app", "--min-messages", "3", "--no-trim-warmup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversations: 2"));
}

#[test]
fn test_cli_list_past_excludes_old_conversations() {
    let claude = ClaudeDirBuilder::new()
        .with_project("-work-demo-app", &[warmup_transcript("long.jsonl", "2020-01-01T00:00:00Z")])
        .build();

    claude_notes(claude.path())
        .args(["list", "/work/demo-app", "--min-messages", "1", "--past", "week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversations: 0"));
}

#[test]
fn test_cli_list_unknown_project() {
    let claude = ClaudeDirBuilder::new().build();

    claude_notes(claude.path())
        .args(["list", "/nowhere/at/all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No Claude Code project found"));
}

#[test]
fn test_cli_list_rejects_invalid_range() {
    let claude = ClaudeDirBuilder::new().build();
    claude_notes(claude.path()).args(["list", "--past", "fortnight"]).assert().failure();
}

#[test]
fn test_cli_projects_command() {
    let claude = ClaudeDirBuilder::new()
        .with_project("-work-a", &[warmup_transcript("one.jsonl", "2025-01-01T00:00:00Z")])
        .with_project("-work-b", &[])
        .build();

    claude_notes(claude.path())
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("Projects: 2"))
        .stdout(predicate::str::contains("-work-a (1 conversations)"))
        .stdout(predicate::str::contains("-work-b (0 conversations)"));
}

#[test]
fn test_cli_no_command_shows_help_message() {
    let claude = ClaudeDirBuilder::new().build();
    claude_notes(claude.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    let claude = ClaudeDirBuilder::new().build();
    claude_notes(claude.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse Claude Code conversation transcripts"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("projects"));
}

#[test]
fn test_cli_version_flag() {
    let claude = ClaudeDirBuilder::new().build();
    claude_notes(claude.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}
