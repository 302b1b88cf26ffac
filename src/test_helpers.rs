//! Shared test utilities for the chronosite test suite.
//!
//! Provides fixture-tree writers and scripted git repositories with pinned
//! commit dates, so history-dependent tests are deterministic.
//!
//! Tests that need a real `git` binary call [`git_available`] first and
//! return early when it is absent, rather than failing the suite on machines
//! without git.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Write a file under `root`, creating parent directories as needed.
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
}

/// True when a usable `git` binary is on PATH.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Initialize a repository with a fixed committer identity.
pub fn init_repo(dir: &Path) {
    run_git(dir, &["init", "-q"]);
    run_git(dir, &["config", "user.name", "Fixture Author"]);
    run_git(dir, &["config", "user.email", "fixture@example.com"]);
}

/// Write, stage, and commit one file with a pinned author/committer date
/// (strict ISO-8601, e.g. `2020-01-01T00:00:00+00:00`).
pub fn commit_file(repo: &Path, rel: &str, content: &str, date: &str, message: &str) {
    write_file(repo, rel, content);
    run_git(repo, &["add", rel]);
    let status = Command::new("git")
        .current_dir(repo)
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .args(["commit", "-q", "-m", message])
        .status()
        .unwrap();
    assert!(status.success(), "git commit of {rel} failed");
}

fn run_git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .current_dir(dir)
        .args(args)
        .status()
        .unwrap();
    assert!(status.success(), "git {args:?} failed in {}", dir.display());
}
