//! Git history extraction.
//!
//! Each source file's full commit log is read by invoking the `git`
//! executable as a subprocess. History is a best-effort data source: a failed
//! invocation (git missing, file untracked, directory not a repository)
//! degrades to an empty history with a warning, and the page is still
//! published. An empty history makes the page sort as newest, so fresh,
//! not-yet-committed files appear at the top of the index.
//!
//! ## Log line format
//!
//! Records are requested as `%H%x1f%cI%x1f%an%x1f%s`: hash, strict-ISO
//! committer date, author name, subject, separated by the ASCII unit
//! separator (0x1f). git strips control characters from subjects, so the
//! delimiter cannot appear inside a field; the split is a strict four-field
//! match and anything else is dropped.

use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::path::Path;
use std::process::Command;

/// One commit touching a source file, as reported by `git log`.
///
/// Sequences are ordered newest-first, exactly as git returns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub hash: String,
    /// Committer date, normalized to UTC at the parse boundary.
    pub timestamp: DateTime<Utc>,
    pub author: String,
    pub message: String,
}

const FIELD_SEP: char = '\u{001f}';
const LOG_FORMAT: &str = "--pretty=format:%H%x1f%cI%x1f%an%x1f%s";

/// Full commit history for one file, newest first.
///
/// Runs `git log` with the subprocess working directory set to the file's
/// parent, so repository discovery follows the file rather than the process
/// cwd. Never fails: any subprocess problem is logged and yields an empty
/// history.
pub fn log_for_path(path: &Path) -> Vec<CommitRecord> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let Some(file_name) = path.file_name() else {
        warn!("{}: not a file path, treating as no history", path.display());
        return Vec::new();
    };

    let output = Command::new("git")
        .current_dir(dir)
        .arg("log")
        .arg(LOG_FORMAT)
        .arg("--")
        .arg(file_name)
        .output();

    match output {
        Ok(out) if out.status.success() => parse_log(&String::from_utf8_lossy(&out.stdout)),
        Ok(out) => {
            warn!(
                "git log failed for {} ({}), treating as no history",
                path.display(),
                out.status
            );
            Vec::new()
        }
        Err(err) => {
            warn!(
                "could not invoke git for {} ({err}), treating as no history",
                path.display()
            );
            Vec::new()
        }
    }
}

/// Parse `git log` output: one record per line, unit-separator fields.
///
/// Lines that do not split into exactly four fields, or whose timestamp is
/// not valid strict ISO-8601, are dropped (logged at debug level).
pub fn parse_log(stdout: &str) -> Vec<CommitRecord> {
    let mut commits = Vec::new();
    for line in stdout.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(FIELD_SEP).collect();
        let &[hash, date, author, message] = fields.as_slice() else {
            debug!("dropping malformed log line: {line:?}");
            continue;
        };
        let Ok(timestamp) = DateTime::parse_from_rfc3339(date) else {
            debug!("dropping log line with unparseable timestamp: {date:?}");
            continue;
        };
        commits.push(CommitRecord {
            hash: hash.to_string(),
            timestamp: timestamp.with_timezone(&Utc),
            author: author.to_string(),
            message: message.to_string(),
        });
    }
    commits
}

/// Timestamp of the oldest commit in a newest-first sequence.
///
/// An empty history returns the current time, so untracked and brand-new
/// pages sort as newest.
pub fn first_commit_date(commits: &[CommitRecord]) -> DateTime<Utc> {
    commits
        .last()
        .map(|commit| commit.timestamp)
        .unwrap_or_else(Utc::now)
}
