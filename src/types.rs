//! Shared page model.
//!
//! A [`Page`] is derived deterministically from one discovered source file
//! plus its commit history, and is never mutated after construction; the only
//! thing that changes afterwards is the ordering of the page list.

use crate::history::CommitRecord;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// A page derived from one markup source file plus its git history.
#[derive(Debug, Clone)]
pub struct Page {
    /// Source file as discovered (content directory joined).
    pub source_path: PathBuf,
    /// Repo-relative source path with forward slashes, used in history links
    /// and listings.
    pub rel_path: String,
    /// Unique identifier derived from the content-relative path.
    pub slug: String,
    /// `{slug}.html`
    pub output_filename: String,
    /// Title shown in the page header and on the index (file stem).
    pub title: String,
    /// Site-absolute URL, `/{output_filename}`.
    pub url: String,
    /// Full commit history, newest first. Owned by this page.
    pub commits: Vec<CommitRecord>,
    /// Timestamp of the oldest commit, or build time for files with no
    /// history. The index sort key.
    pub first_commit: DateTime<Utc>,
}

/// Order pages newest-first by first-commit date.
///
/// The sort is stable: pages with equal first-commit dates keep their input
/// (lexicographic discovery) order.
pub fn order_pages(pages: &mut [Page]) {
    pages.sort_by(|a, b| b.first_commit.cmp(&a.first_commit));
}
