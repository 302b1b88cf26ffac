//! Content discovery and page model assembly.
//!
//! Walks the content directory recursively, selects markup source files, and
//! combines each with its git history into a [`Page`] record. The result is
//! already ordered for the index (newest first-commit first).
//!
//! Discovery is deterministic: files are returned sorted lexicographically by
//! full path, independent of filesystem walk order. An empty content
//! directory yields an empty page list; an absent one is an error.

use crate::config::SiteConfig;
use crate::history::{self, CommitRecord};
use crate::naming;
use crate::types::{Page, order_pages};
use log::info;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("error walking content directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("content directory not found: {0}")]
    MissingContentDir(PathBuf),
}

/// Extension (case-insensitive) that marks a file as page source.
pub const MARKUP_EXTENSION: &str = "md";

/// Recursively collect markup source files, sorted lexicographically by path.
pub fn discover(content_dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !content_dir.is_dir() {
        return Err(ScanError::MissingContentDir(content_dir.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(content_dir) {
        let entry = entry?;
        if entry.file_type().is_file() && is_markup(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(files)
}

fn is_markup(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(MARKUP_EXTENSION))
        .unwrap_or(false)
}

/// Build the page record for one source file from its commit history.
///
/// Pure field mapping: slug, output filename, URL and title all derive from
/// the content-relative path; the first-commit date comes from the supplied
/// history.
pub fn build_page(path: &Path, content_dir: &Path, commits: Vec<CommitRecord>) -> Page {
    let content_rel = path.strip_prefix(content_dir).unwrap_or(path);
    let slug = naming::slug(content_rel);
    let output_filename = format!("{slug}.html");
    let url = format!("/{output_filename}");
    let first_commit = history::first_commit_date(&commits);
    Page {
        source_path: path.to_path_buf(),
        rel_path: naming::slash_path(&repo_relative(path)),
        title: naming::title(content_rel),
        slug,
        output_filename,
        url,
        commits,
        first_commit,
    }
}

/// Path relative to the process working directory when possible.
///
/// The generator is expected to run at the repository root, so this is the
/// path that appears in per-file history links.
fn repo_relative(path: &Path) -> PathBuf {
    if path.is_relative() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => path
            .strip_prefix(&cwd)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

/// Full assembly: discover sources, extract history per file, build page
/// records, order them for the index.
pub fn scan(config: &SiteConfig) -> Result<Vec<Page>, ScanError> {
    let content_dir = Path::new(&config.content_dir);
    let files = discover(content_dir)?;
    let mut pages: Vec<Page> = files
        .iter()
        .map(|path| {
            let commits = history::log_for_path(path);
            build_page(path, content_dir, commits)
        })
        .collect();
    order_pages(&mut pages);
    info!(
        "scanned {} pages from {}",
        pages.len(),
        content_dir.display()
    );
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::CommitRecord;
    use crate::test_helpers::write_file;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn rel_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| naming::slash_path(f.strip_prefix(root).unwrap()))
            .collect()
    }

    #[test]
    fn discover_returns_lexicographic_order() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "c.md", "c");
        write_file(tmp.path(), "a.md", "a");
        write_file(tmp.path(), "b/nested.md", "n");
        write_file(tmp.path(), "b/another.md", "n2");

        let files = discover(tmp.path()).unwrap();
        assert_eq!(
            rel_names(tmp.path(), &files),
            ["a.md", "b/another.md", "b/nested.md", "c.md"]
        );
    }

    #[test]
    fn discover_selects_only_markup_files() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "page.md", "p");
        write_file(tmp.path(), "notes.txt", "t");
        write_file(tmp.path(), "style.css", "c");
        write_file(tmp.path(), "sub/inner.md", "i");

        let files = discover(tmp.path()).unwrap();
        assert_eq!(rel_names(tmp.path(), &files), ["page.md", "sub/inner.md"]);
    }

    #[test]
    fn discover_extension_match_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "UPPER.MD", "u");
        write_file(tmp.path(), "mixed.Md", "m");

        let files = discover(tmp.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn discover_empty_directory_is_empty_not_error() {
        let tmp = TempDir::new().unwrap();
        let files = discover(tmp.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn discover_missing_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = discover(&tmp.path().join("absent"));
        assert!(matches!(result, Err(ScanError::MissingContentDir(_))));
    }

    // =========================================================================
    // build_page field mapping
    // =========================================================================

    fn commit(hash: &str, year: i32) -> CommitRecord {
        CommitRecord {
            hash: hash.to_string(),
            timestamp: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
            author: "Ada".to_string(),
            message: "change".to_string(),
        }
    }

    #[test]
    fn build_page_maps_fields() {
        let page = build_page(
            Path::new("content/notes.md"),
            Path::new("content"),
            vec![commit("new", 2024), commit("old", 2020)],
        );
        assert_eq!(page.slug, "notes");
        assert_eq!(page.output_filename, "notes.html");
        assert_eq!(page.url, "/notes.html");
        assert_eq!(page.title, "notes");
        assert_eq!(page.rel_path, "content/notes.md");
        assert_eq!(page.commits.len(), 2);
        assert_eq!(
            page.first_commit,
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn build_page_nested_source_gets_path_slug() {
        let page = build_page(
            Path::new("content/docs/setup.md"),
            Path::new("content"),
            Vec::new(),
        );
        assert_eq!(page.slug, "docs-setup");
        assert_eq!(page.output_filename, "docs-setup.html");
        assert_eq!(page.url, "/docs-setup.html");
        // Title stays the stem, not the joined slug
        assert_eq!(page.title, "setup");
    }

    #[test]
    fn build_page_empty_history_sorts_as_newest() {
        let before = Utc::now();
        let page = build_page(Path::new("content/new.md"), Path::new("content"), Vec::new());
        assert!(page.first_commit >= before);
        assert!(page.commits.is_empty());
    }

    #[test]
    fn same_basename_in_different_dirs_does_not_collide() {
        let one = build_page(
            Path::new("content/setup.md"),
            Path::new("content"),
            Vec::new(),
        );
        let two = build_page(
            Path::new("content/docs/setup.md"),
            Path::new("content"),
            Vec::new(),
        );
        assert_ne!(one.output_filename, two.output_filename);
    }
}
