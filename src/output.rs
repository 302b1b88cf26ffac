//! CLI listing output for the two no-render modes.
//!
//! Each mode has a pure `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.
//!
//! ```text
//! Dry run: discovered pages:
//! content/b.md first_commit_date=2023-06-15T10:00:00Z commits=3
//! content/a.md first_commit_date=2020-01-01T00:00:00Z commits=1
//! ```
//!
//! ```text
//! Skip-render: listing pages and output filenames
//! content/b.md -> b.html commits=3
//! content/a.md -> a.html commits=1
//! ```

use crate::types::Page;
use chrono::SecondsFormat;

/// Dry-run listing: per page, the source path, first-commit date and commit
/// count. Pages arrive already ordered.
pub fn format_dry_run(pages: &[Page]) -> Vec<String> {
    let mut lines = vec!["Dry run: discovered pages:".to_string()];
    for page in pages {
        lines.push(format!(
            "{} first_commit_date={} commits={}",
            page.rel_path,
            page.first_commit.to_rfc3339_opts(SecondsFormat::Secs, true),
            page.commits.len()
        ));
    }
    lines
}

pub fn print_dry_run(pages: &[Page]) {
    for line in format_dry_run(pages) {
        println!("{line}");
    }
}

/// Skip-render listing: per page, the source path, the output filename it
/// would render to, and the commit count.
pub fn format_listing(pages: &[Page]) -> Vec<String> {
    let mut lines = vec!["Skip-render: listing pages and output filenames".to_string()];
    for page in pages {
        lines.push(format!(
            "{} -> {} commits={}",
            page.rel_path,
            page.output_filename,
            page.commits.len()
        ));
    }
    lines
}

pub fn print_listing(pages: &[Page]) {
    for line in format_listing(pages) {
        println!("{line}");
    }
}
