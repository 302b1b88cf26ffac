//! Centralized path-to-identity derivation for pages.
//!
//! Every page identity comes from its content-relative source path:
//!
//! - **Slug**: all path segments joined by `-`, extension stripped. Two files
//!   sharing a basename in different subdirectories keep distinct slugs
//!   (`docs/setup.md` → `docs-setup`, `setup.md` → `setup`), so their output
//!   filenames cannot collide.
//! - **Title**: the file stem alone (`docs/setup.md` → "setup"). There is no
//!   front-matter title extraction; the filename is the source of truth.

use std::path::Path;

/// Slug for a content-relative path: segments joined by `-`, extension stripped.
pub fn slug(rel: &Path) -> String {
    let mut segments: Vec<String> = rel
        .iter()
        .map(|seg| seg.to_string_lossy().into_owned())
        .collect();
    if let Some(last) = segments.last_mut() {
        *last = stem_of(last);
    }
    segments.join("-")
}

/// Page title: the file stem of the last path segment.
pub fn title(rel: &Path) -> String {
    rel.file_name()
        .map(|name| stem_of(&name.to_string_lossy()))
        .unwrap_or_default()
}

/// Join a path with forward slashes, for URLs regardless of platform separator.
pub fn slash_path(path: &Path) -> String {
    path.iter()
        .map(|seg| seg.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn stem_of(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}
