//! Asset publishing.
//!
//! Copies the static and media trees verbatim into the output directory and
//! writes the custom-domain marker file. Copies are replace, not merge: an
//! existing copy under the output directory is removed first, so stale files
//! from earlier builds cannot linger. Publishing twice in a row yields an
//! identical output subtree.
//!
//! The static directory is required; the media directory is optional and
//! silently skipped (logged at debug level) when absent.

use crate::config::SiteConfig;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("static directory not found: {0}")]
    MissingStaticDir(PathBuf),
}

/// Name of the custom-domain marker file understood by static hosts.
pub const DOMAIN_MARKER: &str = "CNAME";

/// Publish assets into the output directory.
pub fn publish(config: &SiteConfig, out_dir: &Path) -> Result<(), PublishError> {
    fs::create_dir_all(out_dir)?;

    let static_dir = Path::new(&config.static_dir);
    if !static_dir.is_dir() {
        return Err(PublishError::MissingStaticDir(static_dir.to_path_buf()));
    }
    copy_replace(static_dir, &out_dir.join(config.static_basename()))?;

    let media_dir = Path::new(&config.media_dir);
    if media_dir.is_dir() {
        copy_replace(media_dir, &out_dir.join(config.media_basename()))?;
    } else {
        debug!("media directory {} not found, skipping", media_dir.display());
    }

    write_domain_marker(config, out_dir)?;
    Ok(())
}

/// Replace `dst` with a verbatim copy of `src`.
fn copy_replace(src: &Path, dst: &Path) -> Result<(), PublishError> {
    if dst.exists() {
        fs::remove_dir_all(dst)?;
    }
    fs::create_dir_all(dst)?;
    copy_dir_recursive(src, dst)?;
    Ok(())
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write the domain, trimmed and newline-terminated, to the marker file.
///
/// Nothing is written when no domain is configured or the configured value
/// is blank.
fn write_domain_marker(config: &SiteConfig, out_dir: &Path) -> Result<(), PublishError> {
    let Some(domain) = config
        .domain
        .as_deref()
        .map(str::trim)
        .filter(|domain| !domain.is_empty())
    else {
        return Ok(());
    };
    let marker = out_dir.join(DOMAIN_MARKER);
    fs::write(&marker, format!("{domain}\n"))?;
    println!("Wrote {}", marker.display());
    Ok(())
}
