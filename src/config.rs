//! Site configuration module.
//!
//! Loads `config.toml` into a [`SiteConfig`]. All defaults live in one place
//! (the `Default` impl); user files only specify the values they want to
//! override. Unknown keys are ignored, so a config file can carry settings for
//! other tools without breaking the build.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All keys are optional - defaults shown below
//! content_dir = "content"   # Markdown sources, scanned recursively
//! static_dir = "static"     # Copied verbatim into the output directory
//! media_dir = "media"       # Copied verbatim if present, skipped otherwise
//! output_dir = "site"       # Where the generated site is written
//! site_title = "Site"
//!
//! # Repository links. When repo_url is empty, commit links render as "#".
//! repo_url = "https://example.com/user/repo"
//! branch = "main"
//!
//! # Custom domain for static hosting. When set, a CNAME marker file is
//! # written into the output directory.
//! # domain = "pages.example.org"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// Every field has a hardcoded default except `repo_url` (empty = no
/// repository links) and `domain` (absent = no CNAME marker).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory scanned recursively for markup source files.
    pub content_dir: String,
    /// Static asset directory, copied verbatim into the output. Required.
    pub static_dir: String,
    /// Media directory, copied verbatim into the output. Optional on disk.
    pub media_dir: String,
    /// Directory the generated site is written to.
    pub output_dir: String,
    /// Title shown on the index page and in page headers.
    pub site_title: String,
    /// Repository URL used to build commit links. Empty means no repository.
    pub repo_url: String,
    /// Branch name used in per-file history links.
    pub branch: String,
    /// Custom domain written to the CNAME marker file when set.
    pub domain: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            static_dir: "static".to_string(),
            media_dir: "media".to_string(),
            output_dir: "site".to_string(),
            site_title: "Site".to_string(),
            repo_url: String::new(),
            branch: "main".to_string(),
            domain: None,
        }
    }
}

impl SiteConfig {
    /// Validate settings once at load time.
    ///
    /// Directory settings and the branch must be non-empty strings. Whether
    /// the directories exist is checked later, by the stages that use them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("content_dir", &self.content_dir),
            ("static_dir", &self.static_dir),
            ("media_dir", &self.media_dir),
            ("output_dir", &self.output_dir),
            ("branch", &self.branch),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{name} must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Last path component of `static_dir`, used in output layout and URLs.
    pub fn static_basename(&self) -> String {
        basename(&self.static_dir)
    }

    /// Last path component of `media_dir`, used in output layout.
    pub fn media_basename(&self) -> String {
        basename(&self.media_dir)
    }
}

fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Load the site configuration from a file.
///
/// A missing or malformed file is an error: the build aborts before any
/// output is produced.
pub fn load(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
