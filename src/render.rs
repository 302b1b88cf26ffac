//! HTML rendering.
//!
//! Converts each page's Markdown source to an HTML fragment with
//! pulldown-cmark and binds it into [maud](https://maud.lambda.xyz/)
//! templates. Three templates make up the site:
//!
//! - `base_document`: shared document shell (head, stylesheet link, body)
//! - `render_page`: article body plus the page's commit history
//! - `render_index`: the ordered page list, newest first-commit first
//!
//! Commit and history links are built from the configured repository URL via
//! [`RepoLinks`]; without a repository URL every link collapses to `"#"` so
//! the templates never special-case an unconfigured repo.

use crate::config::SiteConfig;
use crate::types::Page;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Commit link construction from the configured repository URL.
#[derive(Debug, Clone)]
pub struct RepoLinks {
    base: Option<String>,
    branch: String,
}

impl RepoLinks {
    /// Normalizes the repository URL once: a trailing `/` and a `.git`
    /// suffix are stripped. An empty URL means no repository.
    pub fn new(repo_url: &str, branch: &str) -> Self {
        let normalized = normalize_repo_url(repo_url);
        Self {
            base: (!normalized.is_empty()).then_some(normalized),
            branch: branch.to_string(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.repo_url, &config.branch)
    }

    /// `{repo}/commit/{hash}`, or `"#"` without a repository URL.
    pub fn commit_url(&self, hash: &str) -> String {
        match &self.base {
            Some(base) => format!("{base}/commit/{hash}"),
            None => "#".to_string(),
        }
    }

    /// `{repo}/commits/{branch}/{rel_path}`, or `"#"` without a repository URL.
    pub fn commits_for_path_url(&self, rel_path: &str) -> String {
        match &self.base {
            Some(base) => format!("{base}/commits/{}/{rel_path}", self.branch),
            None => "#".to_string(),
        }
    }
}

fn normalize_repo_url(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    let url = url.strip_suffix(".git").unwrap_or(url);
    url.trim_end_matches('/').to_string()
}

/// Markdown → HTML fragment. Delegated entirely to pulldown-cmark.
pub fn markup_to_html(text: &str) -> String {
    let parser = Parser::new(text);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

// ============================================================================
// Templates
// ============================================================================

/// Shared document shell.
fn base_document(title: &str, site_title: &str, static_base: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (site_title) }
                link rel="stylesheet" href={ "/" (static_base) "/style.css" };
            }
            body {
                (content)
            }
        }
    }
}

/// One page: rendered article body plus its commit history.
pub fn render_page(page: &Page, config: &SiteConfig, links: &RepoLinks, body: &str) -> Markup {
    let history_url = links.commits_for_path_url(&page.rel_path);
    let content = html! {
        header.site-header {
            nav { a href="/" { (config.site_title) } }
        }
        main.page {
            article { (PreEscaped(body)) }
            section.history {
                h2 { "History" }
                @if page.commits.is_empty() {
                    p.no-history { "No recorded commits for this page." }
                } @else {
                    ul.commits {
                        @for commit in &page.commits {
                            li {
                                a.commit-hash href=(links.commit_url(&commit.hash)) {
                                    (short_hash(&commit.hash))
                                }
                                " "
                                time datetime=(commit.timestamp.to_rfc3339()) {
                                    (commit.timestamp.format("%Y-%m-%d"))
                                }
                                " " span.author { (commit.author) }
                                ": " span.message { (commit.message) }
                            }
                        }
                    }
                    p.full-history { a href=(history_url) { "Full history" } }
                }
            }
        }
    };
    base_document(
        &page.title,
        &config.site_title,
        &config.static_basename(),
        content,
    )
}

/// The index: every page in order, keyed by first-commit date.
pub fn render_index(pages: &[Page], config: &SiteConfig) -> Markup {
    let content = html! {
        header.site-header {
            h1 { (config.site_title) }
        }
        main.index {
            ul.pages {
                @for page in pages {
                    li {
                        time datetime=(page.first_commit.to_rfc3339()) {
                            (page.first_commit.format("%Y-%m-%d"))
                        }
                        " "
                        a href=(page.url) { (page.title) }
                    }
                }
            }
        }
    };
    base_document(
        &config.site_title,
        &config.site_title,
        &config.static_basename(),
        content,
    )
}

fn short_hash(hash: &str) -> &str {
    // Commit hashes are hex ASCII; anything shorter than the usual
    // abbreviation is shown as-is.
    if hash.len() >= 7 { &hash[..7] } else { hash }
}

// ============================================================================
// Site output
// ============================================================================

/// Render every page plus the index into the output directory, overwriting
/// existing files of the same name.
pub fn render_site(pages: &[Page], config: &SiteConfig, out_dir: &Path) -> Result<(), RenderError> {
    fs::create_dir_all(out_dir)?;
    let links = RepoLinks::from_config(config);

    for page in pages {
        let source = fs::read_to_string(&page.source_path)?;
        let body = markup_to_html(&source);
        let rendered = render_page(page, config, &links, &body);
        let out_path = out_dir.join(&page.output_filename);
        fs::write(&out_path, rendered.into_string())?;
        println!("Wrote {}", out_path.display());
    }

    let index = render_index(pages, config);
    fs::write(out_dir.join("index.html"), index.into_string())?;
    println!("Wrote index for {} pages", pages.len());
    Ok(())
}
