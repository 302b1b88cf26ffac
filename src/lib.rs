//! # chronosite
//!
//! A minimal static site generator that orders pages by git history. Markdown
//! files in a content directory become HTML pages; the index lists them by
//! the date each file first entered version control, newest first.
//!
//! # Architecture: One Linear Pipeline
//!
//! ```text
//! config.toml → scan content/ → git log per file → order by first commit
//!             → render pages + index → copy static/media → site/
//! ```
//!
//! Every stage runs sequentially on one thread, once per invocation. There is
//! no incremental rebuild, no cache, and no parallelism: the expensive parts
//! (one `git log` subprocess per page) are bounded by content size, and a
//! full rebuild of a typical site is fast enough that build orchestration
//! would cost more than it saves.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading, defaults, validation |
//! | [`scan`] | content discovery and page model assembly |
//! | [`history`] | git subprocess invocation and commit-log parsing |
//! | [`naming`] | path → slug/title derivation |
//! | [`types`] | the shared `Page` record and index ordering |
//! | [`render`] | Markdown conversion, maud templates, page/index output |
//! | [`publish`] | static/media copy and the custom-domain marker |
//! | [`output`] | dry-run and skip-render listings |
//!
//! # Design Decisions
//!
//! ## Git As The Only Metadata Source
//!
//! Pages carry no front matter. Dates come from commit history, titles from
//! filenames, ordering from the first-commit date. The repository is already
//! the source of truth for when a document appeared; duplicating that into
//! per-file metadata invites drift.
//!
//! History extraction is deliberately best-effort: a file with no readable
//! history (untracked, or git unavailable) is still published and sorts as
//! newest. A broken checkout degrades to a visible warning per file, never
//! to a failed build.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than a runtime template engine. Malformed HTML
//! is a build error, template variables are typed Rust expressions, all
//! interpolation is auto-escaped, and there is no template directory to ship
//! or get out of sync with the binary.

pub mod config;
pub mod history;
pub mod naming;
pub mod output;
pub mod publish;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
