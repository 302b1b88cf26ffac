use chronosite::{config, output, publish, render, scan};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chronosite")]
#[command(about = "Static site generator ordered by git history")]
#[command(long_about = "\
Static site generator ordered by git history

Markdown files under the content directory become HTML pages. Each page's
commit history is read from git, and the index lists pages by the date each
file first entered version control, newest first. Untracked files sort as
newest.

Site layout:

  config.toml       # Site settings (content/static/media/output dirs, repo)
  content/          # Markdown sources, scanned recursively
  │                 #   docs/setup.md → site/docs-setup.html
  static/           # Copied verbatim into the output (required)
  media/            # Copied verbatim into the output (optional)

Run from the repository root so per-file history links resolve correctly.")]
#[command(version)]
struct Cli {
    /// Site configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Output directory (overrides output_dir from the config file)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Discover pages and list output filenames without rendering
    #[arg(long)]
    skip_render: bool,

    /// Discover pages and their history without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = config::load(&cli.config)?;
    let out_dir = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));

    let pages = scan::scan(&config)?;

    if cli.dry_run {
        output::print_dry_run(&pages);
        return Ok(());
    }
    if cli.skip_render {
        output::print_listing(&pages);
        return Ok(());
    }

    publish::publish(&config, &out_dir)?;
    render::render_site(&pages, &config, &out_dir)?;
    println!("Site generated at {}", out_dir.display());
    Ok(())
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = SimpleLogger::new().with_level(level).init();
}
