// src/cli/args.rs
use std::path::PathBuf;

use clap::Parser;

/// Command-line options. Everything except the category list can be set
/// here; flags win over the settings file.
#[derive(Debug, Parser)]
#[command(
    name = "usage_trends",
    version,
    about = "Tracks regex-defined API usage across a git history and publishes trend graphs"
)]
pub struct Args {
    /// Settings file (JSON; YAML when built with the `yaml` feature)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Git repository to scan
    #[arg(long, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Revision whose history is scanned
    #[arg(long, value_name = "REV")]
    pub revision: Option<String>,

    /// Directory the artifacts are written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory the publishable bundle is staged into
    #[arg(long, value_name = "DIR")]
    pub site_dir: Option<PathBuf>,

    /// Count cache location
    #[arg(long, value_name = "FILE")]
    pub cache: Option<PathBuf>,

    /// HTML template for index.html
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Base URL for file links in the HTML tables
    #[arg(long, value_name = "URL")]
    pub file_view_url: Option<String>,

    /// Skip `git fetch` before scanning
    #[arg(long)]
    pub no_fetch: bool,

    /// Skip rendering the trend graphs
    #[arg(long)]
    pub no_plots: bool,

    /// Skip generating index.html
    #[arg(long)]
    pub no_html: bool,

    /// Skip staging the bundle even when a site directory is configured
    #[arg(long)]
    pub no_stage: bool,

    /// Flush the count cache after every N newly counted commits
    #[arg(long, value_name = "N")]
    pub cache_save_every: Option<usize>,
}
