// Command line configuration.
// Parses arguments and environment into the settings used by a run.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::cache::default_cache_dir;
use crate::export::ExportFormat;
use crate::github::GITHUB_API_BASE;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "follow-tracker",
    version,
    about = "GitHub Follower Tracker - Analyze your GitHub followers and following"
)]
pub struct Cli {
    /// GitHub username to analyze
    pub username: String,

    /// GitHub API token (optional, increases rate limits)
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Disable caching of API responses
    #[arg(long)]
    pub no_cache: bool,

    /// Clear existing cached data before running
    #[arg(long)]
    pub clear_cache: bool,

    /// Directory holding cached API responses
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Maximum age of cached data in seconds
    #[arg(long, default_value_t = 3600)]
    pub cache_max_age: u64,

    /// Maximum number of users to display in lists
    #[arg(long, default_value_t = 10)]
    pub max_display: usize,

    /// Directory for exported files
    #[arg(long, default_value = "exports")]
    pub export_dir: PathBuf,

    /// Export format for user lists (csv or json)
    #[arg(long, default_value = "csv")]
    pub export_format: ExportFormat,

    /// Export mutual followers and the full follower/following lists too
    #[arg(long)]
    pub export_all: bool,

    /// GitHub API root URL
    #[arg(long, default_value = GITHUB_API_BASE)]
    pub api_url: String,

    /// Browse the results in an interactive terminal view
    #[arg(long)]
    pub tui: bool,

    /// Never prompt for a token
    #[arg(long)]
    pub no_prompt: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub token: Option<String>,
    pub api_url: String,
    pub use_cache: bool,
    pub clear_cache: bool,
    pub cache_dir: PathBuf,
    pub cache_max_age: Duration,
    pub max_display: usize,
    pub export_dir: PathBuf,
    pub export_format: ExportFormat,
    pub export_all: bool,
    pub tui: bool,
    pub prompt_for_token: bool,
    pub verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            username: cli.username,
            token: cli.token.filter(|t| !t.trim().is_empty()),
            api_url: cli.api_url,
            use_cache: !cli.no_cache,
            clear_cache: cli.clear_cache,
            cache_dir: cli.cache_dir.unwrap_or_else(default_cache_dir),
            cache_max_age: Duration::from_secs(cli.cache_max_age),
            max_display: cli.max_display,
            export_dir: cli.export_dir,
            export_format: cli.export_format,
            export_all: cli.export_all,
            tui: cli.tui,
            prompt_for_token: !cli.no_prompt,
            verbose: cli.verbose,
        }
    }
}

impl Config {
    /// Path of an export file for this user: `{dir}/{username}_{name}.{ext}`.
    pub fn export_path(&self, name: &str, extension: &str) -> PathBuf {
        self.export_dir
            .join(format!("{}_{}.{}", self.username, name, extension))
    }
}
