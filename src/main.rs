// follow-tracker command line entry point.
// Resolves configuration, runs the analysis, prints and exports the results.

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dialoguer::{Confirm, Password};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use follow_tracker::app::App;
use follow_tracker::config::{Cli, Config};
use follow_tracker::export::{self, ExportFormat};
use follow_tracker::github::Member;
use follow_tracker::{AnalysisReport, GitHubClient, ResponseCache, Tracker, report};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config: Config = Cli::parse().into();
    init_logging(config.verbose);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(mut config: Config) -> anyhow::Result<()> {
    if config.clear_cache {
        info!(dir = %config.cache_dir.display(), "Clearing cache");
        ResponseCache::open(&config.cache_dir)
            .context("opening cache directory")?
            .clear(None);
    }

    if config.token.is_none() && config.prompt_for_token && std::io::stdin().is_terminal() {
        config.token = prompt_for_token()?;
    }

    let cache = if config.use_cache {
        Some(
            ResponseCache::new(&config.cache_dir, config.cache_max_age)
                .context("opening cache directory")?,
        )
    } else {
        None
    };

    let client = GitHubClient::with_base_url(&config.api_url, config.token.as_deref())?;
    let mut tracker = Tracker::new(client, cache);

    info!(username = %config.username, "Analyzing GitHub user");
    let report = tracker.run(&config.username).await?;

    let rate = tracker.rate_limit();
    if rate.limit > 0 {
        info!(remaining = rate.remaining, limit = rate.limit, "API quota");
    }

    print_and_export(&config, &report)?;

    if config.tui {
        browse(report)?;
    }

    Ok(())
}

fn prompt_for_token() -> anyhow::Result<Option<String>> {
    println!(
        "No GitHub API token found. Using a token increases rate limits (5000 vs 60 requests/hour)."
    );
    let wants_token = Confirm::new()
        .with_prompt("Would you like to provide a token?")
        .default(false)
        .interact()?;
    if !wants_token {
        return Ok(None);
    }

    let token = Password::new()
        .with_prompt("Enter your GitHub token")
        .allow_empty_password(true)
        .interact()?;
    Ok(Some(token).filter(|t| !t.trim().is_empty()))
}

fn print_and_export(config: &Config, analysis: &AnalysisReport) -> anyhow::Result<()> {
    std::fs::create_dir_all(&config.export_dir).context("creating export directory")?;
    let format = config.export_format;

    println!("{}", report::format_summary(&analysis.summary));

    let summary_path = export::export_summary(
        &analysis.summary,
        &config.export_path("summary", ExportFormat::Json.extension()),
    )?;
    println!("\nSummary exported to: {}", summary_path.display());

    println!(
        "{}",
        report::section(&format!(
            "USERS NOT FOLLOWING YOU BACK ({} users)",
            analysis.not_following_back.len()
        ))
    );
    println!(
        "{}",
        report::format_user_list(&analysis.not_following_back, config.max_display)
    );
    export_list(config, "not_following_back", &analysis.not_following_back, format)?;

    println!(
        "{}",
        report::section(&format!(
            "FOLLOWERS YOU'RE NOT FOLLOWING BACK ({} users)",
            analysis.not_following.len()
        ))
    );
    println!(
        "{}",
        report::format_user_list(&analysis.not_following, config.max_display)
    );
    export_list(config, "not_following", &analysis.not_following, format)?;

    if config.export_all {
        export_list(config, "mutual_followers", &analysis.mutual, format)?;
        export_list(config, "all_followers", &analysis.followers, format)?;
        export_list(config, "all_following", &analysis.following, format)?;
    }

    println!("\nAnalysis complete!");
    Ok(())
}

fn export_list(
    config: &Config,
    name: &str,
    users: &[Member],
    format: ExportFormat,
) -> anyhow::Result<()> {
    let path = config.export_path(name, format.extension());
    if export::export_user_list(users, &path, format)? {
        println!("Exported {} to: {}", name.replace('_', " "), path.display());
    } else {
        warn!(list = name, "No data to export");
    }
    Ok(())
}

fn browse(report: AnalysisReport) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = App::new(report).run(&mut terminal);
    ratatui::restore();
    result.context("running report browser")
}
