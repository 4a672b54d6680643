//! Main entry point for the ytdata CLI

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ytdata::cli::{Args, Command, OutputFormatter, VerbosityLevel};
use ytdata::{SearchType, YouTube, YtError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbosity_level());

    debug!("Starting ytdata with command: {:?}", args.command);

    let formatter = OutputFormatter::new(args.verbosity_level(), args.json);

    match &args.command {
        Command::Check { url } => handle_check(url, &formatter),
        command => {
            let youtube = build_client(&args)?;
            formatter.debug(&format!("API root: {}", youtube.client().config().base_url));
            // YtError messages already include their source
            if let Err(err) = run_lookup(&youtube, command, &formatter).await {
                formatter.error(&err.to_string());
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

/// Build the API client from flags and environment
fn build_client(args: &Args) -> anyhow::Result<YouTube> {
    let key = args
        .key
        .as_deref()
        .filter(|key| !key.trim().is_empty())
        .ok_or(YtError::ApiKeyNotFound)?;

    YouTube::with_config(key, args.client_config()).context("failed to set up HTTP client")
}

/// Run a lookup or search subcommand
async fn run_lookup(
    youtube: &YouTube,
    command: &Command,
    formatter: &OutputFormatter,
) -> anyhow::Result<()> {
    match command {
        Command::Video { target } => {
            let spinner = formatter.spinner("Fetching video...");
            let video = if YouTube::check_base_url(target) {
                youtube.get_video(target).await
            } else {
                youtube.get_video_by_id(target).await
            };
            finish(spinner);

            let Some(video) = video? else {
                bail!("video not found: {}", target);
            };
            if formatter.is_json() {
                formatter.print_json(&video)?;
            } else {
                formatter.print_video(&video);
            }
        }
        Command::Playlist { target, videos } => {
            let spinner = formatter.spinner("Fetching playlist...");
            let playlist = if YouTube::check_base_url(target) {
                youtube.get_playlist(target).await
            } else {
                youtube.get_playlist_by_id(target).await
            };

            let mut playlist = match playlist {
                Ok(Some(playlist)) => playlist,
                Ok(None) => {
                    finish(spinner);
                    bail!("playlist not found: {}", target);
                }
                Err(err) => {
                    finish(spinner);
                    return Err(err.into());
                }
            };
            if let Some(limit) = videos {
                let loaded = youtube.load_playlist_videos(&mut playlist, *limit).await;
                finish(spinner);
                loaded?;
            } else {
                finish(spinner);
            }

            if formatter.is_json() {
                formatter.print_json(&playlist)?;
            } else {
                formatter.print_playlist(&playlist);
            }
        }
        Command::Channel { target } => {
            let spinner = formatter.spinner("Fetching channel...");
            let channel = if YouTube::check_base_url(target) {
                youtube.get_channel(target).await
            } else {
                youtube.get_channel_by_id(target).await
            };
            finish(spinner);

            let Some(channel) = channel? else {
                bail!("channel not found: {}", target);
            };
            if formatter.is_json() {
                formatter.print_json(&channel)?;
            } else {
                formatter.print_channel(&channel);
            }
        }
        Command::Search { query, kind, limit } => {
            let spinner = formatter.spinner("Searching...");
            let results = match kind {
                Some(kind) => {
                    let kind = SearchType::from(*kind);
                    youtube
                        .search_with(query, *limit, &[("type", kind.as_str())])
                        .await
                }
                None => youtube.search(query, *limit).await,
            };
            finish(spinner);

            let results = results?;
            info!("Search returned {} result(s)", results.len());
            if let Some(kind) = kind.map(SearchType::from) {
                let stray = results.iter().filter(|r| r.kind() != Some(kind)).count();
                if stray > 0 {
                    formatter.warning(&format!(
                        "{} result(s) are not of type {}",
                        stray,
                        kind.as_str()
                    ));
                }
            }
            if formatter.is_json() {
                formatter.print_json(&results)?;
            } else {
                formatter.print_search_results(&results);
            }
        }
        Command::Check { url } => handle_check(url, formatter)?,
    }

    Ok(())
}

/// Validate and classify a URL without touching the network
fn handle_check(url: &str, formatter: &OutputFormatter) -> anyhow::Result<()> {
    let is_youtube = YouTube::check_base_url(url);
    let parsed = YouTube::parse_url(url);

    if formatter.is_json() {
        formatter.print_json(&serde_json::json!({
            "url": url,
            "youtube": is_youtube,
            "resource": parsed,
        }))?;
    } else {
        formatter.print_check(url, is_youtube, parsed.as_ref());
    }

    if !is_youtube {
        std::process::exit(1);
    }
    Ok(())
}

fn finish(spinner: Option<indicatif::ProgressBar>) {
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
}

/// Initialize logging system
fn init_logging(verbosity: VerbosityLevel) {
    let default_level = match verbosity {
        VerbosityLevel::Verbose => "debug",
        VerbosityLevel::Normal => "warn",
        VerbosityLevel::Quiet => "error",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
