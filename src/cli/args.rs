//! Command line argument parsing

use crate::core::SearchType;
use crate::platform::ClientConfig;
use clap::{Parser, Subcommand, ValueEnum};
use std::time::Duration;

/// ytdata - query the YouTube Data API v3 from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true, global = true)]
    pub key: Option<String>,

    /// HTTP timeout (e.g., 30s, 1m); none by default
    #[arg(long, value_name = "DURATION", global = true)]
    pub timeout: Option<humantime::Duration>,

    /// Override User-Agent header
    #[arg(long, value_name = "USER_AGENT", global = true)]
    pub user_agent: Option<String>,

    /// Proxy URL (http/https/socks)
    #[arg(long, value_name = "URL", global = true)]
    pub proxy: Option<String>,

    /// API root to send requests to (e.g. a local mock server)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (only errors and results)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Look up a video by URL or ID
    Video {
        /// Video URL or 11-character ID
        target: String,
    },
    /// Look up a playlist by URL or ID
    Playlist {
        /// Playlist URL or ID
        target: String,

        /// Also fetch up to N of its videos
        #[arg(long, value_name = "N")]
        videos: Option<u32>,
    },
    /// Look up a channel by URL or ID
    Channel {
        /// Channel URL (/channel/UC...) or ID
        target: String,
    },
    /// Search videos, playlists and channels
    Search {
        /// Search terms
        query: String,

        /// Restrict results to one kind
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<SearchKind>,

        /// Maximum number of results (the API accepts 0-50)
        #[arg(short, long, default_value = "5")]
        limit: u32,
    },
    /// Check whether a URL is a YouTube URL and what it points at
    Check {
        /// URL to inspect
        url: String,
    },
}

/// Search restriction
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SearchKind {
    Video,
    Playlist,
    Channel,
}

impl From<SearchKind> for SearchType {
    fn from(kind: SearchKind) -> Self {
        match kind {
            SearchKind::Video => SearchType::Video,
            SearchKind::Playlist => SearchType::Playlist,
            SearchKind::Channel => SearchType::Channel,
        }
    }
}

impl Args {
    /// Get HTTP timeout as Duration
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Into::into)
    }

    /// Build the HTTP client configuration from the flags
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(timeout) = self.timeout_duration() {
            config = config.with_timeout(timeout);
        }
        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent);
        }
        if let Some(proxy) = &self.proxy {
            config = config.with_proxy(proxy);
        }
        config
    }

    /// Get output verbosity level
    pub fn verbosity_level(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else if self.verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbosityLevel {
    /// Quiet (only errors)
    Quiet,
    /// Normal
    Normal,
    /// Verbose (debug info)
    Verbose,
}
