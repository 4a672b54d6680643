//! Output formatting for the ytdata binary

use crate::cli::args::VerbosityLevel;
use crate::core::{Channel, Playlist, SearchResult, Video};
use crate::utils::duration::format_duration;
use crate::utils::url::ParsedUrl;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

/// Output formatter for ytdata
pub struct OutputFormatter {
    verbosity: VerbosityLevel,
    json: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(verbosity: VerbosityLevel, json: bool) -> Self {
        Self { verbosity, json }
    }

    /// Spinner shown while a request is in flight.
    ///
    /// Nothing is drawn in quiet or JSON mode so stdout stays parseable.
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if self.verbosity == VerbosityLevel::Quiet || self.json {
            return None;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    }

    /// Print info message
    pub fn info(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            eprintln!("ℹ️  {}", message);
        }
    }

    /// Print warning message
    pub fn warning(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            eprintln!("⚠️  {}", message);
        }
    }

    /// Print error message
    pub fn error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }

    /// Print debug message
    pub fn debug(&self, message: &str) {
        if self.verbosity == VerbosityLevel::Verbose {
            eprintln!("🐛 {}", message);
        }
    }

    /// Whether results are printed as JSON
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Print any result as pretty JSON
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), serde_json::Error> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print video information
    pub fn print_video(&self, video: &Video) {
        println!("📹 {}", video.title.bold());
        if let Some(channel) = &video.channel {
            println!("👤 {}", channel_label(channel));
        }
        if let Some(duration) = video.duration {
            println!("⏱️  {}", format_duration(duration));
        }
        if let Some(published) = video.published_at {
            println!("📅 {}", published.format("%Y-%m-%d"));
        }
        let stats = [
            video.view_count.map(|n| format!("{} views", format_count(n))),
            video.like_count.map(|n| format!("{} likes", format_count(n))),
            video.comment_count.map(|n| format!("{} comments", format_count(n))),
        ];
        let stats: Vec<String> = stats.into_iter().flatten().collect();
        if !stats.is_empty() {
            println!("📊 {}", stats.join(" | "));
        }
        println!("🔗 {}", video.url().cyan());

        if self.verbosity == VerbosityLevel::Verbose && !video.description.is_empty() {
            println!();
            println!("{}", video.description.dimmed());
        }
    }

    /// Print playlist information, followed by its loaded videos
    pub fn print_playlist(&self, playlist: &Playlist) {
        println!("📋 {}", playlist.title.bold());
        if let Some(channel) = &playlist.channel {
            println!("👤 {}", channel_label(channel));
        }
        if let Some(count) = playlist.item_count {
            println!("📊 {} items", count);
        }
        println!("🔗 {}", playlist.url().cyan());

        if !playlist.videos.is_empty() {
            println!();
            for (index, video) in playlist.videos.iter().enumerate() {
                println!(
                    "  [{}/{}] {} {}",
                    index + 1,
                    playlist.videos.len(),
                    video.title,
                    video.id.dimmed()
                );
            }
        }
    }

    /// Print channel information
    pub fn print_channel(&self, channel: &Channel) {
        println!("📺 {}", channel_label(channel).bold());
        if let Some(country) = &channel.country {
            println!("🌍 {}", country);
        }

        let subscribers = if channel.hidden_subscriber_count == Some(true) {
            Some("hidden subscribers".to_string())
        } else {
            channel
                .subscriber_count
                .map(|n| format!("{} subscribers", format_count(n)))
        };
        let stats = [
            subscribers,
            channel.video_count.map(|n| format!("{} videos", format_count(n))),
            channel.view_count.map(|n| format!("{} views", format_count(n))),
        ];
        let stats: Vec<String> = stats.into_iter().flatten().collect();
        if !stats.is_empty() {
            println!("📊 {}", stats.join(" | "));
        }
        println!("🔗 {}", channel.url().cyan());
    }

    /// Print one line per search result
    pub fn print_search_results(&self, results: &[SearchResult]) {
        if results.is_empty() {
            self.info("No results");
            return;
        }

        for result in results {
            let (tag, url) = match result {
                SearchResult::Video(video) => ("video".green(), video.url()),
                SearchResult::Playlist(playlist) => ("playlist".yellow(), playlist.url()),
                SearchResult::Channel(channel) => ("channel".blue(), channel.url()),
                SearchResult::Raw(_) => ("other".normal(), String::new()),
            };
            println!(
                "{:<10} {}  {}",
                tag,
                result.title().unwrap_or("(untitled)"),
                url.dimmed()
            );
        }
    }

    /// Print URL check outcome
    pub fn print_check(&self, url: &str, is_youtube: bool, parsed: Option<&ParsedUrl>) {
        if !is_youtube {
            println!("{} {} is not a YouTube URL", "✗".red(), url);
            return;
        }

        match parsed {
            Some(parsed) => println!(
                "{} {} is a YouTube {:?} URL (id {})",
                "✓".green(),
                url,
                parsed.kind,
                parsed.id.bold()
            ),
            None => println!(
                "{} {} is a YouTube URL without a recognisable ID",
                "✓".green(),
                url
            ),
        }
    }
}

fn channel_label(channel: &Channel) -> String {
    match &channel.custom_url {
        Some(handle) if !channel.title.is_empty() => format!("{} ({})", channel.title, handle),
        _ if !channel.title.is_empty() => channel.title.clone(),
        _ => channel.id.clone(),
    }
}

/// Format a count with a K/M/B suffix
pub fn format_count(count: u64) -> String {
    const UNITS: &[(u64, &str)] = &[(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    for &(threshold, suffix) in UNITS {
        if count >= threshold {
            let value = count as f64 / threshold as f64;
            return if value >= 100.0 || value.fract() < 0.05 {
                format!("{:.0}{}", value.floor(), suffix)
            } else {
                format!("{:.1}{}", (value * 10.0).floor() / 10.0, suffix)
            };
        }
    }
    count.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1K");
        assert_eq!(format_count(1_500), "1.5K");
        assert_eq!(format_count(2_370_000), "2.3M");
        assert_eq!(format_count(256_283_443), "256M");
        assert_eq!(format_count(1_500_000_000), "1.5B");
    }

    #[test]
    fn test_channel_label() {
        let mut channel = Channel::partial("UCabc", None);
        assert_eq!(channel_label(&channel), "UCabc");

        channel.title = "Someone".to_string();
        assert_eq!(channel_label(&channel), "Someone");

        channel.custom_url = Some("@someone".to_string());
        assert_eq!(channel_label(&channel), "Someone (@someone)");
    }

    #[test]
    fn test_no_spinner_when_quiet_or_json() {
        let formatter = OutputFormatter::new(VerbosityLevel::Quiet, false);
        assert!(formatter.spinner("Fetching").is_none());

        let formatter = OutputFormatter::new(VerbosityLevel::Normal, true);
        assert!(formatter.spinner("Fetching").is_none());
        assert!(formatter.is_json());
    }

    #[test]
    fn test_verbosity_levels() {
        let formatter = OutputFormatter::new(VerbosityLevel::Quiet, false);
        // These should not print anything in quiet mode
        formatter.info("test");
        formatter.warning("test");
        formatter.debug("test");

        // Error should always print
        formatter.error("test");
    }
}
