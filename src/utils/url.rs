//! URL utilities for validating YouTube URLs and extracting resource IDs

use crate::error::YtError;
use regex::Regex;
use serde::Serialize;
use url::Url;

/// Hosts accepted as YouTube URLs
const YOUTUBE_HOSTS: &[&str] = &[
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
    "youtu.be",
];

const VIDEO_ID_PATTERN: &str = r"^[A-Za-z0-9_-]{11}$";
const PLAYLIST_ID_PATTERN: &str = r"^[A-Za-z0-9_-]+$";
const RAW_PLAYLIST_ID_PATTERN: &str = r"^(?:PL|UU|LL|FL|RD|OL)[A-Za-z0-9_-]+$";
const CHANNEL_ID_PATTERN: &str = r"^UC[A-Za-z0-9_-]{22}$";

/// Path prefixes that carry a video ID as the next segment
const VIDEO_PATH_PREFIXES: &[&str] = &["shorts", "embed", "v", "e", "live"];

/// Kind of resource a YouTube URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlKind {
    Video,
    Playlist,
    Channel,
}

/// Result of classifying a YouTube URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    pub kind: UrlKind,
    pub id: String,
}

/// Parse a URL, assuming https when the scheme is missing
fn parse_loose(url: &str) -> Option<Url> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = match Url::parse(trimmed) {
        Ok(parsed) => parsed,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{}", trimmed)).ok()?
        }
        Err(_) => return None,
    };

    matches!(parsed.scheme(), "http" | "https").then_some(parsed)
}

/// Parse a URL and keep it only if it points at a YouTube host
fn parse_youtube_url(url: &str) -> Option<Url> {
    parse_loose(url).filter(|parsed| {
        parsed
            .host_str()
            .map(|host| YOUTUBE_HOSTS.contains(&host))
            .unwrap_or(false)
    })
}

fn path_segments(parsed: &Url) -> Vec<&str> {
    parsed
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}

fn query_value(parsed: &Url, key: &str) -> Option<String> {
    parsed
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

fn matches_pattern(pattern: &str, candidate: &str) -> Result<bool, YtError> {
    Ok(Regex::new(pattern)?.is_match(candidate))
}

/// Check if the URL belongs to YouTube (scheme optional, host case-insensitive)
pub fn check_base_url(url: &str) -> bool {
    parse_youtube_url(url).is_some()
}

/// Check if a string has the shape of a video ID
pub fn is_video_id(candidate: &str) -> Result<bool, YtError> {
    matches_pattern(VIDEO_ID_PATTERN, candidate)
}

/// Check if a string has the shape of a channel ID
pub fn is_channel_id(candidate: &str) -> Result<bool, YtError> {
    matches_pattern(CHANNEL_ID_PATTERN, candidate)
}

/// Check if a string is a bare playlist ID with a known prefix
pub fn is_raw_playlist_id(candidate: &str) -> Result<bool, YtError> {
    matches_pattern(RAW_PLAYLIST_ID_PATTERN, candidate)
}

/// Extract video ID from the supported YouTube URL formats
pub fn extract_video_id(url: &str) -> Result<String, YtError> {
    let parsed = parse_youtube_url(url)
        .ok_or_else(|| YtError::InvalidUrl(format!("not a YouTube URL: {}", url)))?;

    let segments = path_segments(&parsed);
    let candidate = if parsed.host_str() == Some("youtu.be") {
        segments.first().map(|s| s.to_string())
    } else {
        match segments.as_slice() {
            ["watch", ..] => query_value(&parsed, "v"),
            [prefix, id, ..] if VIDEO_PATH_PREFIXES.contains(prefix) => Some(id.to_string()),
            _ => None,
        }
    };

    let id = candidate
        .ok_or_else(|| YtError::InvalidUrl(format!("no video ID in URL: {}", url)))?;
    if !is_video_id(&id)? {
        return Err(YtError::InvalidUrl(format!(
            "malformed video ID '{}' in URL: {}",
            id, url
        )));
    }
    Ok(id)
}

/// Extract playlist ID from a playlist URL (or accept a bare playlist ID)
pub fn extract_playlist_id(url: &str) -> Result<String, YtError> {
    if is_raw_playlist_id(url)? {
        return Ok(url.to_string());
    }

    let parsed = parse_youtube_url(url)
        .ok_or_else(|| YtError::InvalidUrl(format!("not a YouTube URL: {}", url)))?;

    match query_value(&parsed, "list") {
        Some(id) if matches_pattern(PLAYLIST_ID_PATTERN, &id)? => Ok(id),
        Some(id) => Err(YtError::InvalidUrl(format!(
            "malformed playlist ID '{}' in URL: {}",
            id, url
        ))),
        None => Err(YtError::InvalidUrl(format!("no playlist ID in URL: {}", url))),
    }
}

/// Extract channel ID from a /channel/ URL (or accept a bare channel ID)
pub fn extract_channel_id(url: &str) -> Result<String, YtError> {
    if is_channel_id(url)? {
        return Ok(url.to_string());
    }

    let parsed = parse_youtube_url(url)
        .ok_or_else(|| YtError::InvalidUrl(format!("not a YouTube URL: {}", url)))?;

    match path_segments(&parsed).as_slice() {
        ["channel", id, ..] if is_channel_id(id)? => Ok(id.to_string()),
        _ => Err(YtError::InvalidUrl(format!("no channel ID in URL: {}", url))),
    }
}

/// Classify a YouTube URL and pull out the ID it refers to.
///
/// A `/playlist` page wins over everything; a watch URL that also carries
/// `list=` resolves to the video.
pub fn parse_url(url: &str) -> Option<ParsedUrl> {
    let parsed = parse_youtube_url(url)?;

    if path_segments(&parsed).first() == Some(&"playlist") {
        return extract_playlist_id(url).ok().map(|id| ParsedUrl {
            kind: UrlKind::Playlist,
            id,
        });
    }

    if let Ok(id) = extract_video_id(url) {
        return Some(ParsedUrl {
            kind: UrlKind::Video,
            id,
        });
    }

    if let Ok(id) = extract_playlist_id(url) {
        return Some(ParsedUrl {
            kind: UrlKind::Playlist,
            id,
        });
    }

    extract_channel_id(url).ok().map(|id| ParsedUrl {
        kind: UrlKind::Channel,
        id,
    })
}
