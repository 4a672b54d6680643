//! Video entity

use crate::core::channel::Channel;
use crate::error::YtError;
use crate::platform::resource::{largest_thumbnail, Resource, Thumbnail};
use crate::utils::duration::parse_iso8601_duration;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// A YouTube video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// YouTube video ID
    pub id: String,
    pub title: String,
    pub description: String,
    pub published_at: Option<DateTime<Utc>>,
    pub thumbnails: BTreeMap<String, Thumbnail>,
    /// Uploading channel (ID and title only)
    pub channel: Option<Channel>,
    pub tags: Vec<String>,
    /// Length, when `contentDetails` was requested
    pub duration: Option<Duration>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
    /// The API item this video was built from
    pub raw: Value,
}

impl Video {
    /// Build a video from a `videos`, `search` or `playlistItems` item
    pub fn from_json(raw: Value) -> Result<Self, YtError> {
        let resource: Resource = serde_json::from_value(raw.clone())?;
        let id = resource.video_id().unwrap_or_default().to_string();
        let Resource {
            snippet,
            content_details,
            statistics,
            ..
        } = resource;

        let channel = snippet
            .channel_id
            .map(|channel_id| Channel::partial(channel_id, snippet.channel_title));
        let duration = content_details
            .duration
            .as_deref()
            .and_then(parse_iso8601_duration);

        Ok(Self {
            id,
            title: snippet.title,
            description: snippet.description,
            published_at: snippet.published_at,
            thumbnails: snippet.thumbnails,
            channel,
            tags: snippet.tags,
            duration,
            view_count: statistics.view_count,
            like_count: statistics.like_count,
            comment_count: statistics.comment_count,
            raw,
        })
    }

    /// Watch page URL
    pub fn url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    /// youtu.be short link
    pub fn short_url(&self) -> String {
        format!("https://youtu.be/{}", self.id)
    }

    pub fn thumbnail(&self) -> Option<&Thumbnail> {
        largest_thumbnail(&self.thumbnails)
    }
}
