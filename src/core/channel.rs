//! Channel entity

use crate::error::YtError;
use crate::platform::resource::{largest_thumbnail, Resource, Thumbnail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A YouTube channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Channel ID (`UC…`)
    pub id: String,
    pub title: String,
    pub description: String,
    /// Custom URL / handle, e.g. `@googledevelopers`
    pub custom_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub thumbnails: BTreeMap<String, Thumbnail>,
    pub country: Option<String>,
    pub view_count: Option<u64>,
    pub comment_count: Option<u64>,
    pub subscriber_count: Option<u64>,
    pub hidden_subscriber_count: Option<bool>,
    pub video_count: Option<u64>,
    /// The API item this channel was built from
    pub raw: Value,
}

impl Channel {
    /// Build a channel from a `channels` or `search` item
    pub fn from_json(raw: Value) -> Result<Self, YtError> {
        let resource: Resource = serde_json::from_value(raw.clone())?;
        let id = resource.channel_id().unwrap_or_default().to_string();
        let snippet = resource.snippet;
        let statistics = resource.statistics;

        Ok(Self {
            id,
            title: snippet.title,
            description: snippet.description,
            custom_url: snippet.custom_url,
            published_at: snippet.published_at,
            thumbnails: snippet.thumbnails,
            country: snippet.country,
            view_count: statistics.view_count,
            comment_count: statistics.comment_count,
            subscriber_count: statistics.subscriber_count,
            hidden_subscriber_count: statistics.hidden_subscriber_count,
            video_count: statistics.video_count,
            raw,
        })
    }

    /// Channel known only by ID and title, as referenced from a video or playlist snippet
    pub fn partial(id: impl Into<String>, title: Option<String>) -> Self {
        Self {
            id: id.into(),
            title: title.unwrap_or_default(),
            description: String::new(),
            custom_url: None,
            published_at: None,
            thumbnails: BTreeMap::new(),
            country: None,
            view_count: None,
            comment_count: None,
            subscriber_count: None,
            hidden_subscriber_count: None,
            video_count: None,
            raw: Value::Null,
        }
    }

    /// Channel page URL
    pub fn url(&self) -> String {
        format!("https://www.youtube.com/channel/{}", self.id)
    }

    pub fn thumbnail(&self) -> Option<&Thumbnail> {
        largest_thumbnail(&self.thumbnails)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_channel_from_channels_item() {
        let channel = Channel::from_json(json!({
            "kind": "youtube#channel",
            "id": "UC_x5XG1OV2P6uZZ5FSM9Ttw",
            "snippet": {
                "title": "Google for Developers",
                "description": "Subscribe to join a community of creative developers",
                "customUrl": "@googledevelopers",
                "publishedAt": "2007-08-23T00:34:43Z",
                "country": "US"
            },
            "statistics": {
                "viewCount": "256283443",
                "subscriberCount": "2370000",
                "hiddenSubscriberCount": false,
                "videoCount": "6320"
            }
        }))
        .unwrap();

        assert_eq!(channel.id, "UC_x5XG1OV2P6uZZ5FSM9Ttw");
        assert_eq!(channel.title, "Google for Developers");
        assert_eq!(channel.custom_url.as_deref(), Some("@googledevelopers"));
        assert_eq!(channel.country.as_deref(), Some("US"));
        assert_eq!(channel.view_count, Some(256_283_443));
        assert_eq!(channel.subscriber_count, Some(2_370_000));
        assert_eq!(channel.video_count, Some(6320));
        assert_eq!(channel.comment_count, None);
        assert_eq!(channel.hidden_subscriber_count, Some(false));
        assert_eq!(
            channel.published_at.map(|t| t.to_rfc3339()),
            Some("2007-08-23T00:34:43+00:00".to_string())
        );
        assert_eq!(
            channel.url(),
            "https://www.youtube.com/channel/UC_x5XG1OV2P6uZZ5FSM9Ttw"
        );
        assert_eq!(channel.raw["snippet"]["country"], "US");
    }

    #[test]
    fn test_channel_from_search_item() {
        let channel = Channel::from_json(json!({
            "kind": "youtube#searchResult",
            "id": { "kind": "youtube#channel", "channelId": "UC_x5XG1OV2P6uZZ5FSM9Ttw" },
            "snippet": { "title": "Google for Developers" }
        }))
        .unwrap();

        assert_eq!(channel.id, "UC_x5XG1OV2P6uZZ5FSM9Ttw");
        assert_eq!(channel.title, "Google for Developers");
        assert!(channel.subscriber_count.is_none());
    }

    #[test]
    fn test_partial_channel() {
        let channel = Channel::partial("UCabc", Some("Someone".to_string()));
        assert_eq!(channel.id, "UCabc");
        assert_eq!(channel.title, "Someone");
        assert!(channel.raw.is_null());
    }
}
