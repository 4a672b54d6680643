//! Playlist entity

use crate::core::channel::Channel;
use crate::core::video::Video;
use crate::error::YtError;
use crate::platform::resource::{largest_thumbnail, Resource, Thumbnail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A YouTube playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist ID
    pub id: String,
    pub title: String,
    pub description: String,
    pub published_at: Option<DateTime<Utc>>,
    pub thumbnails: BTreeMap<String, Thumbnail>,
    /// Owning channel (ID and title only)
    pub channel: Option<Channel>,
    /// Number of items, when `contentDetails` was requested
    pub item_count: Option<u64>,
    /// Videos in the playlist; empty until loaded with
    /// [`YouTube::load_playlist_videos`](crate::YouTube::load_playlist_videos)
    pub videos: Vec<Video>,
    /// The API item this playlist was built from
    pub raw: Value,
}

impl Playlist {
    /// Build a playlist from a `playlists` or `search` item
    pub fn from_json(raw: Value) -> Result<Self, YtError> {
        let resource: Resource = serde_json::from_value(raw.clone())?;
        let id = resource.playlist_id().unwrap_or_default().to_string();
        let snippet = resource.snippet;

        let channel = snippet
            .channel_id
            .map(|channel_id| Channel::partial(channel_id, snippet.channel_title));

        Ok(Self {
            id,
            title: snippet.title,
            description: snippet.description,
            published_at: snippet.published_at,
            thumbnails: snippet.thumbnails,
            channel,
            item_count: resource.content_details.item_count,
            videos: Vec::new(),
            raw,
        })
    }

    /// Playlist page URL
    pub fn url(&self) -> String {
        format!("https://www.youtube.com/playlist?list={}", self.id)
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
    fn test_playlist_from_playlists_item() {
        let playlist = Playlist::from_json(json!({
            "kind": "youtube#playlist",
            "id": "PLOU2XLYxmsIKC8eODk_RNCWv3fBcLvMMy",
            "snippet": {
                "publishedAt": "2015-05-01T16:48:07Z",
                "channelId": "UC_x5XG1OV2P6uZZ5FSM9Ttw",
                "channelTitle": "Google for Developers",
                "title": "Google I/O 2015",
                "description": "Sessions from I/O"
            },
            "contentDetails": { "itemCount": 42 }
        }))
        .unwrap();

        assert_eq!(playlist.id, "PLOU2XLYxmsIKC8eODk_RNCWv3fBcLvMMy");
        assert_eq!(playlist.title, "Google I/O 2015");
        assert_eq!(playlist.item_count, Some(42));
        assert!(playlist.videos.is_empty());
        assert_eq!(
            playlist.channel.as_ref().map(|c| c.id.as_str()),
            Some("UC_x5XG1OV2P6uZZ5FSM9Ttw")
        );
        assert_eq!(
            playlist.url(),
            "https://www.youtube.com/playlist?list=PLOU2XLYxmsIKC8eODk_RNCWv3fBcLvMMy"
        );
    }

    #[test]
    fn test_playlist_from_search_item() {
        let playlist = Playlist::from_json(json!({
            "kind": "youtube#searchResult",
            "id": { "kind": "youtube#playlist", "playlistId": "PLxxxx" },
            "snippet": { "title": "Mix" }
        }))
        .unwrap();

        assert_eq!(playlist.id, "PLxxxx");
        assert_eq!(playlist.title, "Mix");
        assert!(playlist.item_count.is_none());
        assert!(playlist.channel.is_none());
    }
}
