//! Search results and their dispatch by resource kind

use crate::core::channel::Channel;
use crate::core::playlist::Playlist;
use crate::core::video::Video;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Resource type filter for `search.list`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Video,
    Playlist,
    Channel,
}

impl SearchType {
    /// Value of the `type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Video => "video",
            SearchType::Playlist => "playlist",
            SearchType::Channel => "channel",
        }
    }
}

/// One item of a search response
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "item", rename_all = "lowercase")]
pub enum SearchResult {
    Video(Video),
    Playlist(Playlist),
    Channel(Channel),
    /// An item whose `id` names none of the known kinds, or that failed to
    /// decode, kept untouched
    Raw(Value),
}

impl SearchResult {
    /// Tag a search item by which of `id.videoId`, `id.playlistId` or
    /// `id.channelId` is present, checked in that order.
    ///
    /// An item of a known kind that fails to decode is kept as `Raw`, so one
    /// bad item never costs the rest of the page.
    pub fn from_json(item: Value) -> Self {
        let has_id = |key: &str| {
            item.get("id")
                .and_then(|id| id.get(key))
                .map(|value| !value.is_null())
                .unwrap_or(false)
        };

        let parsed = if has_id("videoId") {
            Video::from_json(item.clone()).map(SearchResult::Video)
        } else if has_id("playlistId") {
            Playlist::from_json(item.clone()).map(SearchResult::Playlist)
        } else if has_id("channelId") {
            Channel::from_json(item.clone()).map(SearchResult::Channel)
        } else {
            return SearchResult::Raw(item);
        };

        parsed.unwrap_or_else(|err| {
            warn!("Keeping undecodable search item as raw JSON: {}", err);
            SearchResult::Raw(item)
        })
    }

    /// Kind of a decoded result; `None` for raw items
    pub fn kind(&self) -> Option<SearchType> {
        match self {
            SearchResult::Video(_) => Some(SearchType::Video),
            SearchResult::Playlist(_) => Some(SearchType::Playlist),
            SearchResult::Channel(_) => Some(SearchType::Channel),
            SearchResult::Raw(_) => None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            SearchResult::Video(video) => Some(&video.id),
            SearchResult::Playlist(playlist) => Some(&playlist.id),
            SearchResult::Channel(channel) => Some(&channel.id),
            SearchResult::Raw(_) => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            SearchResult::Video(video) => Some(&video.title),
            SearchResult::Playlist(playlist) => Some(&playlist.title),
            SearchResult::Channel(channel) => Some(&channel.title),
            SearchResult::Raw(item) => item.pointer("/snippet/title").and_then(Value::as_str),
        }
    }

    pub fn into_video(self) -> Option<Video> {
        match self {
            SearchResult::Video(video) => Some(video),
            _ => None,
        }
    }

    pub fn into_playlist(self) -> Option<Playlist> {
        match self {
            SearchResult::Playlist(playlist) => Some(playlist),
            _ => None,
        }
    }

    pub fn into_channel(self) -> Option<Channel> {
        match self {
            SearchResult::Channel(channel) => Some(channel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn search_item(id: Value) -> Value {
        json!({
            "kind": "youtube#searchResult",
            "etag": "etag",
            "id": id,
            "snippet": { "title": "Result", "channelId": "UC_x5XG1OV2P6uZZ5FSM9Ttw" }
        })
    }

    #[test]
    fn test_dispatch_video() {
        let result = SearchResult::from_json(search_item(
            json!({ "kind": "youtube#video", "videoId": "dQw4w9WgXcQ" }),
        ));
        assert!(matches!(&result, SearchResult::Video(v) if v.id == "dQw4w9WgXcQ"));
        assert_eq!(result.id(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_dispatch_playlist() {
        let result = SearchResult::from_json(search_item(
            json!({ "kind": "youtube#playlist", "playlistId": "PLxxxx" }),
        ));
        assert!(matches!(&result, SearchResult::Playlist(p) if p.id == "PLxxxx"));
        assert_eq!(result.kind(), Some(SearchType::Playlist));
    }

    #[test]
    fn test_dispatch_channel() {
        let result = SearchResult::from_json(search_item(json!({
            "kind": "youtube#channel",
            "channelId": "UC_x5XG1OV2P6uZZ5FSM9Ttw"
        })));
        let channel = result.into_channel().unwrap();
        assert_eq!(channel.id, "UC_x5XG1OV2P6uZZ5FSM9Ttw");
    }

    #[test]
    fn test_dispatch_raw() {
        let item = search_item(json!({ "kind": "youtube#somethingElse" }));
        let result = SearchResult::from_json(item.clone());
        assert!(matches!(&result, SearchResult::Raw(raw) if *raw == item));
        assert_eq!(result.kind(), None);
        assert_eq!(result.id(), None);
        assert_eq!(result.title(), Some("Result"));

        // A plain string id is not a search id either
        let result = SearchResult::from_json(json!({ "id": "dQw4w9WgXcQ" }));
        assert!(matches!(result, SearchResult::Raw(_)));
    }

    #[test]
    fn test_undecodable_item_kept_raw() {
        let mut item = search_item(json!({ "kind": "youtube#video", "videoId": "dQw4w9WgXcQ" }));
        item["snippet"]["publishedAt"] = json!("1970-01-01");

        let result = SearchResult::from_json(item.clone());
        assert!(matches!(&result, SearchResult::Raw(raw) if *raw == item));
        assert_eq!(result.title(), Some("Result"));
    }

    #[test]
    fn test_video_id_takes_precedence() {
        // snippet.channelId must not turn a video hit into a channel
        let result = SearchResult::from_json(search_item(json!({
            "videoId": "dQw4w9WgXcQ",
            "channelId": "UC_x5XG1OV2P6uZZ5FSM9Ttw"
        })));
        assert!(result.into_video().is_some());
    }

    #[test]
    fn test_serialized_tag() {
        let result = SearchResult::from_json(search_item(
            json!({ "kind": "youtube#playlist", "playlistId": "PLxxxx" }),
        ));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["type"], "playlist");
        assert_eq!(value["item"]["id"], "PLxxxx");
    }

    #[test]
    fn test_search_type_values() {
        assert_eq!(SearchType::Video.as_str(), "video");
        assert_eq!(SearchType::Playlist.as_str(), "playlist");
        assert_eq!(SearchType::Channel.as_str(), "channel");
    }
}
