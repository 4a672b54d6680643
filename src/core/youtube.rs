//! The `YouTube` facade: lookups by URL or ID, and search

use crate::core::channel::Channel;
use crate::core::playlist::Playlist;
use crate::core::search::{SearchResult, SearchType};
use crate::core::video::Video;
use crate::error::YtError;
use crate::platform::client::{ApiClient, ClientConfig};
use crate::platform::endpoint::Endpoint;
use crate::utils::url::{self, ParsedUrl};
use serde_json::Value;
use tracing::{debug, info};

/// Environment variable read by [`YouTube::from_env`]
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// Search parameters callers may not override
const RESERVED_SEARCH_PARAMS: &[&str] = &["q", "part", "maxResults", "key"];

/// Client for the YouTube Data API v3.
///
/// Every method is a single stateless GET; the value is cheap to clone and
/// share between tasks.
#[derive(Debug, Clone)]
pub struct YouTube {
    client: ApiClient,
}

impl YouTube {
    /// Create a client for the given API key
    pub fn new(key: impl Into<String>) -> Result<Self, YtError> {
        Self::with_config(key, ClientConfig::default())
    }

    /// Create a client with custom HTTP configuration
    pub fn with_config(key: impl Into<String>, config: ClientConfig) -> Result<Self, YtError> {
        Ok(Self {
            client: ApiClient::with_config(key, config)?,
        })
    }

    /// Create a client using the key in `YOUTUBE_API_KEY`
    pub fn from_env() -> Result<Self, YtError> {
        let key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(YtError::ApiKeyNotFound)?;
        Self::new(key)
    }

    /// Underlying API client
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Check if the URL belongs to YouTube
    pub fn check_base_url(url: &str) -> bool {
        url::check_base_url(url)
    }

    /// Classify a YouTube URL as video, playlist or channel
    pub fn parse_url(url: &str) -> Option<ParsedUrl> {
        url::parse_url(url)
    }

    /// Look up a video by its URL. Fails without a request if the URL holds no video ID.
    pub async fn get_video(&self, url: &str) -> Result<Option<Video>, YtError> {
        let id = url::extract_video_id(url)?;
        self.get_video_by_id(&id).await
    }

    /// Look up a video by ID. `Ok(None)` when the API knows no such video.
    pub async fn get_video_by_id(&self, id: &str) -> Result<Option<Video>, YtError> {
        debug!("Looking up video {}", id);
        self.fetch_first(Endpoint::Videos, id)
            .await?
            .map(Video::from_json)
            .transpose()
    }

    /// Look up a playlist by its URL (or a bare playlist ID)
    pub async fn get_playlist(&self, url: &str) -> Result<Option<Playlist>, YtError> {
        let id = url::extract_playlist_id(url)?;
        self.get_playlist_by_id(&id).await
    }

    pub async fn get_playlist_by_id(&self, id: &str) -> Result<Option<Playlist>, YtError> {
        debug!("Looking up playlist {}", id);
        self.fetch_first(Endpoint::Playlists, id)
            .await?
            .map(Playlist::from_json)
            .transpose()
    }

    /// Look up a channel by its `/channel/` URL (or a bare channel ID)
    pub async fn get_channel(&self, url: &str) -> Result<Option<Channel>, YtError> {
        let id = url::extract_channel_id(url)?;
        self.get_channel_by_id(&id).await
    }

    pub async fn get_channel_by_id(&self, id: &str) -> Result<Option<Channel>, YtError> {
        debug!("Looking up channel {}", id);
        self.fetch_first(Endpoint::Channels, id)
            .await?
            .map(Channel::from_json)
            .transpose()
    }

    /// Fetch up to `limit` videos of a playlist in one `playlistItems` request
    pub async fn get_playlist_videos(
        &self,
        playlist_id: &str,
        limit: u32,
    ) -> Result<Vec<Video>, YtError> {
        let max_results = limit.to_string();
        let params = [
            ("playlistId", playlist_id),
            ("part", Endpoint::PlaylistItems.default_part()),
            ("maxResults", max_results.as_str()),
        ];

        let response = self.client.get(Endpoint::PlaylistItems, &params).await?;
        response.items.into_iter().map(Video::from_json).collect()
    }

    /// Fill [`Playlist::videos`] with up to `limit` of its videos
    pub async fn load_playlist_videos(
        &self,
        playlist: &mut Playlist,
        limit: u32,
    ) -> Result<(), YtError> {
        playlist.videos = self.get_playlist_videos(&playlist.id, limit).await?;
        info!(
            "Loaded {} video(s) of playlist {}",
            playlist.videos.len(),
            playlist.id
        );
        Ok(())
    }

    /// Search across videos, playlists and channels
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>, YtError> {
        self.search_with(query, limit, &[]).await
    }

    /// Search with extra query parameters (`type`, `order`, `regionCode`, ...).
    ///
    /// `q`, `part`, `maxResults` and `key` are always set by the client; extra
    /// values for them are ignored.
    pub async fn search_with(
        &self,
        query: &str,
        limit: u32,
        extra: &[(&str, &str)],
    ) -> Result<Vec<SearchResult>, YtError> {
        let max_results = limit.to_string();
        let mut params = vec![
            ("q", query),
            ("part", Endpoint::Search.default_part()),
            ("maxResults", max_results.as_str()),
        ];
        params.extend(
            extra
                .iter()
                .filter(|(key, _)| !RESERVED_SEARCH_PARAMS.contains(key))
                .copied(),
        );

        debug!("Searching for {:?} (limit {})", query, limit);
        let response = self.client.get(Endpoint::Search, &params).await?;
        Ok(response
            .items
            .into_iter()
            .map(SearchResult::from_json)
            .collect())
    }

    /// Search restricted to videos
    pub async fn search_videos(&self, query: &str, limit: u32) -> Result<Vec<Video>, YtError> {
        Ok(self
            .search_typed(query, limit, SearchType::Video)
            .await?
            .into_iter()
            .filter_map(SearchResult::into_video)
            .collect())
    }

    /// Search restricted to playlists
    pub async fn search_playlists(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Playlist>, YtError> {
        Ok(self
            .search_typed(query, limit, SearchType::Playlist)
            .await?
            .into_iter()
            .filter_map(SearchResult::into_playlist)
            .collect())
    }

    /// Search restricted to channels
    pub async fn search_channels(&self, query: &str, limit: u32) -> Result<Vec<Channel>, YtError> {
        Ok(self
            .search_typed(query, limit, SearchType::Channel)
            .await?
            .into_iter()
            .filter_map(SearchResult::into_channel)
            .collect())
    }

    async fn search_typed(
        &self,
        query: &str,
        limit: u32,
        kind: SearchType,
    ) -> Result<Vec<SearchResult>, YtError> {
        self.search_with(query, limit, &[("type", kind.as_str())])
            .await
    }

    async fn fetch_first(&self, endpoint: Endpoint, id: &str) -> Result<Option<Value>, YtError> {
        let params = [("id", id), ("part", endpoint.default_part())];
        let response = self.client.get(endpoint, &params).await?;
        Ok(response.items.into_iter().next())
    }
}
