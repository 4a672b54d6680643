//! Fixed YouTube Data API v3 resource paths

use std::fmt;

/// A YouTube Data API v3 endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Videos,
    Playlists,
    PlaylistItems,
    Channels,
    Search,
}

impl Endpoint {
    /// Path segment appended to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Videos => "videos",
            Endpoint::Playlists => "playlists",
            Endpoint::PlaylistItems => "playlistItems",
            Endpoint::Channels => "channels",
            Endpoint::Search => "search",
        }
    }

    /// `part` value requested for this endpoint
    pub fn default_part(&self) -> &'static str {
        match self {
            Endpoint::Videos => "snippet,contentDetails,statistics",
            Endpoint::Playlists => "snippet,contentDetails",
            Endpoint::PlaylistItems => "snippet,contentDetails",
            Endpoint::Channels => "snippet,statistics",
            Endpoint::Search => "snippet",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
