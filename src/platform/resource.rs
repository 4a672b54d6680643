//! Serde mirrors of the API response envelope and item fragments.
//!
//! These types are deliberately lenient: every field the typed entities read
//! is optional or defaulted, so a missing `part` never fails a lookup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Envelope returned by every `*.list` and `search.list` call.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list#response>
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default)]
    pub kind: String,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub page_info: Option<PageInfo>,
}

/// Paging details for lists of resources
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub results_per_page: u64,
}

/// Error body returned alongside non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
}

/// The `id` of an item: a plain string on the resource endpoints, an object
/// on `search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Plain(String),
    Search(SearchId),
}

impl ResourceId {
    fn resolve<'a>(&'a self, pick: impl FnOnce(&'a SearchId) -> Option<&'a str>) -> Option<&'a str> {
        match self {
            ResourceId::Plain(id) => Some(id.as_str()),
            ResourceId::Search(id) => pick(id),
        }
    }
}

/// Object form of an ID (search results and `snippet.resourceId`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchId {
    pub kind: Option<String>,
    pub video_id: Option<String>,
    pub playlist_id: Option<String>,
    pub channel_id: Option<String>,
}

/// A single item of any of the supported endpoints
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(default)]
    pub kind: String,
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub snippet: Snippet,
    #[serde(default)]
    pub content_details: ContentDetails,
    #[serde(default)]
    pub statistics: Statistics,
}

impl Resource {
    /// Video ID, following `snippet.resourceId` for playlist items
    pub fn video_id(&self) -> Option<&str> {
        if self.kind == "youtube#playlistItem" {
            return self
                .snippet
                .resource_id
                .as_ref()
                .and_then(|r| r.video_id.as_deref())
                .or(self.content_details.video_id.as_deref());
        }
        self.id.as_ref()?.resolve(|id| id.video_id.as_deref())
    }

    pub fn playlist_id(&self) -> Option<&str> {
        self.id.as_ref()?.resolve(|id| id.playlist_id.as_deref())
    }

    pub fn channel_id(&self) -> Option<&str> {
        self.id.as_ref()?.resolve(|id| id.channel_id.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub published_at: Option<DateTime<Utc>>,
    pub channel_id: Option<String>,
    pub channel_title: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: BTreeMap<String, Thumbnail>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub custom_url: Option<String>,
    pub country: Option<String>,
    pub resource_id: Option<SearchId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    pub duration: Option<String>,
    pub item_count: Option<u64>,
    pub video_id: Option<String>,
}

/// Statistics of videos and channels. Counts arrive as decimal strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub view_count: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub like_count: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub comment_count: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub subscriber_count: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub video_count: Option<u64>,
    pub hidden_subscriber_count: Option<bool>,
}

/// A thumbnail image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Pick the widest thumbnail of a set
pub fn largest_thumbnail(thumbnails: &BTreeMap<String, Thumbnail>) -> Option<&Thumbnail> {
    thumbnails.values().max_by_key(|t| t.width.unwrap_or(0))
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Text(String),
    }

    Ok(match Option::<Count>::deserialize(deserializer)? {
        Some(Count::Number(n)) => Some(n),
        Some(Count::Text(s)) => s.parse().ok(),
        None => None,
    })
}
