//! # ytdata - YouTube Data API v3 client
//!
//! Typed lookups and search against the YouTube Data API.
//!
//! ## Features
//!
//! - Video, playlist and channel lookup by URL or ID
//! - Mixed or type-restricted search
//! - URL validation and ID extraction that never touches the network
//! - Raw API items kept alongside the typed fields
//!
//! ## Example
//!
//! ```rust,no_run
//! use ytdata::YouTube;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let youtube = YouTube::new("API_KEY")?;
//!
//!     if let Some(video) = youtube
//!         .get_video("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
//!         .await?
//!     {
//!         println!("{} ({})", video.title, video.url());
//!     }
//!
//!     for channel in youtube.search_channels("rust", 5).await? {
//!         println!("{}", channel.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod platform;
pub mod utils;

// Re-export main types
pub use crate::core::{Channel, Playlist, SearchResult, SearchType, Video, YouTube};
pub use error::YtError;
pub use platform::{ClientConfig, Thumbnail};
pub use utils::url::{ParsedUrl, UrlKind};

/// Result type alias for ytdata operations
pub type Result<T> = std::result::Result<T, YtError>;
