//! YouTube Data API transport and wire types

pub mod client;
pub mod endpoint;
pub mod resource;

pub use client::*;
pub use endpoint::*;
pub use resource::{largest_thumbnail, ListResponse, PageInfo, Thumbnail};
